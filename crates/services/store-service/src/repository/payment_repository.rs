//! Payment repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::payment::{self, ActiveModel, Entity as PaymentEntity};
use common::{AppError, AppResult};
use domain::{NewPayment, Payment, PaymentChanges, PaymentFilter, PAYMENT_STATUS_PENDING};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: NewPayment) -> AppResult<Payment>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payment>>;

    /// One page of matching payments (newest first) plus the total match count
    async fn search(
        &self,
        filter: PaymentFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<(Vec<Payment>, u64)>;

    /// Every payment, for statistics
    async fn all(&self) -> AppResult<Vec<Payment>>;

    async fn update(&self, id: Uuid, changes: PaymentChanges) -> AppResult<Payment>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct PaymentStore {
    db: DatabaseConnection,
}

impl PaymentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn filter_condition(filter: &PaymentFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(status) = &filter.status {
        condition = condition.add(payment::Column::Status.eq(status.clone()));
    }
    if let Some(method) = &filter.method {
        condition = condition.add(payment::Column::Method.eq(method.clone()));
    }
    if let Some(from) = filter.from {
        condition = condition.add(payment::Column::Date.gte(from));
    }
    if let Some(to) = filter.to {
        condition = condition.add(payment::Column::Date.lte(to));
    }
    if let Some(min) = filter.min_amount {
        condition = condition.add(payment::Column::Amount.gte(min));
    }
    if let Some(max) = filter.max_amount {
        condition = condition.add(payment::Column::Amount.lte(max));
    }
    if let Some(booking_id) = &filter.booking_id {
        condition = condition.add(payment::Column::BookingId.eq(booking_id.clone()));
    }

    condition
}

#[async_trait]
impl PaymentRepository for PaymentStore {
    async fn create(&self, new: NewPayment) -> AppResult<Payment> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            amount: Set(new.amount),
            method: Set(new.method),
            status: Set(new
                .status
                .unwrap_or_else(|| PAYMENT_STATUS_PENDING.to_string())),
            date: Set(chrono::Utc::now()),
            booking_id: Set(new.booking_id),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Payment::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payment>> {
        let result = PaymentEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Payment::from))
    }

    async fn search(
        &self,
        filter: PaymentFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<(Vec<Payment>, u64)> {
        let query = PaymentEntity::find()
            .filter(filter_condition(&filter))
            .order_by_desc(payment::Column::Date);

        let total = query.clone().count(&self.db).await?;
        let models = query.offset(offset).limit(limit).all(&self.db).await?;

        Ok((models.into_iter().map(Payment::from).collect(), total))
    }

    async fn all(&self) -> AppResult<Vec<Payment>> {
        let models = PaymentEntity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Payment::from).collect())
    }

    async fn update(&self, id: Uuid, changes: PaymentChanges) -> AppResult<Payment> {
        let payment = PaymentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Payment"))?;

        let mut active: ActiveModel = payment.into();

        if let Some(amount) = changes.amount {
            active.amount = Set(amount);
        }
        if let Some(method) = changes.method {
            active.method = Set(method);
        }
        if let Some(status) = changes.status {
            active.status = Set(status);
        }
        if let Some(booking_id) = changes.booking_id {
            active.booking_id = Set(booking_id);
        }

        let model = active.update(&self.db).await?;
        Ok(Payment::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = PaymentEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Payment"));
        }

        Ok(())
    }
}
