//! Order repository. Orders are append-only apart from their status.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::order::{self, ActiveModel, Entity as OrderEntity, LineItems, ShippingAddress};
use common::{AppError, AppResult};
use domain::{NewOrder, Order, OrderFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order in the given initial status
    async fn create(&self, order: NewOrder, status: String) -> AppResult<Order>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>>;

    /// Orders owned by one user, newest first
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Order>>;

    /// One page of matching orders (newest first) plus the total match count
    async fn search(
        &self,
        filter: OrderFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<(Vec<Order>, u64)>;

    /// Every order, for request-time aggregation
    async fn all(&self) -> AppResult<Vec<Order>>;

    /// The most recent orders
    async fn recent(&self, limit: u64) -> AppResult<Vec<Order>>;

    /// Overwrite the status label
    async fn update_status(&self, id: Uuid, status: String) -> AppResult<Order>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn filter_condition(filter: &OrderFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(status) = &filter.status {
        condition = condition.add(order::Column::Status.eq(status.clone()));
    }
    if let Some(method) = &filter.payment_method {
        condition = condition.add(order::Column::PaymentMethod.eq(method.clone()));
    }
    if let Some(user_id) = filter.user_id {
        condition = condition.add(order::Column::UserId.eq(user_id));
    }
    if let Some(from) = filter.from {
        condition = condition.add(order::Column::CreatedAt.gte(from));
    }
    if let Some(to) = filter.to {
        condition = condition.add(order::Column::CreatedAt.lte(to));
    }
    if let Some(min) = filter.min_total {
        condition = condition.add(order::Column::Total.gte(min));
    }
    if let Some(max) = filter.max_total {
        condition = condition.add(order::Column::Total.lte(max));
    }

    condition
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn create(&self, new: NewOrder, status: String) -> AppResult<Order> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(new.owner.id()),
            demo_ref: Set(new.owner.demo_reference().map(str::to_string)),
            items: Set(LineItems(new.items)),
            address: Set(ShippingAddress(new.address)),
            total: Set(new.total),
            payment_method: Set(new.payment_method),
            payment_id: Set(new.payment_id),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Order::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        let result = OrderEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Order::from))
    }

    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_desc(order::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Order::from).collect())
    }

    async fn search(
        &self,
        filter: OrderFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<(Vec<Order>, u64)> {
        let query = OrderEntity::find()
            .filter(filter_condition(&filter))
            .order_by_desc(order::Column::CreatedAt);

        let total = query.clone().count(&self.db).await?;
        let models = query.offset(offset).limit(limit).all(&self.db).await?;

        Ok((models.into_iter().map(Order::from).collect(), total))
    }

    async fn all(&self) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .order_by_asc(order::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Order::from).collect())
    }

    async fn recent(&self, limit: u64) -> AppResult<Vec<Order>> {
        let models = OrderEntity::find()
            .order_by_desc(order::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Order::from).collect())
    }

    async fn update_status(&self, id: Uuid, status: String) -> AppResult<Order> {
        let order = OrderEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Order"))?;

        let mut active: ActiveModel = order.into();
        active.status = Set(status);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Order::from(model))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(OrderEntity::find().count(&self.db).await?)
    }
}
