//! Payment service - bookkeeping of client-reported payments.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt, Paginated, PaginationParams};
use domain::{fits_money_column, NewPayment, Payment, PaymentChanges, PaymentFilter, PaymentStats};
use rust_decimal::Decimal;

use crate::repository::PaymentRepository;

#[async_trait]
pub trait PaymentService: Send + Sync {
    async fn record_payment(&self, payment: NewPayment) -> AppResult<Payment>;

    async fn get_payment(&self, id: Uuid) -> AppResult<Payment>;

    async fn list_payments(
        &self,
        filter: PaymentFilter,
        page: PaginationParams,
    ) -> AppResult<Paginated<Payment>>;

    async fn stats(&self) -> AppResult<PaymentStats>;

    async fn update_payment(&self, id: Uuid, changes: PaymentChanges) -> AppResult<Payment>;

    async fn delete_payment(&self, id: Uuid) -> AppResult<()>;
}

pub struct PaymentManager {
    repo: Arc<dyn PaymentRepository>,
}

impl PaymentManager {
    pub fn new(repo: Arc<dyn PaymentRepository>) -> Self {
        Self { repo }
    }
}

fn check_amount(amount: Decimal) -> AppResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(AppError::validation("Amount must be greater than zero"));
    }
    if !fits_money_column(amount) {
        return Err(AppError::validation("Amount is too large"));
    }
    Ok(amount)
}

fn required(field: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

#[async_trait]
impl PaymentService for PaymentManager {
    async fn record_payment(&self, mut payment: NewPayment) -> AppResult<Payment> {
        check_amount(payment.amount)?;
        payment.method = required("Payment method", &payment.method)?;
        payment.booking_id = required("Booking id", &payment.booking_id)?;
        payment.status = payment
            .status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let created = self.repo.create(payment).await?;
        info!(
            payment_id = %created.id,
            booking_id = %created.booking_id,
            "Payment recorded"
        );
        Ok(created)
    }

    async fn get_payment(&self, id: Uuid) -> AppResult<Payment> {
        self.repo.find_by_id(id).await?.ok_or_not_found("Payment")
    }

    async fn list_payments(
        &self,
        filter: PaymentFilter,
        page: PaginationParams,
    ) -> AppResult<Paginated<Payment>> {
        let (payments, total) = self
            .repo
            .search(filter, page.offset(), page.limit())
            .await?;
        Ok(Paginated::new(payments, page, total))
    }

    async fn stats(&self) -> AppResult<PaymentStats> {
        let payments = self.repo.all().await?;
        Ok(PaymentStats::compute(&payments))
    }

    async fn update_payment(&self, id: Uuid, mut changes: PaymentChanges) -> AppResult<Payment> {
        changes.amount = changes.amount.map(check_amount).transpose()?;
        changes.method = changes
            .method
            .as_deref()
            .map(|m| required("Payment method", m))
            .transpose()?;
        changes.booking_id = changes
            .booking_id
            .as_deref()
            .map(|b| required("Booking id", b))
            .transpose()?;
        changes.status = changes
            .status
            .as_deref()
            .map(|s| required("Status", s))
            .transpose()?;

        self.repo.update(id, changes).await
    }

    async fn delete_payment(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        info!(payment_id = %id, "Payment deleted");
        Ok(())
    }
}
