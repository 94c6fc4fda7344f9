//! Order service - checkout, tracking, status changes and analytics.
//!
//! Totals are taken as submitted and stock is left untouched; a retried
//! checkout produces a second order.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt, Paginated, PaginationParams};
use domain::{
    fits_money_column, NewOrder, Order, OrderAnalytics, OrderFilter, OrderOwner,
    MAX_ITEM_QUANTITY, MAX_TOP_PRODUCTS,
};

use crate::repository::OrderRepository;

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn place_order(&self, order: NewOrder) -> AppResult<Order>;

    async fn get_order(&self, id: Uuid) -> AppResult<Order>;

    /// Orders for a raw owner id, which may be a demo placeholder
    async fn orders_for_user(&self, raw_user_id: &str) -> AppResult<Vec<Order>>;

    async fn list_orders(&self, page: PaginationParams) -> AppResult<Paginated<Order>>;

    async fn search_orders(
        &self,
        filter: OrderFilter,
        page: PaginationParams,
    ) -> AppResult<Paginated<Order>>;

    /// Overwrite the status with any non-empty label
    async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Order>;

    async fn analytics(&self, top_limit: usize) -> AppResult<OrderAnalytics>;
}

pub struct OrderManager {
    repo: Arc<dyn OrderRepository>,
}

impl OrderManager {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }
}

fn check_order(order: &NewOrder) -> AppResult<()> {
    if order.owner.demo_reference().is_some_and(str::is_empty) {
        return Err(AppError::validation("User id is required"));
    }
    if order.items.is_empty() {
        return Err(AppError::validation("Order must contain at least one item"));
    }
    if let Some(item) = order.items.iter().find(|i| i.quantity == 0) {
        return Err(AppError::validation(format!(
            "Quantity for '{}' must be at least 1",
            item.title
        )));
    }
    if let Some(item) = order.items.iter().find(|i| i.quantity > MAX_ITEM_QUANTITY) {
        return Err(AppError::validation(format!(
            "Quantity for '{}' cannot exceed {}",
            item.title, MAX_ITEM_QUANTITY
        )));
    }
    if order.items.iter().any(|i| i.price.is_sign_negative()) {
        return Err(AppError::validation("Item price cannot be negative"));
    }
    if order.items.iter().any(|i| !fits_money_column(i.price)) {
        return Err(AppError::validation("Item price is too large"));
    }
    if order.total.is_sign_negative() {
        return Err(AppError::validation("Total cannot be negative"));
    }
    if !fits_money_column(order.total) {
        return Err(AppError::validation("Total is too large"));
    }
    if order.payment_method.trim().is_empty() {
        return Err(AppError::validation("Payment method is required"));
    }
    Ok(())
}

#[async_trait]
impl OrderService for OrderManager {
    async fn place_order(&self, mut order: NewOrder) -> AppResult<Order> {
        check_order(&order)?;
        order.payment_method = order.payment_method.trim().to_string();

        let status = order.initial_status().to_string();
        let created = self.repo.create(order, status).await?;

        info!(
            order_id = %created.id,
            user_id = %created.user_id,
            status = %created.status,
            "Order placed"
        );
        Ok(created)
    }

    async fn get_order(&self, id: Uuid) -> AppResult<Order> {
        self.repo.find_by_id(id).await?.ok_or_not_found("Order")
    }

    async fn orders_for_user(&self, raw_user_id: &str) -> AppResult<Vec<Order>> {
        let owner = OrderOwner::resolve(raw_user_id);
        if owner.demo_reference().is_some_and(str::is_empty) {
            return Err(AppError::validation("User id is required"));
        }
        self.repo.list_by_user(owner.id()).await
    }

    async fn list_orders(&self, page: PaginationParams) -> AppResult<Paginated<Order>> {
        self.search_orders(OrderFilter::default(), page).await
    }

    async fn search_orders(
        &self,
        filter: OrderFilter,
        page: PaginationParams,
    ) -> AppResult<Paginated<Order>> {
        let (orders, total) = self
            .repo
            .search(filter, page.offset(), page.limit())
            .await?;
        Ok(Paginated::new(orders, page, total))
    }

    async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Order> {
        let status = status.trim();
        if status.is_empty() {
            return Err(AppError::validation("Status is required"));
        }

        let order = self.repo.update_status(id, status.to_string()).await?;
        info!(order_id = %id, status = %order.status, "Order status updated");
        Ok(order)
    }

    async fn analytics(&self, top_limit: usize) -> AppResult<OrderAnalytics> {
        let orders = self.repo.all().await?;
        Ok(OrderAnalytics::compute(
            &orders,
            top_limit.clamp(1, MAX_TOP_PRODUCTS),
        ))
    }
}
