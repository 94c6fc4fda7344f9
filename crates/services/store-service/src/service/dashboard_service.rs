//! Back-office dashboard numbers.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{
    analytics::top_products, money::sum, DashboardSummary, DASHBOARD_RECENT_ORDERS,
    DEFAULT_TOP_PRODUCTS,
};

use crate::repository::{CustomerRepository, OrderRepository, ProductRepository};

#[async_trait]
pub trait DashboardService: Send + Sync {
    async fn summary(&self) -> AppResult<DashboardSummary>;
}

pub struct DashboardManager {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl DashboardManager {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }
}

#[async_trait]
impl DashboardService for DashboardManager {
    async fn summary(&self) -> AppResult<DashboardSummary> {
        let (orders, recent_orders, total_customers, total_products) = futures::try_join!(
            self.orders.all(),
            self.orders.recent(DASHBOARD_RECENT_ORDERS),
            self.customers.count(),
            self.products.count(),
        )?;

        Ok(DashboardSummary {
            total_customers,
            total_products,
            total_orders: orders.len() as u64,
            total_revenue: sum(orders.iter().map(|o| o.total)),
            recent_orders,
            top_products: top_products(&orders, DEFAULT_TOP_PRODUCTS),
        })
    }
}
