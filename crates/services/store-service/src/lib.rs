//! Store service library.
//!
//! Persistence and use cases for customers, the catalog, orders, payments,
//! wishlists and reviews. The gateway builds a [`StoreServices`] once and
//! shares it across handlers.

pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr};
use tracing::info;

use common::DatabaseConfig;

use crate::infra::Database;
use crate::repository::{
    CustomerStore, OrderStore, PaymentStore, ProductStore, ReviewStore, WishlistStore,
};
use crate::service::{
    CustomerManager, CustomerService, DashboardManager, DashboardService, OrderManager,
    OrderService, PaymentManager, PaymentService, ProductManager, ProductService, ReviewManager,
    ReviewService, WishlistManager, WishlistService,
};

/// Every store use case behind its trait object.
#[derive(Clone)]
pub struct StoreServices {
    pub customers: Arc<dyn CustomerService>,
    pub products: Arc<dyn ProductService>,
    pub orders: Arc<dyn OrderService>,
    pub payments: Arc<dyn PaymentService>,
    pub wishlists: Arc<dyn WishlistService>,
    pub reviews: Arc<dyn ReviewService>,
    pub dashboard: Arc<dyn DashboardService>,
}

impl StoreServices {
    /// Wire the SeaORM repositories into the managers.
    pub fn new(db: DatabaseConnection) -> Self {
        let customer_repo = Arc::new(CustomerStore::new(db.clone()));
        let product_repo = Arc::new(ProductStore::new(db.clone()));
        let order_repo = Arc::new(OrderStore::new(db.clone()));
        let payment_repo = Arc::new(PaymentStore::new(db.clone()));
        let wishlist_repo = Arc::new(WishlistStore::new(db.clone()));
        let review_repo = Arc::new(ReviewStore::new(db));

        Self {
            customers: Arc::new(CustomerManager::new(customer_repo.clone())),
            products: Arc::new(ProductManager::new(product_repo.clone())),
            orders: Arc::new(OrderManager::new(order_repo.clone())),
            payments: Arc::new(PaymentManager::new(payment_repo)),
            wishlists: Arc::new(WishlistManager::new(wishlist_repo, product_repo.clone())),
            reviews: Arc::new(ReviewManager::new(review_repo, product_repo.clone())),
            dashboard: Arc::new(DashboardManager::new(customer_repo, product_repo, order_repo)),
        }
    }
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(config: &DatabaseConfig, action: MigrateAction) -> Result<(), DbErr> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
