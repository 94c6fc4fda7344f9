//! Customer directory backed by the store service.

use std::sync::Arc;

use async_trait::async_trait;

use auth_service::CustomerDirectory;
use common::AppResult;
use domain::{Customer, NewCustomer};
use store_service::service::CustomerService;

/// Lets the auth service read and create customers without knowing about
/// the database.
pub struct StoreDirectory {
    customers: Arc<dyn CustomerService>,
}

impl StoreDirectory {
    pub fn new(customers: Arc<dyn CustomerService>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl CustomerDirectory for StoreDirectory {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        self.customers.find_by_email(email).await
    }

    async fn find_by_email_with_deactivated(&self, email: &str) -> AppResult<Option<Customer>> {
        self.customers.find_by_email_with_deactivated(email).await
    }

    async fn create(&self, customer: NewCustomer) -> AppResult<Customer> {
        self.customers.create_customer(customer).await
    }
}
