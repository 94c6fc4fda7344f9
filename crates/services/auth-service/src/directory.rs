//! Customer lookups needed by the auth service.

use async_trait::async_trait;

use common::AppResult;
use domain::{Customer, NewCustomer};

/// Customer storage as seen by authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Find an active customer by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>>;

    /// Find a customer by email including deactivated accounts
    async fn find_by_email_with_deactivated(&self, email: &str) -> AppResult<Option<Customer>>;

    /// Store a new customer
    async fn create(&self, customer: NewCustomer) -> AppResult<Customer>;
}
