//! Customer service - profiles, saved addresses and account state.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    Address, Customer, CustomerChanges, CustomerRole, NewCustomer, SavedAddress, MIN_NAME_LENGTH,
};

use crate::repository::CustomerRepository;

/// Customer service trait for dependency injection.
///
/// Operations exclude deactivated customers unless their name says otherwise.
#[async_trait]
pub trait CustomerService: Send + Sync {
    async fn get_customer(&self, id: Uuid) -> AppResult<Customer>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>>;

    async fn find_by_email_with_deactivated(&self, email: &str) -> AppResult<Option<Customer>>;

    /// Store a new customer (credential already hashed)
    async fn create_customer(&self, customer: NewCustomer) -> AppResult<Customer>;

    /// Active customers, newest first
    async fn list_customers(&self) -> AppResult<Vec<Customer>>;

    async fn update_customer(&self, id: Uuid, changes: CustomerChanges) -> AppResult<Customer>;

    /// Soft delete
    async fn deactivate_customer(&self, id: Uuid) -> AppResult<()>;

    async fn restore_customer(&self, id: Uuid) -> AppResult<Customer>;

    /// Grant the admin role by email
    async fn promote(&self, email: &str) -> AppResult<Customer>;

    async fn count_customers(&self) -> AppResult<u64>;

    async fn list_addresses(&self, id: Uuid) -> AppResult<Vec<SavedAddress>>;

    async fn add_address(&self, id: Uuid, address: Address) -> AppResult<SavedAddress>;

    async fn update_address(
        &self,
        id: Uuid,
        address_id: Uuid,
        address: Address,
    ) -> AppResult<SavedAddress>;

    async fn remove_address(&self, id: Uuid, address_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CustomerService using repository.
pub struct CustomerManager {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerManager {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }
}

fn check_name(field: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.chars().count() < MIN_NAME_LENGTH {
        return Err(AppError::validation(format!("{} cannot be empty", field)));
    }
    Ok(value.to_string())
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn get_customer(&self, id: Uuid) -> AppResult<Customer> {
        self.repo.find_by_id(id).await?.ok_or_not_found("Customer")
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        self.repo.find_by_email(email).await
    }

    async fn find_by_email_with_deactivated(&self, email: &str) -> AppResult<Option<Customer>> {
        self.repo.find_by_email_with_deactivated(email).await
    }

    async fn create_customer(&self, customer: NewCustomer) -> AppResult<Customer> {
        if self
            .repo
            .find_by_email_with_deactivated(&customer.email)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request("User already exists"));
        }

        self.repo.create(customer).await
    }

    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.repo.list().await
    }

    async fn update_customer(&self, id: Uuid, mut changes: CustomerChanges) -> AppResult<Customer> {
        changes.first_name = changes
            .first_name
            .as_deref()
            .map(|name| check_name("First name", name))
            .transpose()?;
        changes.last_name = changes
            .last_name
            .as_deref()
            .map(|name| check_name("Last name", name))
            .transpose()?;
        if let Some(email) = changes.email.take() {
            let email = email.trim().to_lowercase();
            if !email.contains('@') {
                return Err(AppError::validation("A valid email is required"));
            }
            if let Some(owner) = self.repo.find_by_email_with_deactivated(&email).await? {
                if owner.id != id {
                    return Err(AppError::bad_request("Email already in use"));
                }
            }
            changes.email = Some(email);
        }

        let role_change = changes.role;
        let customer = self.repo.update(id, changes).await?;
        if let Some(role) = role_change {
            info!(customer_id = %id, role = %role, "Customer role changed");
        }
        Ok(customer)
    }

    async fn deactivate_customer(&self, id: Uuid) -> AppResult<()> {
        self.repo.deactivate(id).await?;
        info!(customer_id = %id, "Customer deactivated");
        Ok(())
    }

    async fn restore_customer(&self, id: Uuid) -> AppResult<Customer> {
        let customer = self.repo.restore(id).await?;
        info!(customer_id = %id, "Customer restored");
        Ok(customer)
    }

    async fn promote(&self, email: &str) -> AppResult<Customer> {
        let customer = self
            .repo
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or_not_found("Customer")?;

        if customer.is_admin() {
            return Ok(customer);
        }

        self.repo
            .update(
                customer.id,
                CustomerChanges {
                    role: Some(CustomerRole::Admin),
                    ..CustomerChanges::default()
                },
            )
            .await
    }

    async fn count_customers(&self) -> AppResult<u64> {
        self.repo.count().await
    }

    async fn list_addresses(&self, id: Uuid) -> AppResult<Vec<SavedAddress>> {
        Ok(self.get_customer(id).await?.addresses)
    }

    async fn add_address(&self, id: Uuid, address: Address) -> AppResult<SavedAddress> {
        let mut addresses = self.get_customer(id).await?.addresses;
        let saved = SavedAddress::new(address);
        addresses.push(saved.clone());

        self.repo.set_addresses(id, addresses).await?;
        Ok(saved)
    }

    async fn update_address(
        &self,
        id: Uuid,
        address_id: Uuid,
        address: Address,
    ) -> AppResult<SavedAddress> {
        let mut addresses = self.get_customer(id).await?.addresses;
        let slot = addresses
            .iter_mut()
            .find(|a| a.id == address_id)
            .ok_or_not_found("Address")?;
        slot.address = address;
        let updated = slot.clone();

        self.repo.set_addresses(id, addresses).await?;
        Ok(updated)
    }

    async fn remove_address(&self, id: Uuid, address_id: Uuid) -> AppResult<()> {
        let mut addresses = self.get_customer(id).await?.addresses;
        let before = addresses.len();
        addresses.retain(|a| a.id != address_id);
        if addresses.len() == before {
            return Err(AppError::NotFound("Address"));
        }

        self.repo.set_addresses(id, addresses).await?;
        Ok(())
    }
}
