//! Customer repository implementation with soft deactivation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::customer::{self, ActiveModel, AddressBook, Entity as CustomerEntity};
use common::{AppError, AppResult};
use domain::{Customer, CustomerChanges, CustomerRole, NewCustomer, SavedAddress};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
///
/// Query methods exclude deactivated customers unless their name says
/// otherwise.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find active customer by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>>;

    /// Find customer by ID including deactivated
    async fn find_by_id_with_deactivated(&self, id: Uuid) -> AppResult<Option<Customer>>;

    /// Find active customer by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>>;

    /// Find customer by email including deactivated
    async fn find_by_email_with_deactivated(&self, email: &str) -> AppResult<Option<Customer>>;

    /// Create a new customer with the `customer` role
    async fn create(&self, customer: NewCustomer) -> AppResult<Customer>;

    /// Apply profile changes to an active customer
    async fn update(&self, id: Uuid, changes: CustomerChanges) -> AppResult<Customer>;

    /// Replace the saved address list of an active customer
    async fn set_addresses(&self, id: Uuid, addresses: Vec<SavedAddress>) -> AppResult<Customer>;

    /// Soft delete (sets deactivated_at)
    async fn deactivate(&self, id: Uuid) -> AppResult<()>;

    /// Clear deactivated_at
    async fn restore(&self, id: Uuid) -> AppResult<Customer>;

    /// List active customers, newest first
    async fn list(&self) -> AppResult<Vec<Customer>>;

    /// Number of active customers
    async fn count(&self) -> AppResult<u64>;
}

/// SeaORM-backed [`CustomerRepository`]
pub struct CustomerStore {
    db: DatabaseConnection,
}

impl CustomerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_active_model(&self, id: Uuid) -> AppResult<customer::Model> {
        CustomerEntity::find_by_id(id)
            .filter(customer::Column::DeactivatedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Customer"))
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let result = CustomerEntity::find_by_id(id)
            .filter(customer::Column::DeactivatedAt.is_null())
            .one(&self.db)
            .await?;

        Ok(result.map(Customer::from))
    }

    async fn find_by_id_with_deactivated(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let result = CustomerEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Customer::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let result = CustomerEntity::find()
            .filter(customer::Column::Email.eq(email))
            .filter(customer::Column::DeactivatedAt.is_null())
            .one(&self.db)
            .await?;

        Ok(result.map(Customer::from))
    }

    async fn find_by_email_with_deactivated(&self, email: &str) -> AppResult<Option<Customer>> {
        let result = CustomerEntity::find()
            .filter(customer::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Customer::from))
    }

    async fn create(&self, new: NewCustomer) -> AppResult<Customer> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            email: Set(new.email),
            phone: Set(new.phone),
            password_hash: Set(new.password.into_string()),
            role: Set(CustomerRole::Customer.to_string()),
            addresses: Set(AddressBook::default()),
            created_at: Set(now),
            updated_at: Set(now),
            deactivated_at: Set(None),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Customer::from(model))
    }

    async fn update(&self, id: Uuid, changes: CustomerChanges) -> AppResult<Customer> {
        let mut active: ActiveModel = self.find_active_model(id).await?.into();

        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(phone);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(role) = changes.role {
            active.role = Set(role.to_string());
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Customer::from(model))
    }

    async fn set_addresses(&self, id: Uuid, addresses: Vec<SavedAddress>) -> AppResult<Customer> {
        let mut active: ActiveModel = self.find_active_model(id).await?.into();
        active.addresses = Set(AddressBook(addresses));
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Customer::from(model))
    }

    async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        let mut active: ActiveModel = self.find_active_model(id).await?.into();
        let now = chrono::Utc::now();
        active.deactivated_at = Set(Some(now));
        active.updated_at = Set(now);

        active.update(&self.db).await?;
        Ok(())
    }

    async fn restore(&self, id: Uuid) -> AppResult<Customer> {
        let customer = CustomerEntity::find_by_id(id)
            .filter(customer::Column::DeactivatedAt.is_not_null())
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::bad_request("Customer is not deactivated or does not exist"))?;

        let mut active: ActiveModel = customer.into();
        active.deactivated_at = Set(None);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Customer::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Customer>> {
        let models = CustomerEntity::find()
            .filter(customer::Column::DeactivatedAt.is_null())
            .order_by_desc(customer::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Customer::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        let count = CustomerEntity::find()
            .filter(customer::Column::DeactivatedAt.is_null())
            .count(&self.db)
            .await?;
        Ok(count)
    }
}
