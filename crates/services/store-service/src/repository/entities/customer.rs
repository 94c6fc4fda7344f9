//! Customer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use domain::{Customer, CustomerRole, SavedAddress};

/// Saved addresses, stored as one JSONB array
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AddressBook(pub Vec<SavedAddress>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub addresses: AddressBook,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    /// NULL = active, set = deactivated
    pub deactivated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Customer {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            password_hash: model.password_hash,
            role: CustomerRole::from(model.role.as_str()),
            addresses: model.addresses.0,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deactivated_at: model.deactivated_at,
        }
    }
}
