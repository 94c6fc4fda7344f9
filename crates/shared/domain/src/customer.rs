//! Customer domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROLE_ADMIN, ROLE_CUSTOMER};
use crate::password::Password;

/// Customer roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum CustomerRole {
    Customer,
    Admin,
}

impl CustomerRole {
    /// Check if this role has back-office privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, CustomerRole::Admin)
    }
}

impl From<&str> for CustomerRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => CustomerRole::Admin,
            _ => CustomerRole::Customer,
        }
    }
}

impl From<String> for CustomerRole {
    fn from(s: String) -> Self {
        CustomerRole::from(s.as_str())
    }
}

impl From<CustomerRole> for String {
    fn from(role: CustomerRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for CustomerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerRole::Admin => write!(f, "{}", ROLE_ADMIN),
            CustomerRole::Customer => write!(f, "{}", ROLE_CUSTOMER),
        }
    }
}

/// Shipping address, embedded in customers and order snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
}

/// An address saved on a customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SavedAddress {
    pub id: Uuid,
    #[serde(flatten)]
    pub address: Address,
}

impl SavedAddress {
    pub fn new(address: Address) -> Self {
        Self {
            id: Uuid::new_v4(),
            address,
        }
    }
}

/// Customer domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: CustomerRole,
    pub addresses: Vec<SavedAddress>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Deactivation timestamp (None = active)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Check if customer has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if customer is active (not deactivated)
    pub fn is_active(&self) -> bool {
        self.deactivated_at.is_none()
    }

    /// "First Last", trimmed when either part is empty
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Look up a saved address by id
    pub fn address(&self, address_id: Uuid) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.id == address_id)
    }
}

/// Registration data with the credential already hashed.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: Password,
}

/// Profile changes; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct CustomerChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role: Option<CustomerRole>,
}

/// Customer response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CustomerResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// `customer` or `admin`
    pub role: String,
    pub addresses: Vec<SavedAddress>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated_at: Option<DateTime<Utc>>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            role: customer.role.to_string(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone: customer.phone,
            addresses: customer.addresses,
            created_at: customer.created_at,
            deactivated_at: customer.deactivated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        let now = Utc::now();
        Customer {
            id: Uuid::new_v4(),
            first_name: "Sita".to_string(),
            last_name: "Sharma".to_string(),
            email: "sita@example.com".to_string(),
            phone: "9800000000".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: CustomerRole::Customer,
            addresses: vec![],
            created_at: now,
            updated_at: now,
            deactivated_at: None,
        }
    }

    #[test]
    fn test_role_round_trips_through_strings() {
        assert_eq!(CustomerRole::from("admin"), CustomerRole::Admin);
        assert_eq!(CustomerRole::from("customer"), CustomerRole::Customer);
        assert_eq!(CustomerRole::from("anything-else"), CustomerRole::Customer);
        assert_eq!(String::from(CustomerRole::Admin), "admin");
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let mut customer = sample();
        assert_eq!(customer.full_name(), "Sita Sharma");
        customer.last_name.clear();
        assert_eq!(customer.full_name(), "Sita");
    }

    #[test]
    fn test_saved_address_flattens_fields() {
        let saved = SavedAddress::new(Address {
            street: "New Road".to_string(),
            city: "Kathmandu".to_string(),
            ..Address::default()
        });
        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["city"], "Kathmandu");
        assert!(json.get("address").is_none());
    }
}
