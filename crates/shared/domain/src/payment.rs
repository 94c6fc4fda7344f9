//! Payment records.
//!
//! Payments are bookkeeping entries posted by clients after the hosted
//! checkout widget reports success. They reference an order by id only and
//! nothing ties the amount to that order's total.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Payment {
    pub id: Uuid,
    pub amount: Decimal,
    pub method: String,
    pub status: String,
    pub date: DateTime<Utc>,
    /// Order this payment was made for
    pub booking_id: String,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub amount: Decimal,
    pub method: String,
    pub status: Option<String>,
    pub booking_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentChanges {
    pub amount: Option<Decimal>,
    pub method: Option<String>,
    pub status: Option<String>,
    pub booking_id: Option<String>,
}

/// Admin payment search.
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub status: Option<String>,
    pub method: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub booking_id: Option<String>,
}
