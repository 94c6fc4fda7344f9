//! Orders placed at checkout.
//!
//! An order is a snapshot: line items copy title, price and image from the
//! catalog at the moment of purchase and are never re-read afterwards. The
//! total is whatever the client sent.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ORDER_STATUS_PAID, ORDER_STATUS_PENDING, PAYMENT_METHOD_CASH_ON_DELIVERY};
use crate::customer::Address;

/// Purchased line, denormalized at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrderItem {
    pub product_id: Uuid,
    pub title: String,
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl OrderItem {
    /// price × quantity, saturating instead of overflowing
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Who an order belongs to.
///
/// Checkout can run without a session, in which case the client invents a
/// placeholder id that is not a UUID. Those ids map onto a stable synthetic
/// UUID so the same placeholder always lists the same orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOwner {
    Registered(Uuid),
    Demo { id: Uuid, reference: String },
}

impl OrderOwner {
    pub fn resolve(raw: &str) -> Self {
        let raw = raw.trim();
        match Uuid::parse_str(raw) {
            Ok(id) => OrderOwner::Registered(id),
            Err(_) => OrderOwner::Demo {
                id: Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("demo:{}", raw).as_bytes()),
                reference: raw.to_string(),
            },
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            OrderOwner::Registered(id) => *id,
            OrderOwner::Demo { id, .. } => *id,
        }
    }

    /// The placeholder string for demo owners
    pub fn demo_reference(&self) -> Option<&str> {
        match self {
            OrderOwner::Registered(_) => None,
            OrderOwner::Demo { reference, .. } => Some(reference),
        }
    }
}

/// Order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Placeholder id the order was submitted with, for demo checkouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_ref: Option<String>,
    pub items: Vec<OrderItem>,
    pub address: Address,
    pub total: Decimal,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Sum of item quantities
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// Checkout submission.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub owner: OrderOwner,
    pub items: Vec<OrderItem>,
    pub address: Address,
    pub total: Decimal,
    pub payment_method: String,
    pub payment_id: Option<String>,
}

impl NewOrder {
    /// Status a freshly placed order starts in.
    ///
    /// Cash on delivery is unpaid; any other method means the client already
    /// got a success callback from the payment widget.
    pub fn initial_status(&self) -> &'static str {
        if self
            .payment_method
            .trim()
            .eq_ignore_ascii_case(PAYMENT_METHOD_CASH_ON_DELIVERY)
        {
            ORDER_STATUS_PENDING
        } else {
            ORDER_STATUS_PAID
        }
    }
}

/// Admin order search.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub payment_method: Option<String>,
    pub user_id: Option<Uuid>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub min_total: Option<Decimal>,
    pub max_total: Option<Decimal>,
}
