//! Per-customer saved products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::product::Product;

/// One saved product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub customer_id: Uuid,
    pub product_id: Uuid,
    pub added_at: DateTime<Utc>,
}

/// A customer's wishlist with the products resolved.
///
/// Products deleted from the catalog after being saved are dropped from
/// `products` but still counted in `product_ids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Wishlist {
    pub customer_id: Uuid,
    pub product_ids: Vec<Uuid>,
    pub products: Vec<Product>,
}

impl Wishlist {
    pub fn contains(&self, product_id: Uuid) -> bool {
        self.product_ids.contains(&product_id)
    }

    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}
