//! Wishlist service.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Product, Wishlist};

use crate::repository::{ProductRepository, WishlistRepository};

#[async_trait]
pub trait WishlistService: Send + Sync {
    async fn get_wishlist(&self, customer_id: Uuid) -> AppResult<Wishlist>;

    /// Save a product; saving it twice is a no-op
    async fn add_product(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<Wishlist>;

    async fn remove_product(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<Wishlist>;

    /// Every customer's wishlist
    async fn all_wishlists(&self) -> AppResult<Vec<Wishlist>>;
}

pub struct WishlistManager {
    wishlists: Arc<dyn WishlistRepository>,
    products: Arc<dyn ProductRepository>,
}

impl WishlistManager {
    pub fn new(
        wishlists: Arc<dyn WishlistRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            wishlists,
            products,
        }
    }

    /// Look up every distinct id in one query
    async fn catalog(&self, product_ids: Vec<Uuid>) -> AppResult<HashMap<Uuid, Product>> {
        Ok(self
            .products
            .find_many(product_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect())
    }

    async fn resolve(&self, customer_id: Uuid, product_ids: Vec<Uuid>) -> AppResult<Wishlist> {
        let catalog = self.catalog(product_ids.clone()).await?;
        Ok(assemble(customer_id, product_ids, &catalog))
    }
}

/// Keep the saved order; ids missing from the catalog stay counted
fn assemble(
    customer_id: Uuid,
    product_ids: Vec<Uuid>,
    catalog: &HashMap<Uuid, Product>,
) -> Wishlist {
    let products = product_ids
        .iter()
        .filter_map(|id| catalog.get(id).cloned())
        .collect();

    Wishlist {
        customer_id,
        product_ids,
        products,
    }
}

#[async_trait]
impl WishlistService for WishlistManager {
    async fn get_wishlist(&self, customer_id: Uuid) -> AppResult<Wishlist> {
        let ids = self.wishlists.product_ids(customer_id).await?;
        self.resolve(customer_id, ids).await
    }

    async fn add_product(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<Wishlist> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(AppError::NotFound("Product"));
        }

        self.wishlists.add(customer_id, product_id).await?;
        self.get_wishlist(customer_id).await
    }

    async fn remove_product(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<Wishlist> {
        if !self.wishlists.remove(customer_id, product_id).await? {
            return Err(AppError::NotFound("Wishlist item"));
        }
        self.get_wishlist(customer_id).await
    }

    async fn all_wishlists(&self) -> AppResult<Vec<Wishlist>> {
        let mut grouped: BTreeMap<Uuid, Vec<Uuid>> = BTreeMap::new();
        for entry in self.wishlists.all().await? {
            grouped
                .entry(entry.customer_id)
                .or_default()
                .push(entry.product_id);
        }

        let distinct: BTreeSet<Uuid> = grouped.values().flatten().copied().collect();
        let catalog = self.catalog(distinct.into_iter().collect()).await?;

        Ok(grouped
            .into_iter()
            .map(|(customer_id, product_ids)| assemble(customer_id, product_ids, &catalog))
            .collect())
    }
}
