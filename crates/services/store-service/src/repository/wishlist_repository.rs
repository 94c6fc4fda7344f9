//! Wishlist repository over the `wishlist_items` join table.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use super::entities::wishlist_item::{self, ActiveModel, Entity as WishlistItemEntity};
use common::AppResult;
use domain::WishlistEntry;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Saved product ids of one customer, oldest first
    async fn product_ids(&self, customer_id: Uuid) -> AppResult<Vec<Uuid>>;

    /// Save a product; returns false when it was already saved
    async fn add(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<bool>;

    /// Remove a product; returns false when it was not saved
    async fn remove(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<bool>;

    /// Every entry of every customer
    async fn all(&self) -> AppResult<Vec<WishlistEntry>>;
}

pub struct WishlistStore {
    db: DatabaseConnection,
}

impl WishlistStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WishlistRepository for WishlistStore {
    async fn product_ids(&self, customer_id: Uuid) -> AppResult<Vec<Uuid>> {
        let models = WishlistItemEntity::find()
            .filter(wishlist_item::Column::CustomerId.eq(customer_id))
            .order_by_asc(wishlist_item::Column::AddedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.product_id).collect())
    }

    async fn add(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let entry = ActiveModel {
            customer_id: Set(customer_id),
            product_id: Set(product_id),
            added_at: Set(chrono::Utc::now()),
        };

        let inserted = WishlistItemEntity::insert(entry)
            .on_conflict(
                OnConflict::columns([
                    wishlist_item::Column::CustomerId,
                    wishlist_item::Column::ProductId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(inserted > 0)
    }

    async fn remove(&self, customer_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let result = WishlistItemEntity::delete_many()
            .filter(wishlist_item::Column::CustomerId.eq(customer_id))
            .filter(wishlist_item::Column::ProductId.eq(product_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn all(&self) -> AppResult<Vec<WishlistEntry>> {
        let models = WishlistItemEntity::find()
            .order_by_asc(wishlist_item::Column::CustomerId)
            .order_by_asc(wishlist_item::Column::AddedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(WishlistEntry::from).collect())
    }
}
