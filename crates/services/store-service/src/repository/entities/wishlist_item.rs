//! Wishlist entry database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::WishlistEntry;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wishlist_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: Uuid,
    pub added_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for WishlistEntry {
    fn from(model: Model) -> Self {
        WishlistEntry {
            customer_id: model.customer_id,
            product_id: model.product_id,
            added_at: model.added_at,
        }
    }
}
