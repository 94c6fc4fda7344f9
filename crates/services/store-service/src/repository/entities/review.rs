//! Review database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Review, ReviewStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    pub product_id: Uuid,
    pub rating: i16,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Review {
    fn from(model: Model) -> Self {
        Review {
            id: model.id,
            customer_id: model.customer_id,
            product_id: model.product_id,
            rating: u8::try_from(model.rating).unwrap_or_default(),
            comment: model.comment,
            // unknown labels are treated as unmoderated
            status: model.status.parse().unwrap_or(ReviewStatus::Pending),
            created_at: model.created_at,
        }
    }
}
