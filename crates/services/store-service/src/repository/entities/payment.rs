//! Payment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Payment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub amount: Decimal,
    pub method: String,
    pub status: String,
    pub date: DateTimeUtc,
    pub booking_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Payment {
    fn from(model: Model) -> Self {
        Payment {
            id: model.id,
            amount: model.amount,
            method: model.method,
            status: model.status,
            date: model.date,
            booking_id: model.booking_id,
        }
    }
}
