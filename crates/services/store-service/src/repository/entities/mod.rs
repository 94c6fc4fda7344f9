//! SeaORM entities, one module per table.

pub mod customer;
pub mod order;
pub mod payment;
pub mod product;
pub mod review;
pub mod wishlist_item;
