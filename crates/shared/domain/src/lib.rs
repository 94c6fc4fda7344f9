//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Every other crate in the workspace speaks in these types.

pub mod analytics;
pub mod constants;
pub mod customer;
pub mod error;
pub mod money;
pub mod order;
pub mod password;
pub mod payment;
pub mod product;
pub mod review;
pub mod wishlist;

pub use analytics::{
    DashboardSummary, GroupTotal, OrderAnalytics, PaymentOverview, PaymentStats, ProductSales,
};
pub use constants::*;
pub use customer::{
    Address, Customer, CustomerChanges, CustomerResponse, CustomerRole, NewCustomer, SavedAddress,
};
pub use error::{DomainError, DomainResult};
pub use money::{fits_money_column, max_amount};
pub use order::{NewOrder, Order, OrderFilter, OrderItem, OrderOwner};
pub use password::Password;
pub use payment::{NewPayment, Payment, PaymentChanges, PaymentFilter};
pub use product::{NewProduct, Product, ProductChanges, ProductFilter};
pub use review::{check_rating, NewReview, Review, ReviewStatus};
pub use wishlist::{Wishlist, WishlistEntry};
