//! Repository layer for data access.

pub mod entities;
mod customer_repository;
mod order_repository;
mod payment_repository;
mod product_repository;
mod review_repository;
mod wishlist_repository;

pub use customer_repository::{CustomerRepository, CustomerStore};
pub use order_repository::{OrderRepository, OrderStore};
pub use payment_repository::{PaymentRepository, PaymentStore};
pub use product_repository::{ProductRepository, ProductStore};
pub use review_repository::{ReviewRepository, ReviewStore};
pub use wishlist_repository::{WishlistRepository, WishlistStore};

#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use order_repository::MockOrderRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use payment_repository::MockPaymentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use review_repository::MockReviewRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use wishlist_repository::MockWishlistRepository;
