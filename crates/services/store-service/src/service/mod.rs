//! Use-case services over the repositories.

mod customer_service;
mod dashboard_service;
mod order_service;
mod payment_service;
mod product_service;
mod review_service;
mod wishlist_service;

pub use customer_service::{CustomerManager, CustomerService};
pub use dashboard_service::{DashboardManager, DashboardService};
pub use order_service::{OrderManager, OrderService};
pub use payment_service::{PaymentManager, PaymentService};
pub use product_service::{ProductManager, ProductService};
pub use review_service::{ReviewManager, ReviewService};
pub use wishlist_service::{WishlistManager, WishlistService};
