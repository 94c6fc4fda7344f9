//! HTTP request handlers.

pub mod auth_handler;
pub mod customer_handler;
pub mod dashboard_handler;
pub mod health_handler;
pub mod order_handler;
pub mod payment_handler;
pub mod product_handler;
pub mod review_handler;
pub mod wishlist_handler;

pub use auth_handler::auth_routes;
pub use customer_handler::customer_routes;
pub use dashboard_handler::dashboard_routes;
pub use health_handler::health_routes;
pub use order_handler::order_routes;
pub use payment_handler::payment_routes;
pub use product_handler::product_routes;
pub use review_handler::review_routes;
pub use wishlist_handler::wishlist_routes;
