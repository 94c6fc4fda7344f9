//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use auth_service::TokenResponse;
use domain::{
    Address, CustomerResponse, CustomerRole, DashboardSummary, GroupTotal, Order, OrderAnalytics,
    OrderItem, Payment, PaymentOverview, PaymentStats, Product, ProductSales, Review, ReviewStatus,
    SavedAddress, Wishlist,
};

use crate::handlers::auth_handler::{LoginRequest, RegisterRequest};
use crate::handlers::customer_handler::{AddressRequest, UpdateCustomerRequest};
use crate::handlers::order_handler::{CreateOrderRequest, UpdateOrderStatusRequest};
use crate::handlers::payment_handler::{CreatePaymentRequest, UpdatePaymentRequest};
use crate::handlers::product_handler::{CreateProductRequest, UpdateProductRequest};
use crate::handlers::review_handler::{CreateReviewRequest, UpdateReviewStatusRequest};
use crate::handlers::wishlist_handler::AddToWishlistRequest;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grocer API",
        description = "Grocery storefront and back-office REST API. Known order status labels: \
                       Pending, Paid, Confirmed, Processing, Shipped, Delivered, Cancelled."
    ),
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::product_handler::list_products,
        crate::handlers::product_handler::get_product,
        crate::handlers::product_handler::create_product,
        crate::handlers::product_handler::update_product,
        crate::handlers::product_handler::delete_product,
        crate::handlers::order_handler::create_order,
        crate::handlers::order_handler::user_orders,
        crate::handlers::order_handler::get_order,
        crate::handlers::order_handler::list_orders,
        crate::handlers::order_handler::search_orders,
        crate::handlers::order_handler::update_order_status,
        crate::handlers::order_handler::order_analytics,
        crate::handlers::payment_handler::create_payment,
        crate::handlers::payment_handler::list_payments,
        crate::handlers::payment_handler::search_payments,
        crate::handlers::payment_handler::payment_stats,
        crate::handlers::payment_handler::get_payment,
        crate::handlers::payment_handler::update_payment,
        crate::handlers::payment_handler::delete_payment,
        crate::handlers::wishlist_handler::get_wishlist,
        crate::handlers::wishlist_handler::add_to_wishlist,
        crate::handlers::wishlist_handler::remove_from_wishlist,
        crate::handlers::wishlist_handler::all_wishlists,
        crate::handlers::review_handler::submit_review,
        crate::handlers::review_handler::product_reviews,
        crate::handlers::review_handler::list_reviews,
        crate::handlers::review_handler::update_review_status,
        crate::handlers::review_handler::delete_review,
        crate::handlers::customer_handler::get_current_customer,
        crate::handlers::customer_handler::list_customers,
        crate::handlers::customer_handler::get_customer,
        crate::handlers::customer_handler::update_customer,
        crate::handlers::customer_handler::deactivate_customer,
        crate::handlers::customer_handler::restore_customer,
        crate::handlers::customer_handler::list_addresses,
        crate::handlers::customer_handler::add_address,
        crate::handlers::customer_handler::update_address,
        crate::handlers::customer_handler::remove_address,
        crate::handlers::dashboard_handler::dashboard,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            CustomerResponse,
            CustomerRole,
            UpdateCustomerRequest,
            Address,
            AddressRequest,
            SavedAddress,
            Product,
            CreateProductRequest,
            UpdateProductRequest,
            Order,
            OrderItem,
            CreateOrderRequest,
            UpdateOrderStatusRequest,
            OrderAnalytics,
            GroupTotal,
            ProductSales,
            Payment,
            CreatePaymentRequest,
            UpdatePaymentRequest,
            PaymentStats,
            PaymentOverview,
            Wishlist,
            AddToWishlistRequest,
            Review,
            ReviewStatus,
            CreateReviewRequest,
            UpdateReviewStatusRequest,
            DashboardSummary,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and dependency checks"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Products", description = "Catalog browsing and maintenance"),
        (name = "Orders", description = "Checkout, tracking and sales analytics"),
        (name = "Payments", description = "Payment bookkeeping"),
        (name = "Wishlist", description = "Saved products"),
        (name = "Reviews", description = "Product reviews and moderation"),
        (name = "Customers", description = "Customer accounts and addresses"),
        (name = "Dashboard", description = "Back-office summary"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
