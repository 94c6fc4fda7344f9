//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Customer Roles
// =============================================================================

/// Default role assigned to registered customers
pub const ROLE_CUSTOMER: &str = "customer";

/// Administrator role with back-office privileges
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_CUSTOMER, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Order Status Labels
// =============================================================================
//
// Status is free text. These are the labels the storefront and back-office
// use; the API never rejects a label that is not in this list.

pub const ORDER_STATUS_PENDING: &str = "Pending";
pub const ORDER_STATUS_PAID: &str = "Paid";
pub const ORDER_STATUS_CONFIRMED: &str = "Confirmed";
pub const ORDER_STATUS_PROCESSING: &str = "Processing";
pub const ORDER_STATUS_SHIPPED: &str = "Shipped";
pub const ORDER_STATUS_DELIVERED: &str = "Delivered";
pub const ORDER_STATUS_CANCELLED: &str = "Cancelled";

/// Status labels known to the clients
pub const KNOWN_ORDER_STATUSES: &[&str] = &[
    ORDER_STATUS_PENDING,
    ORDER_STATUS_PAID,
    ORDER_STATUS_CONFIRMED,
    ORDER_STATUS_PROCESSING,
    ORDER_STATUS_SHIPPED,
    ORDER_STATUS_DELIVERED,
    ORDER_STATUS_CANCELLED,
];

/// Payment method that leaves a new order unpaid
pub const PAYMENT_METHOD_CASH_ON_DELIVERY: &str = "cod";

// =============================================================================
// Payments
// =============================================================================

/// Status given to payments created without one
pub const PAYMENT_STATUS_PENDING: &str = "pending";

// =============================================================================
// Money
// =============================================================================

/// Largest amount a `numeric(12,2)` column holds, in cents
pub const MAX_AMOUNT_CENTS: i64 = 999_999_999_999;

/// Upper bound on the quantity of a single order line
pub const MAX_ITEM_QUANTITY: u32 = 10_000;

// =============================================================================
// Reviews
// =============================================================================

pub const REVIEW_STATUS_PENDING: &str = "pending";
pub const REVIEW_STATUS_APPROVED: &str = "approved";

/// All valid review moderation states
pub const VALID_REVIEW_STATUSES: &[&str] = &[REVIEW_STATUS_PENDING, REVIEW_STATUS_APPROVED];

/// Lowest accepted star rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted star rating
pub const MAX_RATING: u8 = 5;

// =============================================================================
// Analytics
// =============================================================================

/// Number of products in a "top products" ranking unless asked otherwise
pub const DEFAULT_TOP_PRODUCTS: usize = 5;

/// Upper bound on a requested "top products" ranking
pub const MAX_TOP_PRODUCTS: usize = 50;

/// Number of orders shown in the dashboard's recent list
pub const DASHBOARD_RECENT_ORDERS: u64 = 5;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: usize = 1;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Pagination
// =============================================================================

/// First page number
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Page size when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Upper bound on a requested page size
pub const MAX_PAGE_SIZE: u64 = 100;
