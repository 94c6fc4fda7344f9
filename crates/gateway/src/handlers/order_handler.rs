//! Order handlers - checkout, tracking, status changes and analytics.
//!
//! Checkout and order lookups are open to guests shopping under a demo id;
//! everything else is admin only.

use axum::{
    extract::{Extension, Path, Query, State},
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::{AppResult, Created, Paginated, PaginationParams};
use domain::{
    Address, NewOrder, Order, OrderAnalytics, OrderFilter, OrderItem, OrderOwner,
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_TOP_PRODUCTS, MAX_TOP_PRODUCTS,
};

use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::middleware::{auth_middleware, require_admin, CurrentUser};
use crate::state::AppState;

/// Checkout payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    /// Customer id, or a client-generated demo id for guests
    #[validate(length(min = 1, message = "User id is required"))]
    #[schema(example = "demo-1699999999")]
    pub user_id: String,
    #[validate(length(min = 1, message = "Order must contain at least one item"))]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub address: Address,
    /// Taken as submitted
    #[schema(value_type = f64, example = 900.0)]
    pub total: Decimal,
    #[validate(length(min = 1, message = "Payment method is required"))]
    #[schema(example = "khalti")]
    pub payment_method: String,
    pub payment_id: Option<String>,
}

/// New status label
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    /// Any non-empty label; see the known labels in the API description
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "Shipped")]
    pub status: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PageQuery {
    fn params(&self) -> PaginationParams {
        PaginationParams::new(
            self.page.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Back-office order search
#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderSearchQuery {
    pub status: Option<String>,
    pub payment_method: Option<String>,
    /// Customer or demo id
    pub user_id: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    #[param(value_type = Option<f64>)]
    pub min_total: Option<Decimal>,
    #[param(value_type = Option<f64>)]
    pub max_total: Option<Decimal>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct AnalyticsQuery {
    /// Number of top products, 1 to 50 (default 5)
    #[validate(range(min = 1, max = 50, message = "limit must be between 1 and 50"))]
    pub limit: Option<usize>,
}

/// Create order routes
pub fn order_routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", get(list_orders))
        .route("/analytics", get(order_analytics))
        .route("/filter/search", get(search_orders))
        .route("/:id/status", put(update_order_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", post(create_order))
        .route("/user/:user_id", get(user_orders))
        .route("/:id", get(get_order))
        .merge(admin)
}

/// Place an order
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order stored; cash on delivery starts Pending, other methods Paid", body = Order),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<Created<Order>> {
    let order = state
        .store
        .orders
        .place_order(NewOrder {
            owner: OrderOwner::resolve(&payload.user_id),
            items: payload.items,
            address: payload.address,
            total: payload.total,
            payment_method: payload.payment_method,
            payment_id: payload.payment_id,
        })
        .await?;

    Ok(Created(order))
}

/// Orders of one customer or demo id, newest first
#[utoipa::path(
    get,
    path = "/api/v1/orders/user/{user_id}",
    tag = "Orders",
    params(("user_id" = String, Path, description = "Customer id or demo id")),
    responses(
        (status = 200, description = "Orders", body = Vec<Order>)
    )
)]
pub async fn user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.store.orders.orders_for_user(&user_id).await?;
    Ok(Json(orders))
}

/// Get an order by ID
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Order>> {
    let order = state.store.orders.get_order(id).await?;
    Ok(Json(order))
}

/// All orders, newest first (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "One page of orders"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_orders(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Paginated<Order>>> {
    require_admin(&current_user)?;
    let orders = state.store.orders.list_orders(query.params()).await?;
    Ok(Json(orders))
}

/// Filter orders (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/orders/filter/search",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(OrderSearchQuery),
    responses(
        (status = 200, description = "One page of matching orders"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn search_orders(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<OrderSearchQuery>,
) -> AppResult<Json<Paginated<Order>>> {
    require_admin(&current_user)?;

    let page = PaginationParams::new(
        query.page.unwrap_or(DEFAULT_PAGE_NUMBER),
        query.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    let filter = OrderFilter {
        status: query.status,
        payment_method: query.payment_method,
        user_id: query.user_id.as_deref().map(|raw| OrderOwner::resolve(raw).id()),
        from: query.from,
        to: query.to,
        min_total: query.min_total,
        max_total: query.max_total,
    };

    let orders = state.store.orders.search_orders(filter, page).await?;
    Ok(Json(orders))
}

/// Overwrite an order's status (admin only)
#[utoipa::path(
    put,
    path = "/api/v1/orders/{id}/status",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order with the new status", body = Order),
        (status = 400, description = "Empty status"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order_status(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderStatusRequest>,
) -> AppResult<Json<Order>> {
    require_admin(&current_user)?;
    let order = state.store.orders.update_status(id, &payload.status).await?;
    Ok(Json(order))
}

/// Sales figures over every order (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/orders/analytics",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Aggregated order figures", body = OrderAnalytics),
        (status = 400, description = "limit out of range"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn order_analytics(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AnalyticsQuery>,
) -> AppResult<Json<OrderAnalytics>> {
    require_admin(&current_user)?;

    let limit = query
        .limit
        .unwrap_or(DEFAULT_TOP_PRODUCTS)
        .min(MAX_TOP_PRODUCTS);
    let analytics = state.store.orders.analytics(limit).await?;
    Ok(Json(analytics))
}
