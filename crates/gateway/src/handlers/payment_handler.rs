//! Payment handlers.
//!
//! Payments are recorded as the storefront reports them; the provider is
//! never asked to confirm.

use axum::{
    extract::{Extension, Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::{AppResult, Created, NoContent, Paginated, PaginationParams};
use domain::{
    NewPayment, Payment, PaymentChanges, PaymentFilter, PaymentStats, DEFAULT_PAGE_NUMBER,
    DEFAULT_PAGE_SIZE,
};

use crate::extractors::ValidatedJson;
use crate::middleware::{require_admin, CurrentUser};
use crate::state::AppState;

/// Payment as reported by the checkout callback
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentRequest {
    #[schema(value_type = f64, example = 900.0)]
    pub amount: Decimal,
    #[validate(length(min = 1, message = "Payment method is required"))]
    #[schema(example = "khalti")]
    pub method: String,
    /// Defaults to `pending`
    pub status: Option<String>,
    /// The order this payment settles
    #[validate(length(min = 1, message = "Booking id is required"))]
    pub booking_id: String,
}

/// Partial payment update
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentRequest {
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Decimal>,
    #[validate(length(min = 1, message = "Payment method cannot be empty"))]
    pub method: Option<String>,
    #[validate(length(min = 1, message = "Status cannot be empty"))]
    pub status: Option<String>,
    #[validate(length(min = 1, message = "Booking id cannot be empty"))]
    pub booking_id: Option<String>,
}

/// Payment filters; the search route also honours amount and booking filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct PaymentQuery {
    pub status: Option<String>,
    pub method: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    #[param(value_type = Option<f64>)]
    pub min_amount: Option<Decimal>,
    #[param(value_type = Option<f64>)]
    pub max_amount: Option<Decimal>,
    pub booking_id: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PaymentQuery {
    fn page(&self) -> PaginationParams {
        PaginationParams::new(
            self.page.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Status, method and date range only
    fn basic_filter(self) -> PaymentFilter {
        PaymentFilter {
            status: self.status,
            method: self.method,
            from: self.from,
            to: self.to,
            ..PaymentFilter::default()
        }
    }

    fn full_filter(self) -> PaymentFilter {
        PaymentFilter {
            status: self.status,
            method: self.method,
            from: self.from,
            to: self.to,
            min_amount: self.min_amount,
            max_amount: self.max_amount,
            booking_id: self.booking_id,
        }
    }
}

/// Create payment routes (all require a token)
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments).post(create_payment))
        .route("/stats", get(payment_stats))
        .route("/filter/search", get(search_payments))
        .route(
            "/:id",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
}

/// Record a payment
#[utoipa::path(
    post,
    path = "/api/v1/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_payment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePaymentRequest>,
) -> AppResult<Created<Payment>> {
    let payment = state
        .store
        .payments
        .record_payment(NewPayment {
            amount: payload.amount,
            method: payload.method,
            status: payload.status,
            booking_id: payload.booking_id,
        })
        .await?;

    Ok(Created(payment))
}

/// List payments, newest first (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(PaymentQuery),
    responses(
        (status = 200, description = "One page of payments"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_payments(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<PaymentQuery>,
) -> AppResult<Json<Paginated<Payment>>> {
    require_admin(&current_user)?;
    let page = query.page();
    let payments = state
        .store
        .payments
        .list_payments(query.basic_filter(), page)
        .await?;
    Ok(Json(payments))
}

/// Search payments by any field (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/payments/filter/search",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(PaymentQuery),
    responses(
        (status = 200, description = "One page of matching payments"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn search_payments(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<PaymentQuery>,
) -> AppResult<Json<Paginated<Payment>>> {
    require_admin(&current_user)?;
    let page = query.page();
    let payments = state
        .store
        .payments
        .list_payments(query.full_filter(), page)
        .await?;
    Ok(Json(payments))
}

/// Totals by status and method (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/payments/stats",
    tag = "Payments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Payment statistics", body = PaymentStats),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn payment_stats(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<PaymentStats>> {
    require_admin(&current_user)?;
    Ok(Json(state.store.payments.stats().await?))
}

/// Get a payment by ID (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/payments/{id}",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment", body = Payment),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn get_payment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Payment>> {
    require_admin(&current_user)?;
    Ok(Json(state.store.payments.get_payment(id).await?))
}

/// Update a payment (admin only)
#[utoipa::path(
    put,
    path = "/api/v1/payments/{id}",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Payment ID")),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment updated", body = Payment),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn update_payment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdatePaymentRequest>,
) -> AppResult<Json<Payment>> {
    require_admin(&current_user)?;

    let payment = state
        .store
        .payments
        .update_payment(
            id,
            PaymentChanges {
                amount: payload.amount,
                method: payload.method,
                status: payload.status,
                booking_id: payload.booking_id,
            },
        )
        .await?;

    Ok(Json(payment))
}

/// Delete a payment (admin only)
#[utoipa::path(
    delete,
    path = "/api/v1/payments/{id}",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn delete_payment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&current_user)?;
    state.store.payments.delete_payment(id).await?;
    Ok(NoContent)
}
