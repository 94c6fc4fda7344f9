//! Customer handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult, Created, NoContent};
use domain::{
    is_valid_role, Address, CustomerChanges, CustomerResponse, CustomerRole, SavedAddress,
};

use crate::extractors::ValidatedJson;
use crate::middleware::{require_admin, require_self_or_admin, CurrentUser};
use crate::state::AppState;

/// Customer update request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    #[schema(example = "Sita")]
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// New role (admin only)
    #[schema(example = "admin")]
    pub role: Option<String>,
}

/// Address payload for create and replace
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddressRequest {
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
}

impl From<AddressRequest> for Address {
    fn from(req: AddressRequest) -> Self {
        Address {
            street: req.street,
            city: req.city,
            state: req.state,
            zip: req.zip,
            country: req.country,
        }
    }
}

/// Create customer routes (all require a token)
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers))
        .route("/me", get(get_current_customer))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(deactivate_customer),
        )
        .route("/:id/restore", post(restore_customer))
        .route("/:id/addresses", get(list_addresses).post(add_address))
        .route(
            "/:id/addresses/:address_id",
            put(update_address).delete(remove_address),
        )
}

/// The signed-in customer
#[utoipa::path(
    get,
    path = "/api/v1/customers/me",
    tag = "Customers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current customer profile", body = CustomerResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_current_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<CustomerResponse>> {
    let customer = state.store.customers.get_customer(current_user.id).await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// Active customers (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "Customers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active customers", body = Vec<CustomerResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_customers(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CustomerResponse>>> {
    require_admin(&current_user)?;
    let customers = state.store.customers.list_customers().await?;
    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

/// Get a customer (self or admin)
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer profile", body = CustomerResponse),
        (status = 403, description = "Forbidden - Can only view own profile unless admin"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CustomerResponse>> {
    require_self_or_admin(&current_user, id)?;
    let customer = state.store.customers.get_customer(id).await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// Update a customer (self or admin; only admins change roles)
#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCustomerRequest>,
) -> AppResult<Json<CustomerResponse>> {
    require_self_or_admin(&current_user, id)?;

    let role = match payload.role {
        Some(role) => {
            require_admin(&current_user)?;
            if !is_valid_role(&role) {
                return Err(AppError::validation(
                    "Invalid role. Must be 'customer' or 'admin'",
                ));
            }
            Some(CustomerRole::from(role))
        }
        None => None,
    };

    let customer = state
        .store
        .customers
        .update_customer(
            id,
            CustomerChanges {
                first_name: payload.first_name,
                last_name: payload.last_name,
                phone: payload.phone,
                email: payload.email,
                role,
            },
        )
        .await?;

    Ok(Json(CustomerResponse::from(customer)))
}

/// Deactivate a customer (admin only, not yourself)
#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deactivated"),
        (status = 400, description = "Cannot deactivate your own account"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn deactivate_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&current_user)?;

    if current_user.id == id {
        return Err(AppError::validation("Cannot deactivate your own account"));
    }

    state.store.customers.deactivate_customer(id).await?;
    Ok(NoContent)
}

/// Reactivate a customer (admin only)
#[utoipa::path(
    post,
    path = "/api/v1/customers/{id}/restore",
    tag = "Customers",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer restored", body = CustomerResponse),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn restore_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CustomerResponse>> {
    require_admin(&current_user)?;
    let customer = state.store.customers.restore_customer(id).await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// Saved addresses (self or admin)
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}/addresses",
    tag = "Customers",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Saved addresses", body = Vec<SavedAddress>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn list_addresses(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<SavedAddress>>> {
    require_self_or_admin(&current_user, id)?;
    Ok(Json(state.store.customers.list_addresses(id).await?))
}

/// Save a new address (self or admin)
#[utoipa::path(
    post,
    path = "/api/v1/customers/{id}/addresses",
    tag = "Customers",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = AddressRequest,
    responses(
        (status = 201, description = "Address saved", body = SavedAddress),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn add_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<AddressRequest>,
) -> AppResult<Created<SavedAddress>> {
    require_self_or_admin(&current_user, id)?;
    let saved = state
        .store
        .customers
        .add_address(id, Address::from(payload))
        .await?;
    Ok(Created(saved))
}

/// Replace a saved address (self or admin)
#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}/addresses/{address_id}",
    tag = "Customers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Customer ID"),
        ("address_id" = Uuid, Path, description = "Address ID")
    ),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address replaced", body = SavedAddress),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Customer or address not found")
    )
)]
pub async fn update_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path((id, address_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(payload): ValidatedJson<AddressRequest>,
) -> AppResult<Json<SavedAddress>> {
    require_self_or_admin(&current_user, id)?;
    let saved = state
        .store
        .customers
        .update_address(id, address_id, Address::from(payload))
        .await?;
    Ok(Json(saved))
}

/// Remove a saved address (self or admin)
#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}/addresses/{address_id}",
    tag = "Customers",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Customer ID"),
        ("address_id" = Uuid, Path, description = "Address ID")
    ),
    responses(
        (status = 204, description = "Address removed"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Customer or address not found")
    )
)]
pub async fn remove_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path((id, address_id)): Path<(Uuid, Uuid)>,
) -> AppResult<NoContent> {
    require_self_or_admin(&current_user, id)?;
    state.store.customers.remove_address(id, address_id).await?;
    Ok(NoContent)
}
