//! Wishlist handlers for the signed-in customer.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::Wishlist;

use crate::extractors::ValidatedJson;
use crate::middleware::{require_admin, CurrentUser};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddToWishlistRequest {
    pub product_id: Uuid,
}

/// Create wishlist routes (all require a token)
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_wishlist))
        .route("/add", post(add_to_wishlist))
        .route("/remove/:product_id", delete(remove_from_wishlist))
        .route("/all", get(all_wishlists))
}

/// The caller's wishlist with product details
#[utoipa::path(
    get,
    path = "/api/v1/wishlist",
    tag = "Wishlist",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Wishlist", body = Wishlist),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_wishlist(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Wishlist>> {
    let wishlist = state.store.wishlists.get_wishlist(current_user.id).await?;
    Ok(Json(wishlist))
}

/// Save a product; saving it again changes nothing
#[utoipa::path(
    post,
    path = "/api/v1/wishlist/add",
    tag = "Wishlist",
    security(("bearer_auth" = [])),
    request_body = AddToWishlistRequest,
    responses(
        (status = 200, description = "Updated wishlist", body = Wishlist),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn add_to_wishlist(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddToWishlistRequest>,
) -> AppResult<Json<Wishlist>> {
    let wishlist = state
        .store
        .wishlists
        .add_product(current_user.id, payload.product_id)
        .await?;
    Ok(Json(wishlist))
}

/// Remove a saved product
#[utoipa::path(
    delete,
    path = "/api/v1/wishlist/remove/{product_id}",
    tag = "Wishlist",
    security(("bearer_auth" = [])),
    params(("product_id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Updated wishlist", body = Wishlist),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not in wishlist")
    )
)]
pub async fn remove_from_wishlist(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<Wishlist>> {
    let wishlist = state
        .store
        .wishlists
        .remove_product(current_user.id, product_id)
        .await?;
    Ok(Json(wishlist))
}

/// Every customer's wishlist (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/wishlist/all",
    tag = "Wishlist",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All wishlists", body = Vec<Wishlist>),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn all_wishlists(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Wishlist>>> {
    require_admin(&current_user)?;
    Ok(Json(state.store.wishlists.all_wishlists().await?))
}
