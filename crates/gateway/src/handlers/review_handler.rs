//! Review handlers - submission and moderation.

use axum::{
    extract::{Extension, Path, Query, State},
    middleware,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::{AppResult, Created, NoContent};
use domain::{NewReview, Review, ReviewStatus};

use crate::extractors::ValidatedJson;
use crate::middleware::{auth_middleware, require_admin, CurrentUser};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    pub product_id: Uuid,
    /// 1 to 5
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[schema(example = 4)]
    pub rating: u8,
    #[serde(default)]
    #[schema(example = "Fresh and well packed")]
    pub comment: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewStatusRequest {
    pub status: ReviewStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReviewQuery {
    /// `pending` or `approved`
    pub status: Option<ReviewStatus>,
}

/// Create review routes
pub fn review_routes(state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/", post(submit_review).get(list_reviews))
        .route("/:id/status", put(update_review_status))
        .route("/:id", delete(delete_review))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/product/:product_id", get(product_reviews))
        .merge(authenticated)
}

/// Review a product; it stays hidden until approved
#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review awaiting moderation", body = Review),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn submit_review(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateReviewRequest>,
) -> AppResult<Created<Review>> {
    let review = state
        .store
        .reviews
        .submit_review(NewReview {
            customer_id: current_user.id,
            product_id: payload.product_id,
            rating: payload.rating,
            comment: payload.comment,
        })
        .await?;

    Ok(Created(review))
}

/// Approved reviews of a product
#[utoipa::path(
    get,
    path = "/api/v1/reviews/product/{product_id}",
    tag = "Reviews",
    params(("product_id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Approved reviews, newest first", body = Vec<Review>)
    )
)]
pub async fn product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(state.store.reviews.product_reviews(product_id).await?))
}

/// All reviews (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    params(ReviewQuery),
    responses(
        (status = 200, description = "Reviews, newest first", body = Vec<Review>),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_reviews(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<ReviewQuery>,
) -> AppResult<Json<Vec<Review>>> {
    require_admin(&current_user)?;
    Ok(Json(state.store.reviews.list_reviews(query.status).await?))
}

/// Approve or hide a review (admin only)
#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}/status",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Review ID")),
    request_body = UpdateReviewStatusRequest,
    responses(
        (status = 200, description = "Review updated", body = Review),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn update_review_status(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateReviewStatusRequest>,
) -> AppResult<Json<Review>> {
    require_admin(&current_user)?;
    Ok(Json(state.store.reviews.set_status(id, payload.status).await?))
}

/// Delete a review (admin only)
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn delete_review(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&current_user)?;
    state.store.reviews.delete_review(id).await?;
    Ok(NoContent)
}
