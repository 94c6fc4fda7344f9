//! Product catalog handlers.
//!
//! Reads are public. Writes need an admin token and drop the cached copy.

use axum::{
    extract::{Extension, Path, Query, State},
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::{AppResult, Created, NoContent, Paginated, PaginationParams};
use domain::{
    NewProduct, Product, ProductChanges, ProductFilter, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE,
};

use crate::extractors::ValidatedJson;
use crate::middleware::{auth_middleware, require_admin, CurrentUser};
use crate::state::AppState;

/// Catalog listing filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductQuery {
    /// Exact category
    pub category: Option<String>,
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// New catalog entry
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Basmati Rice 5kg")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = f64, example = 1250.0)]
    pub price: Decimal,
    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "grains")]
    pub category: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
    pub image: Option<String>,
}

/// Partial product update
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: Option<i32>,
    pub image: Option<String>,
}

/// Create product routes
pub fn product_routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_product))
        .route("/:id", put(update_product).delete(delete_product))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
        .merge(admin)
}

/// Browse the catalog
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "One page of products")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Paginated<Product>>> {
    let page = PaginationParams::new(
        query.page.unwrap_or(DEFAULT_PAGE_NUMBER),
        query.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    let filter = ProductFilter {
        category: query.category,
        search: query.search,
    };

    let products = state.store.products.list_products(filter, page).await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Product>> {
    if let Some(product) = cached_product(&state, id).await {
        return Ok(Json(product));
    }

    let product = state.store.products.get_product(id).await?;
    cache_product(&state, &product).await;

    Ok(Json(product))
}

/// Add a product (admin only)
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_product(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<Created<Product>> {
    require_admin(&current_user)?;

    let product = state
        .store
        .products
        .create_product(NewProduct {
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            stock: payload.stock,
            image: payload.image,
        })
        .await?;

    Ok(Created(product))
}

/// Update a product (admin only)
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> AppResult<Json<Product>> {
    require_admin(&current_user)?;

    let product = state
        .store
        .products
        .update_product(
            id,
            ProductChanges {
                name: payload.name,
                description: payload.description,
                price: payload.price,
                category: payload.category,
                stock: payload.stock,
                image: payload.image,
            },
        )
        .await?;
    forget_product(&state, id).await;

    Ok(Json(product))
}

/// Delete a product (admin only)
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    require_admin(&current_user)?;

    state.store.products.delete_product(id).await?;
    forget_product(&state, id).await;

    Ok(NoContent)
}

// The product cache is best effort: a Redis failure falls back to the store.

async fn cached_product(state: &AppState, id: Uuid) -> Option<Product> {
    let cache = state.cache.as_ref()?;
    match cache.get_product(&id).await {
        Ok(product) => product,
        Err(e) => {
            warn!(product_id = %id, error = %e, "Product cache read failed");
            None
        }
    }
}

async fn cache_product(state: &AppState, product: &Product) {
    if let Some(cache) = &state.cache {
        if let Err(e) = cache.set_product(product).await {
            warn!(product_id = %product.id, error = %e, "Product cache write failed");
        }
    }
}

async fn forget_product(state: &AppState, id: Uuid) {
    if let Some(cache) = &state.cache {
        if let Err(e) = cache.invalidate_product(&id).await {
            warn!(product_id = %id, error = %e, "Product cache invalidation failed");
        }
    }
}
