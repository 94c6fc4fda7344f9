//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::CustomerRole;

use crate::state::AppState;

/// Current authenticated customer extracted from the JWT.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: CustomerRole,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Check if the caller has admin privileges.
pub fn require_admin(user: &CurrentUser) -> AppResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Customers may act on their own record; admins on anyone's.
pub fn require_self_or_admin(user: &CurrentUser, customer_id: Uuid) -> AppResult<()> {
    if user.id == customer_id {
        Ok(())
    } else {
        require_admin(user)
    }
}

/// Validates the bearer token and stores the caller in request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::Unauthorized)?;

    let claims = state.auth.verify_token(bearer.token())?;

    let current_user = CurrentUser {
        id: claims.customer_id(),
        role: claims.customer_role(),
        email: claims.email,
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}
