//! Rate limiting middleware.
//!
//! Counters live in Redis. Without a cache every request passes; with one,
//! a Redis failure rejects the request. Buckets are keyed by the TCP peer
//! unless it is listed in `TRUSTED_PROXIES`.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::{IpAddr, SocketAddr};
use tracing::warn;

use common::{AppError, RateLimitConfig};

use crate::state::AppState;

/// Rate limit middleware for general endpoints.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let limits = state.config.rate_limit;
    rate_limit_internal(state, connect_info, request, next, limits).await
}

/// Rate limit middleware for auth endpoints (stricter).
pub async fn rate_limit_auth_middleware(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let limits = state.config.auth_rate_limit;
    rate_limit_internal(state, connect_info, request, next, limits).await
}

async fn rate_limit_internal(
    state: AppState,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request<Body>,
    next: Next,
    limits: RateLimitConfig,
) -> Response {
    let Some(cache) = state.cache.as_ref() else {
        return next.run(request).await;
    };

    let ip = get_client_ip(
        &request,
        connect_info,
        &state.config.server.trusted_proxies,
    );
    let identifier = format!("{}:{}", request.uri().path(), ip);

    let count = match cache
        .check_rate_limit(&identifier, limits.max_requests, limits.window_seconds)
        .await
    {
        Ok((count, true)) => count,
        Ok((_, false)) => return rate_limit_exceeded_response(limits),
        Err(e) => {
            warn!(error = %e, "Rate limiter unavailable, rejecting request");
            return rate_limit_exceeded_response(limits);
        }
    };

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert("X-RateLimit-Limit", HeaderValue::from(limits.max_requests));
    headers.insert(
        "X-RateLimit-Remaining",
        HeaderValue::from(limits.max_requests.saturating_sub(count)),
    );

    response
}

/// Client address used as the rate limit bucket.
///
/// Forwarding headers are only read when the TCP peer is a configured proxy;
/// otherwise any client could pick a fresh bucket per request.
fn get_client_ip(
    request: &Request<Body>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    trusted_proxies: &[IpAddr],
) -> String {
    let Some(peer) = connect_info.map(|ci| ci.0.ip()) else {
        return "unknown".to_string();
    };
    if !trusted_proxies.contains(&peer) {
        return peer.to_string();
    }

    // Rightmost hop that is not one of our proxies
    let forwarded = request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| {
            value
                .rsplit(',')
                .filter_map(|hop| hop.trim().parse::<IpAddr>().ok())
                .find(|ip| !trusted_proxies.contains(ip))
        });
    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    request
        .headers()
        .get("X-Real-IP")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.trim().parse::<IpAddr>().ok())
        .unwrap_or(peer)
        .to_string()
}

fn rate_limit_exceeded_response(limits: RateLimitConfig) -> Response {
    let mut response = AppError::TooManyRequests.into_response();

    let headers = response.headers_mut();
    headers.insert("Retry-After", HeaderValue::from(limits.window_seconds));
    headers.insert("X-RateLimit-Remaining", HeaderValue::from_static("0"));
    headers.insert("X-RateLimit-Limit", HeaderValue::from(limits.max_requests));

    response
}
