//! Serve command - starts the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

use common::{AppError, AppResult};
use store_service::infra::Database;

use crate::cli::ServeArgs;
use crate::config::GatewayConfig;
use crate::middleware::Cache;
use crate::routes::create_router;
use crate::state::AppState;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: GatewayConfig) -> AppResult<()> {
    let config = config.with_address(args.host, args.port);
    info!("Starting server...");

    let database = Database::connect(&config.database).await?;
    info!("Database connected");

    let cache = match &config.cache {
        Some(cache_config) => match Cache::connect(cache_config).await {
            Ok(cache) => {
                info!("Redis cache connected");
                Some(Arc::new(cache))
            }
            Err(e) => {
                return Err(AppError::internal(format!("Redis connection failed: {}", e)));
            }
        },
        None => {
            warn!("REDIS_URL not set, product cache and rate limiting are disabled");
            None
        }
    };

    let addr = config.server.addr();
    let state = AppState::from_database(database, cache, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Grocer listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
