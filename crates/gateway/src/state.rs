//! Application state for dependency injection.

use std::sync::Arc;

use auth_service::{AuthService, Authenticator};
use store_service::{infra::Database, StoreServices};

use crate::config::GatewayConfig;
use crate::directory::StoreDirectory;
use crate::middleware::Cache;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: StoreServices,
    pub auth: Arc<dyn AuthService>,
    /// `None` disables the product cache and rate limiting
    pub cache: Option<Arc<Cache>>,
    /// Pinged by the health check
    pub database: Option<Database>,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    /// Wire the store and authentication services over one database.
    pub fn from_database(
        database: Database,
        cache: Option<Arc<Cache>>,
        config: GatewayConfig,
    ) -> Self {
        let store = StoreServices::new(database.get_connection());
        let directory = Arc::new(StoreDirectory::new(store.customers.clone()));
        let auth = Arc::new(Authenticator::new(directory, config.jwt.clone()));

        Self {
            store,
            auth,
            cache,
            database: Some(database),
            config: Arc::new(config),
        }
    }

    /// Create state from already built services.
    pub fn new(
        store: StoreServices,
        auth: Arc<dyn AuthService>,
        cache: Option<Arc<Cache>>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            store,
            auth,
            cache,
            database: None,
            config: Arc::new(config),
        }
    }
}
