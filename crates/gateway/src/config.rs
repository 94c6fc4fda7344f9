//! Gateway configuration.

use common::{CacheConfig, ConfigError, DatabaseConfig, JwtConfig, RateLimitConfig, ServerConfig};

/// Everything the `grocer` binary needs to serve requests.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Redis for the product cache and rate limiting; both are off when unset
    pub cache: Option<CacheConfig>,
    pub jwt: JwtConfig,
    /// Limits for every `/api/v1` route except authentication
    pub rate_limit: RateLimitConfig,
    /// Stricter limits for `/api/v1/auth`
    pub auth_rate_limit: RateLimitConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            jwt: JwtConfig::from_env()?,
            rate_limit: RateLimitConfig::general_from_env(),
            auth_rate_limit: RateLimitConfig::auth_from_env(),
        })
    }

    /// Override the bind address from CLI flags.
    pub fn with_address(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}
