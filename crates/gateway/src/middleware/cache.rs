//! Redis cache for catalog reads and rate limiting.

use redis::{aio::ConnectionManager, AsyncCommands, RedisError};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use common::{AppError, AppResult, CacheConfig};
use domain::Product;

/// Cache key prefix for product data
const CACHE_PREFIX_PRODUCT: &str = "product:";

/// Cache key prefix for rate limiting
const CACHE_PREFIX_RATE_LIMIT: &str = "rate_limit:";

/// Redis cache wrapper.
pub struct Cache {
    conn: ConnectionManager,
    default_ttl: u64,
}

impl Cache {
    /// Connect to Redis.
    pub async fn connect(config: &CacheConfig) -> Result<Self, RedisError> {
        debug!("Connecting to Redis");
        let client = redis::Client::open(config.url.as_str())?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self {
            conn,
            default_ttl: config.default_ttl_seconds,
        })
    }

    // =========================================================================
    // Generic Cache Operations
    // =========================================================================

    /// Get a value from cache.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let mut conn = self.conn.clone();
        let result: Option<String> = conn.get(key).await.map_err(|e| {
            warn!("Redis get error for key {}: {}", key, e);
            AppError::from(e)
        })?;

        match result {
            Some(json) => match serde_json::from_str(&json) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    warn!("Failed to deserialize cached value for key {}: {}", key, e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Set a value with the configured TTL.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        self.set_with_ttl(key, value, self.default_ttl).await
    }

    pub async fn set_with_ttl<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::internal(format!("Serialization error: {}", e)))?;
        conn.set_ex::<_, _, ()>(key, json, ttl_seconds)
            .await
            .map_err(|e| {
                warn!("Redis set error for key {}: {}", key, e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub async fn delete(&self, key: &str) -> AppResult<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(|e| {
            warn!("Redis delete error for key {}: {}", key, e);
            AppError::from(e)
        })?;
        Ok(())
    }

    /// Round trip used by the health check.
    pub async fn ping(&self) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    // =========================================================================
    // Product Cache Operations
    // =========================================================================

    pub async fn get_product(&self, id: &Uuid) -> AppResult<Option<Product>> {
        self.get(&product_key(id)).await
    }

    pub async fn set_product(&self, product: &Product) -> AppResult<()> {
        self.set(&product_key(&product.id), product).await
    }

    pub async fn invalidate_product(&self, id: &Uuid) -> AppResult<()> {
        self.delete(&product_key(id)).await
    }

    // =========================================================================
    // Rate Limiting
    // =========================================================================

    /// Count a request against `identifier`.
    /// Returns (current_count, allowed); Redis failures are returned as errors.
    pub async fn check_rate_limit(
        &self,
        identifier: &str,
        max_requests: u64,
        window_seconds: u64,
    ) -> AppResult<(u64, bool)> {
        let key = format!("{}{}", CACHE_PREFIX_RATE_LIMIT, identifier);
        let mut conn = self.conn.clone();

        let (count,): (u64,) = rate_limit_pipeline(&key, window_seconds)
            .query_async(&mut conn)
            .await?;

        Ok((count, count <= max_requests))
    }
}

fn product_key(id: &Uuid) -> String {
    format!("{}{}", CACHE_PREFIX_PRODUCT, id)
}

/// `MULTI; SET key 0 NX EX window; INCR key; EXEC`
///
/// The counter and its expiry are created in one transaction, so a key can
/// never be left without a TTL.
fn rate_limit_pipeline(key: &str, window_seconds: u64) -> redis::Pipeline {
    let mut pipe = redis::pipe();
    pipe.atomic()
        .cmd("SET")
        .arg(key)
        .arg(0)
        .arg("NX")
        .arg("EX")
        .arg(window_seconds.max(1))
        .ignore()
        .incr(key, 1);
    pipe
}
