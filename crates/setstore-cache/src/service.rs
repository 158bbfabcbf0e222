//! Redis implementation of the expiry cache

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use setstore_core::CacheConfig;
use tracing::{debug, error, info};

use crate::error::CacheError;

/// Upper bound for the startup liveness probe
pub const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Cache with native per-key expiry
#[async_trait]
pub trait ExpiryCache: Send + Sync {
    /// Store `value` under `key`, expiring after `ttl_seconds`
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), CacheError>;

    /// Remaining time to live, `None` if the key is missing or never expires
    async fn remaining_expiry(&self, key: &str) -> Result<Option<Duration>, CacheError>;
}

/// Convert a raw `TTL` reply (-2 missing, -1 no expiry) into a duration
pub fn ttl_reply_to_expiry(reply: i64) -> Option<Duration> {
    if reply > 0 {
        Some(Duration::from_secs(reply as u64))
    } else {
        None
    }
}

/// Redis-backed [`ExpiryCache`]
///
/// The connection manager multiplexes one connection and reconnects on
/// failure, so a single instance is shared by all requests.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    /// Connect and verify the server answers PING within [`PING_TIMEOUT`]
    pub async fn connect(config: &CacheConfig) -> Result<Self, CacheError> {
        let url = config.connection_url();
        debug!("Creating Redis client for {}", url);

        let client = redis::Client::open(url.as_str()).map_err(|e| {
            error!("Failed to create Redis client: {}", e);
            CacheError::ConnectionFailed(format!("Failed to create Redis client: {}", e))
        })?;

        let probe = async {
            let mut connection = ConnectionManager::new(client).await?;
            let _: String = redis::cmd("PING").query_async(&mut connection).await?;
            Ok::<_, redis::RedisError>(connection)
        };

        let connection = tokio::time::timeout(PING_TIMEOUT, probe)
            .await
            .map_err(|_| {
                error!("Redis at {} did not answer PING in time", url);
                CacheError::Timeout(PING_TIMEOUT)
            })?
            .map_err(|e| {
                error!("Failed to connect to Redis: {}", e);
                CacheError::ConnectionFailed(e.to_string())
            })?;

        info!("Connected to Redis at {}:{}", config.host, config.port);
        Ok(Self { connection })
    }
}

#[async_trait]
impl ExpiryCache for RedisCache {
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();

        debug!("SET {} EX {}", key, ttl_seconds);

        let _: () = conn.set_ex(key, value, ttl_seconds).await?;
        Ok(())
    }

    async fn remaining_expiry(&self, key: &str) -> Result<Option<Duration>, CacheError> {
        let mut conn = self.connection.clone();

        debug!("TTL {}", key);

        let reply: i64 = conn.ttl(key).await?;
        Ok(ttl_reply_to_expiry(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_reply_positive() {
        assert_eq!(ttl_reply_to_expiry(60), Some(Duration::from_secs(60)));
        assert_eq!(ttl_reply_to_expiry(1), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_ttl_reply_missing_or_persistent() {
        assert_eq!(ttl_reply_to_expiry(-2), None);
        assert_eq!(ttl_reply_to_expiry(-1), None);
        assert_eq!(ttl_reply_to_expiry(0), None);
    }
}
