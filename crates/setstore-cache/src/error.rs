//! Error types for the cache adapter

use thiserror::Error;

/// Errors that can occur talking to the cache
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Liveness probe timed out after {0:?}")]
    Timeout(std::time::Duration),
}
