//! setstore-cache: expiry-aware cache adapter
//!
//! Mirrors setting values into Redis with a native key TTL and reads the
//! remaining expiry back. Eviction is left entirely to Redis.

pub mod error;
mod service;

pub use error::CacheError;
pub use service::{ttl_reply_to_expiry, ExpiryCache, RedisCache, PING_TIMEOUT};
