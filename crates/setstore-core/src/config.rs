//! Connection configuration for the backing services

use serde::{Deserialize, Serialize};

/// Default PostgreSQL port
pub const DEFAULT_DB_PORT: u16 = 5432;
/// Default Redis port
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Relational store connection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Build a `postgres://` connection URL with credentials percent-encoded
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "db".to_string(),
            port: DEFAULT_DB_PORT,
            user: "postgres".to_string(),
            password: "example".to_string(),
            name: "settingsdb".to_string(),
        }
    }
}

/// Cache connection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub host: String,
    pub port: u16,
}

impl CacheConfig {
    pub fn connection_url(&self) -> String {
        format!("redis://{}:{}", self.host, self.port)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: "redis".to_string(),
            port: DEFAULT_REDIS_PORT,
        }
    }
}
