//! Database connection management

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use setstore_core::{DatabaseConfig, ServiceError, ServiceResult};
use std::sync::Arc;
use tracing::{debug, info};

pub type DbConnection = DatabaseConnection;

/// Open a pooled connection and verify it with a ping before returning
pub async fn establish_connection(config: &DatabaseConfig) -> ServiceResult<Arc<DbConnection>> {
    debug!(
        "Connecting to PostgreSQL at {}:{}/{} as {}",
        config.host, config.port, config.name, config.user
    );

    let mut opt = ConnectOptions::new(config.connection_url());
    opt.max_connections(20)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .map_err(|e| ServiceError::connection("postgres", e))?;

    db.ping()
        .await
        .map_err(|e| ServiceError::connection("postgres", e))?;

    info!("Connected to PostgreSQL at {}:{}", config.host, config.port);
    Ok(Arc::new(db))
}
