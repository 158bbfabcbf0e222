//! Test utilities for database integration tests
//!
//! Starts a disposable PostgreSQL container, connects through
//! [`establish_connection`] and creates the schema.

use crate::{ensure_schema, establish_connection, DbConnection};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use setstore_core::DatabaseConfig;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync, GenericImage, ImageExt};

const TEST_DB_NAME: &str = "test_db";
const TEST_DB_USER: &str = "test_user";
const TEST_DB_PASSWORD: &str = "test_password";

/// Test database backed by a dedicated PostgreSQL container
pub struct TestDatabase {
    pub db: Arc<DbConnection>,
    pub config: DatabaseConfig,
    #[allow(dead_code)]
    container: ContainerAsync<GenericImage>,
}

impl TestDatabase {
    /// Start a container, connect with retries and create the `settings` table
    pub async fn new() -> anyhow::Result<Self> {
        let container = GenericImage::new("postgres", "17-alpine")
            .with_env_var("POSTGRES_DB", TEST_DB_NAME)
            .with_env_var("POSTGRES_USER", TEST_DB_USER)
            .with_env_var("POSTGRES_PASSWORD", TEST_DB_PASSWORD)
            .start()
            .await?;

        let port = container.get_host_port_ipv4(5432).await?;
        let config = DatabaseConfig {
            host: "localhost".to_string(),
            port,
            user: TEST_DB_USER.to_string(),
            password: TEST_DB_PASSWORD.to_string(),
            name: TEST_DB_NAME.to_string(),
        };

        // Wait for the database to be ready
        tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;

        let db = Self::connect_with_retry(&config, 10).await?;
        ensure_schema(&db)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create schema: {}", e))?;

        Ok(Self {
            db,
            config,
            container,
        })
    }

    async fn connect_with_retry(
        config: &DatabaseConfig,
        max_retries: u32,
    ) -> anyhow::Result<Arc<DbConnection>> {
        let mut attempts = 0;
        loop {
            match establish_connection(config).await {
                Ok(db) => return Ok(db),
                Err(e) if attempts < max_retries => {
                    attempts += 1;
                    tracing::debug!("Database not ready ({}), retrying...", e);
                    tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
                }
                Err(e) => {
                    return Err(anyhow::anyhow!(
                        "Failed to connect to database after {} retries: {}",
                        max_retries,
                        e
                    ))
                }
            }
        }
    }

    /// Remove all rows and reset the id sequence
    pub async fn truncate(&self) -> anyhow::Result<()> {
        self.db
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                "TRUNCATE TABLE settings RESTART IDENTITY".to_owned(),
            ))
            .await?;
        Ok(())
    }
}
