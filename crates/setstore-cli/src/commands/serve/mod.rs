mod shutdown;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use clap::Args;
use setstore_auth::{AuthState, Credentials};
use setstore_cache::RedisCache;
use setstore_core::{CacheConfig, DatabaseConfig};
use setstore_database::{ensure_schema, establish_connection, SettingsRepository};
use setstore_settings::{api_doc, build_application, SettingsAppState, SettingsService};
use tokio::net::TcpListener;
use tracing::{debug, info};
use utoipa_swagger_ui::SwaggerUi;

pub use shutdown::shutdown_signal;

#[derive(Args)]
pub struct ServeCommand {
    /// Port to listen on (all interfaces)
    #[arg(long, default_value_t = 8080, env = "SETSTORE_PORT")]
    pub port: u16,

    /// PostgreSQL host
    #[arg(long, default_value = "db", env = "SETSTORE_DB_HOST")]
    pub db_host: String,

    /// PostgreSQL port
    #[arg(long, default_value_t = setstore_core::DEFAULT_DB_PORT, env = "SETSTORE_DB_PORT")]
    pub db_port: u16,

    /// PostgreSQL user
    #[arg(long, default_value = "postgres", env = "SETSTORE_DB_USER")]
    pub db_user: String,

    /// PostgreSQL password
    #[arg(
        long,
        default_value = "example",
        env = "SETSTORE_DB_PASSWORD",
        hide_env_values = true
    )]
    pub db_password: String,

    /// PostgreSQL database name
    #[arg(long, default_value = "settingsdb", env = "SETSTORE_DB_NAME")]
    pub db_name: String,

    /// Redis host
    #[arg(long, default_value = "redis", env = "SETSTORE_REDIS_HOST")]
    pub redis_host: String,

    /// Redis port
    #[arg(long, default_value_t = setstore_core::DEFAULT_REDIS_PORT, env = "SETSTORE_REDIS_PORT")]
    pub redis_port: u16,

    /// Secret used to sign and verify tokens
    #[arg(
        long,
        default_value = "my-secret",
        env = "SETSTORE_SECRET",
        hide_env_values = true
    )]
    pub secret: String,

    /// Username accepted by /signin
    #[arg(long, default_value = "admin", env = "SETSTORE_ADMIN_USERNAME")]
    pub admin_username: String,

    /// Password accepted by /signin
    #[arg(
        long,
        default_value = "SabziPolo",
        env = "SETSTORE_ADMIN_PASSWORD",
        hide_env_values = true
    )]
    pub admin_password: String,

    /// Create the settings table if it does not exist
    #[arg(long, env = "SETSTORE_INIT_SCHEMA")]
    pub init_schema: bool,
}

impl ServeCommand {
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            name: self.db_name.clone(),
        }
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            host: self.redis_host.clone(),
            port: self.redis_port,
        }
    }

    pub fn execute(self) -> anyhow::Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.run())
    }

    async fn run(self) -> anyhow::Result<()> {
        debug!("Initializing database connection...");
        let db = establish_connection(&self.database_config()).await?;

        if self.init_schema {
            ensure_schema(&db).await?;
        }

        debug!("Initializing cache connection...");
        let cache = RedisCache::connect(&self.cache_config()).await?;

        let settings_service = Arc::new(SettingsService::new(
            Arc::new(SettingsRepository::new(db)),
            Arc::new(cache),
        ));
        let settings_state = Arc::new(SettingsAppState { settings_service });
        let auth_state = Arc::new(AuthState::new(
            &self.secret,
            Credentials::new(self.admin_username, self.admin_password),
        ));

        let app = with_swagger(build_application(settings_state, auth_state));

        let address = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = TcpListener::bind(address).await?;
        info!("Setstore API listening on {}", address);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("Setstore API exited");
        Ok(())
    }
}

/// Mount the Swagger UI and the OpenAPI document next to `app`
fn with_swagger(app: Router) -> Router {
    app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc()))
}
