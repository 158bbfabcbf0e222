use sea_orm::{ConnectionTrait, Schema};
use setstore_core::{ServiceError, ServiceResult};
use setstore_entities::settings;
use tracing::debug;

use crate::DbConnection;

/// Create the `settings` table if it does not exist yet
pub async fn ensure_schema(db: &DbConnection) -> ServiceResult<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut create = schema.create_table_from_entity(settings::Entity);
    create.if_not_exists();

    debug!("Ensuring settings table exists");
    db.execute(backend.build(&create))
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    Ok(())
}
