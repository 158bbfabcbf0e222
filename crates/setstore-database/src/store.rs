//! Keyed CRUD for setting rows

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use setstore_core::{ServiceError, ServiceResult};
use setstore_entities::settings;
use tracing::debug;

use crate::DbConnection;

/// Durable storage for settings.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait SettingStore: Send + Sync {
    /// Look up a single row by its key
    async fn get_by_key(&self, key: &str) -> ServiceResult<Option<settings::Model>>;

    /// All rows, newest id first
    async fn list_all(&self) -> ServiceResult<Vec<settings::Model>>;

    /// Insert a row; id and timestamps are assigned by the store
    async fn insert(&self, key: &str, value: &str) -> ServiceResult<settings::Model>;

    /// Replace the value of every row matching `key`.
    ///
    /// Matching zero rows is not an error; returns the number of rows touched.
    async fn update_value(&self, key: &str, value: &str) -> ServiceResult<u64>;
}

/// sea-orm backed [`SettingStore`]
pub struct SettingsRepository {
    db: Arc<DbConnection>,
}

impl SettingsRepository {
    pub fn new(db: Arc<DbConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> ServiceError {
    ServiceError::Database(e.to_string())
}

#[async_trait]
impl SettingStore for SettingsRepository {
    async fn get_by_key(&self, key: &str) -> ServiceResult<Option<settings::Model>> {
        debug!("SELECT setting key={}", key);

        settings::Entity::find()
            .filter(settings::Column::Key.eq(key))
            .one(self.db.as_ref())
            .await
            .map_err(db_error)
    }

    async fn list_all(&self) -> ServiceResult<Vec<settings::Model>> {
        debug!("SELECT all settings");

        settings::Entity::find()
            .order_by_desc(settings::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(db_error)
    }

    async fn insert(&self, key: &str, value: &str) -> ServiceResult<settings::Model> {
        debug!("INSERT setting key={}", key);

        let model = settings::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            ..Default::default()
        };

        model.insert(self.db.as_ref()).await.map_err(db_error)
    }

    async fn update_value(&self, key: &str, value: &str) -> ServiceResult<u64> {
        debug!("UPDATE setting key={}", key);

        let result = settings::Entity::update_many()
            .col_expr(settings::Column::Value, Expr::value(value))
            .col_expr(
                settings::Column::UpdatedAt,
                Expr::current_timestamp().into(),
            )
            .filter(settings::Column::Key.eq(key))
            .exec(self.db.as_ref())
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }
}
