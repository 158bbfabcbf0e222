use std::sync::Arc;

use setstore_cache::ExpiryCache;
use setstore_database::SettingStore;
use setstore_entities::settings;
use tracing::{debug, info};

use crate::error::SettingsError;

/// Input for [`SettingsService::create`]
#[derive(Debug, Clone, Default)]
pub struct NewSetting {
    pub key: String,
    pub value: String,
    pub ttl: i64,
}

/// Input for [`SettingsService::update`]; `None` leaves that part untouched
#[derive(Debug, Clone, Default)]
pub struct SettingUpdate {
    pub value: Option<String>,
    pub ttl: Option<i64>,
}

/// A stored row with its live cache expiry in whole seconds (0 when absent)
#[derive(Debug, Clone, PartialEq)]
pub struct SettingWithTtl {
    pub setting: settings::Model,
    pub ttl: i64,
}

pub struct SettingsService {
    store: Arc<dyn SettingStore>,
    cache: Arc<dyn ExpiryCache>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingStore>, cache: Arc<dyn ExpiryCache>) -> Self {
        Self { store, cache }
    }

    /// Remaining cache expiry for `key`; read failures count as no expiry
    async fn live_ttl(&self, key: &str) -> i64 {
        match self.cache.remaining_expiry(key).await {
            Ok(Some(remaining)) => remaining.as_secs() as i64,
            Ok(None) => 0,
            Err(e) => {
                debug!("Ignoring cache error reading ttl for {}: {}", key, e);
                0
            }
        }
    }

    async fn with_ttl(&self, setting: settings::Model) -> SettingWithTtl {
        let ttl = self.live_ttl(&setting.key).await;
        SettingWithTtl { setting, ttl }
    }

    pub async fn get(&self, key: &str) -> Result<SettingWithTtl, SettingsError> {
        let setting = self
            .store
            .get_by_key(key)
            .await
            .map_err(SettingsError::Lookup)?
            .ok_or(SettingsError::NotFound)?;

        Ok(self.with_ttl(setting).await)
    }

    /// All settings, newest first
    pub async fn list(&self) -> Result<Vec<SettingWithTtl>, SettingsError> {
        let rows = self.store.list_all().await.map_err(SettingsError::List)?;

        let mut settings = Vec::with_capacity(rows.len());
        for row in rows {
            settings.push(self.with_ttl(row).await);
        }
        Ok(settings)
    }

    /// Persist a new setting and mirror it into the cache.
    ///
    /// A cache failure leaves the inserted row in place.
    pub async fn create(&self, input: &NewSetting) -> Result<(), SettingsError> {
        if input.key.is_empty() {
            return Err(SettingsError::KeyRequired);
        }
        if input.value.is_empty() {
            return Err(SettingsError::ValueRequired);
        }
        if input.ttl <= 0 {
            return Err(SettingsError::TtlNotPositive);
        }

        let row = self
            .store
            .insert(&input.key, &input.value)
            .await
            .map_err(SettingsError::Insert)?;

        self.cache
            .set_with_expiry(&input.key, &input.value, input.ttl as u64)
            .await
            .map_err(SettingsError::CacheStore)?;

        info!("Created setting {} (id {})", row.key, row.id);
        Ok(())
    }

    /// Change the stored value and/or refresh the cache expiry of `key`
    pub async fn update(&self, key: &str, update: &SettingUpdate) -> Result<(), SettingsError> {
        if update.value.is_none() && update.ttl.is_none() {
            return Err(SettingsError::NothingToUpdate);
        }

        if let Some(value) = &update.value {
            let rows = self
                .store
                .update_value(key, value)
                .await
                .map_err(SettingsError::Update)?;
            debug!("Updated {} row(s) for {}", rows, key);
        }

        // Zero matched rows above is only detected here
        let setting = self
            .store
            .get_by_key(key)
            .await
            .map_err(SettingsError::Lookup)?
            .ok_or(SettingsError::NotFound)?;

        if let Some(ttl) = update.ttl.filter(|ttl| *ttl > 0) {
            self.cache
                .set_with_expiry(key, &setting.value, ttl as u64)
                .await
                .map_err(SettingsError::CacheRefresh)?;
        }

        info!("Updated setting {}", key);
        Ok(())
    }
}
