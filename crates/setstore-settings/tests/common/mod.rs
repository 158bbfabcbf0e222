//! In-memory store and cache doubles shared by the settings tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use setstore_cache::{CacheError, ExpiryCache};
use setstore_core::{ServiceError, ServiceResult};
use setstore_database::SettingStore;
use setstore_entities::settings;
use setstore_settings::SettingsService;

#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<settings::Model>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub writes: AtomicUsize,
}

impl MemoryStore {
    pub fn seed(&self, key: &str, value: &str) -> settings::Model {
        let mut rows = self.rows.lock().unwrap();
        let now = chrono::Utc::now();
        let row = settings::Model {
            id: rows.len() as i32 + 1,
            key: key.to_string(),
            value: value.to_string(),
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        row
    }

    pub fn rows(&self) -> Vec<settings::Model> {
        self.rows.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self, flag: &AtomicBool) -> ServiceResult<()> {
        if flag.load(Ordering::SeqCst) {
            Err(ServiceError::Database("store unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SettingStore for MemoryStore {
    async fn get_by_key(&self, key: &str) -> ServiceResult<Option<settings::Model>> {
        self.check(&self.fail_reads)?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.key == key)
            .cloned())
    }

    async fn list_all(&self) -> ServiceResult<Vec<settings::Model>> {
        self.check(&self.fail_reads)?;
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn insert(&self, key: &str, value: &str) -> ServiceResult<settings::Model> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check(&self.fail_writes)?;
        Ok(self.seed(key, value))
    }

    async fn update_value(&self, key: &str, value: &str) -> ServiceResult<u64> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check(&self.fail_writes)?;
        let mut touched = 0;
        for row in self.rows.lock().unwrap().iter_mut() {
            if row.key == key {
                row.value = value.to_string();
                row.updated_at = chrono::Utc::now();
                touched += 1;
            }
        }
        Ok(touched)
    }
}

#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, u64)>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub writes: AtomicUsize,
}

impl MemoryCache {
    pub fn entry(&self, key: &str) -> Option<(String, u64)> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExpiryCache for MemoryCache {
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), CacheError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionFailed("cache unavailable".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }

    async fn remaining_expiry(&self, key: &str) -> Result<Option<Duration>, CacheError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionFailed("cache unavailable".to_string()));
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(_, ttl)| Duration::from_secs(*ttl)))
    }
}

pub struct Fixture {
    pub store: Arc<MemoryStore>,
    pub cache: Arc<MemoryCache>,
    pub service: Arc<SettingsService>,
}

impl Fixture {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let cache = Arc::new(MemoryCache::default());
        let service = Arc::new(SettingsService::new(store.clone(), cache.clone()));
        Self {
            store,
            cache,
            service,
        }
    }
}
