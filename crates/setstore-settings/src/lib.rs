//! setstore-settings: settings CRUD over the durable store and expiry cache
//!
//! Rows live in PostgreSQL; each value is mirrored into Redis with a TTL that
//! is read back on every fetch.

pub mod app;
pub mod error;
pub mod handlers;
pub mod services;

pub use app::{api_doc, build_application};
pub use error::SettingsError;
pub use handlers::SettingsAppState;
pub use services::{NewSetting, SettingUpdate, SettingWithTtl, SettingsService};
