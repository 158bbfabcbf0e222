//! Durable store adapter: PostgreSQL connection handling and setting queries

pub use sea_orm;
mod connection;
mod schema;
mod store;

pub use connection::{establish_connection, DbConnection};
pub use schema::ensure_schema;
pub use store::{SettingStore, SettingsRepository};

// Export test utilities for use by other crates in their tests
pub mod test_utils;
