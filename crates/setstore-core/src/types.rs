//! Shared datetime type and serde helpers

use chrono::{DateTime as ChronoDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Database DateTime type used across all setstore crates
///
/// Maps to `TIMESTAMPTZ` columns and serializes as RFC 3339 with a `Z` suffix
/// (`2025-10-12T12:15:47.609192Z`).
///
/// # OpenAPI Schema
/// When using with utoipa, add the schema attribute:
/// ```rust,ignore
/// #[schema(value_type = String, format = DateTime)]
/// pub created_at: DBDateTime,
/// ```
pub type DBDateTime = ChronoDateTime<Utc>;

/// Deserialize an explicit JSON `null` as the type's default.
///
/// Pair with `#[serde(default)]` so missing and `null` fields read the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
