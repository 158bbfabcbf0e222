//! Error types for the settings service

use axum::http::StatusCode;
use setstore_cache::CacheError;
use setstore_core::problemdetails::{self, Problem};
use setstore_core::ServiceError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("invalid key")]
    InvalidKey,

    #[error("failed to parse request body: {0}")]
    InvalidBody(String),

    #[error("key is required")]
    KeyRequired,

    #[error("value is required")]
    ValueRequired,

    #[error("ttl must be greater than 0")]
    TtlNotPositive,

    #[error("at least one field (value, or ttl) is required")]
    NothingToUpdate,

    #[error("setting not found")]
    NotFound,

    #[error("failed to get setting: {0}")]
    Lookup(#[source] ServiceError),

    #[error("failed to get settings: {0}")]
    List(#[source] ServiceError),

    #[error("failed to insert setting into database: {0}")]
    Insert(#[source] ServiceError),

    #[error("failed to update setting in database: {0}")]
    Update(#[source] ServiceError),

    #[error("failed to store setting in cache: {0}")]
    CacheStore(#[source] CacheError),

    #[error("failed to update setting in cache: {0}")]
    CacheRefresh(#[source] CacheError),
}

impl SettingsError {
    /// Client-facing message; backend variants never expose their source
    pub fn detail(&self) -> &'static str {
        match self {
            SettingsError::InvalidKey => "invalid key",
            SettingsError::InvalidBody(_) => "failed to parse request body",
            SettingsError::KeyRequired => "key is required",
            SettingsError::ValueRequired => "value is required",
            SettingsError::TtlNotPositive => "ttl must be greater than 0",
            SettingsError::NothingToUpdate => "at least one field (value, or ttl) is required",
            SettingsError::NotFound => "setting not found",
            SettingsError::Lookup(_) => "failed to get setting",
            SettingsError::List(_) => "failed to get settings",
            SettingsError::Insert(_) => "failed to insert setting into database",
            SettingsError::Update(_) => "failed to update setting in database",
            SettingsError::CacheStore(_) => "failed to store setting in cache",
            SettingsError::CacheRefresh(_) => "failed to update setting in cache",
        }
    }
}

impl From<SettingsError> for Problem {
    fn from(error: SettingsError) -> Self {
        let detail = error.detail();

        match error {
            SettingsError::InvalidKey
            | SettingsError::InvalidBody(_)
            | SettingsError::KeyRequired
            | SettingsError::ValueRequired
            | SettingsError::TtlNotPositive
            | SettingsError::NothingToUpdate => problemdetails::new(StatusCode::BAD_REQUEST)
                .with_title("Invalid Request")
                .with_detail(detail),

            SettingsError::NotFound => problemdetails::new(StatusCode::NOT_FOUND)
                .with_title("Setting Not Found")
                .with_detail(detail),

            SettingsError::Lookup(_)
            | SettingsError::List(_)
            | SettingsError::Insert(_)
            | SettingsError::Update(_)
            | SettingsError::CacheStore(_)
            | SettingsError::CacheRefresh(_) => {
                error!("{}", error);
                problemdetails::new(StatusCode::INTERNAL_SERVER_ERROR)
                    .with_title("Internal Server Error")
                    .with_detail(detail)
            }
        }
    }
}
