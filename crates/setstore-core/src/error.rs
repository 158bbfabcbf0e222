//! Backend error type shared by the store adapter and its callers

use thiserror::Error;

/// Failures raised by durable backends
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection to {service} failed: {message}")]
    Connection { service: String, message: String },
}

impl ServiceError {
    pub fn connection(service: impl Into<String>, message: impl ToString) -> Self {
        Self::Connection {
            service: service.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
