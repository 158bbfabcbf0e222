use axum::http::StatusCode;
use setstore_core::problemdetails::{self, Problem};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("incorrect username or password")]
    InvalidCredentials,

    #[error("missing token")]
    MissingToken,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token has no username claim")]
    MissingUsername,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<AuthError> for Problem {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidRequest(_) => problemdetails::new(StatusCode::BAD_REQUEST)
                .with_title("Invalid Request")
                .with_detail("invalid request"),

            AuthError::InvalidCredentials => problemdetails::new(StatusCode::UNAUTHORIZED)
                .with_title("Unauthorized")
                .with_detail("incorrect username or password"),

            AuthError::MissingToken => problemdetails::new(StatusCode::UNAUTHORIZED)
                .with_title("Unauthorized")
                .with_detail("missing token"),

            AuthError::InvalidToken(_) => problemdetails::new(StatusCode::UNAUTHORIZED)
                .with_title("Unauthorized")
                .with_detail("invalid token"),

            AuthError::MissingUsername => problemdetails::new(StatusCode::UNAUTHORIZED)
                .with_title("Unauthorized")
                .with_detail("invalid token (no username)"),

            AuthError::Signing(msg) => {
                tracing::error!("Failed to sign token: {}", msg);
                problemdetails::new(StatusCode::INTERNAL_SERVER_ERROR)
                    .with_title("Internal Server Error")
                    .with_detail("failed to sign token")
            }
        }
    }
}
