//! setstore-auth: bearer token gate
//!
//! Issues HS256 tokens for the configured credential pair and verifies them
//! in front of protected routes.

pub mod context;
mod error;
pub mod handlers;
mod middleware;
pub mod state;
mod token_service;
mod types;

pub use context::*;
pub use error::AuthError;
pub use handlers::AuthApiDoc;
pub use middleware::*;
pub use state::*;
pub use token_service::{Claims, TokenService, TOKEN_LIFETIME_HOURS};
pub use types::*;
