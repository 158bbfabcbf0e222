use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use setstore_core::problemdetails::Problem;
use tracing::debug;

use crate::{context::AuthContext, error::AuthError, AuthState};

/// Reject requests without a valid token; on success attach [`AuthContext`]
pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Problem> {
    let username = {
        let token = extract_token(req.headers()).ok_or(AuthError::MissingToken)?;
        auth_state.token_service.verify(token).map_err(|e| {
            debug!("Rejected token: {}", e);
            e
        })?
    };

    req.extensions_mut().insert(AuthContext::new(username));
    Ok(next.run(req).await)
}

/// The raw token from `Authorization`; an optional `Bearer ` prefix is stripped
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
