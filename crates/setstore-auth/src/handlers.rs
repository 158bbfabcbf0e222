//! Sign-in endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use setstore_core::problemdetails::Problem;
use tracing::{info, warn};
use utoipa::OpenApi;

use crate::{AuthError, AuthState, SignInRequest, SignInResponse};

#[derive(OpenApi)]
#[openapi(
    paths(sign_in),
    components(schemas(SignInRequest, SignInResponse)),
    tags((name = "Auth", description = "Token issuance"))
)]
pub struct AuthApiDoc;

pub fn configure_routes() -> Router<Arc<AuthState>> {
    Router::new().route("/signin", post(sign_in))
}

/// Exchange the admin credentials for a token
#[utoipa::path(
    tag = "Auth",
    post,
    path = "/signin",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Token issued", body = SignInResponse),
        (status = 400, description = "Malformed request body", body = setstore_core::ProblemDetails),
        (status = 401, description = "Incorrect username or password", body = setstore_core::ProblemDetails),
        (status = 500, description = "Token could not be signed", body = setstore_core::ProblemDetails)
    )
)]
pub async fn sign_in(
    State(state): State<Arc<AuthState>>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<SignInResponse>, Problem> {
    let Json(request) = body.map_err(|e| AuthError::InvalidRequest(e.body_text()))?;

    if !state
        .credentials
        .matches(&request.username, &request.password)
    {
        warn!("Rejected sign-in for user {:?}", request.username);
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.token_service.issue(&request.username)?;
    info!("Issued token for {}", request.username);

    Ok(Json(SignInResponse { token }))
}
