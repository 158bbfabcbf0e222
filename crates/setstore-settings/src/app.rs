//! Router assembly for the whole HTTP surface

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};
use setstore_auth::{auth_middleware, AuthApiDoc, AuthState};
use setstore_core::openapi::{merge_openapi_schemas, with_bearer_auth};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::handlers::{self, SettingsApiDoc, SettingsAppState};

#[derive(OpenApi)]
#[openapi(info(
    title = "Setstore API",
    description = "Settings stored in PostgreSQL with Redis-backed expiry"
))]
struct ApiDoc;

/// Combined OpenAPI document for every route served by [`build_application`]
pub fn api_doc() -> utoipa::openapi::OpenApi {
    with_bearer_auth(merge_openapi_schemas(
        ApiDoc::openapi(),
        vec![AuthApiDoc::openapi(), SettingsApiDoc::openapi()],
    ))
}

/// Public greeting and sign-in, plus the settings routes behind the token gate
pub fn build_application(
    settings_state: Arc<SettingsAppState>,
    auth_state: Arc<AuthState>,
) -> Router {
    let protected = handlers::configure_routes()
        .route_layer(from_fn_with_state(auth_state.clone(), auth_middleware))
        .with_state(settings_state.clone());

    Router::new()
        .merge(handlers::configure_public_routes().with_state(settings_state))
        .merge(setstore_auth::handlers::configure_routes().with_state(auth_state))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
}
