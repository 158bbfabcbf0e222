//! HTTP handlers for settings operations

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use setstore_auth::RequireAuth;
use setstore_core::problemdetails::Problem;
use setstore_core::ProblemDetails;
use tracing::debug;
use utoipa::OpenApi;

use super::types::*;
use crate::error::SettingsError;

/// OpenAPI documentation for settings endpoints
#[derive(OpenApi)]
#[openapi(
    paths(hello, get_settings, get_setting, create_setting, update_setting),
    components(schemas(SettingResponse, SettingPayload, HelloResponse)),
    tags(
        (name = "Greetings", description = "Liveness greeting"),
        (name = "Settings", description = "Settings stored in PostgreSQL and mirrored into Redis")
    )
)]
pub struct SettingsApiDoc;

/// Routes served without authentication
pub fn configure_public_routes() -> Router<Arc<SettingsAppState>> {
    Router::new().route("/", get(hello))
}

/// Routes that require a verified token
pub fn configure_routes() -> Router<Arc<SettingsAppState>> {
    Router::new()
        .route("/settings", get(get_settings).post(create_setting))
        .route("/settings/{key}", get(get_setting).put(update_setting))
}

fn path_key(path: Result<Path<String>, PathRejection>) -> Result<String, SettingsError> {
    path.map(|Path(key)| key).map_err(|e| {
        debug!("Rejected path key: {}", e);
        SettingsError::InvalidKey
    })
}

/// Decode the raw `{key}` segment of `uri` with query-string rules.
///
/// `+` reads as a space and every `%` must start a two-digit hex escape.
fn unescape_key(uri: &Uri) -> Result<String, SettingsError> {
    let raw = uri.path().rsplit('/').next().unwrap_or_default();

    let malformed = raw.match_indices('%').any(|(i, _)| {
        !raw.get(i + 1..i + 3)
            .is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
    });
    if malformed {
        return Err(SettingsError::InvalidKey);
    }

    urlencoding::decode(&raw.replace('+', " "))
        .map(|key| key.into_owned())
        .map_err(|_| SettingsError::InvalidKey)
}

fn payload(body: Result<Json<SettingPayload>, JsonRejection>) -> Result<SettingPayload, SettingsError> {
    body.map(|Json(payload)| payload)
        .map_err(|e| SettingsError::InvalidBody(e.body_text()))
}

/// Say hello
#[utoipa::path(
    tag = "Greetings",
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = HelloResponse)
    )
)]
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello!".to_string(),
    })
}

/// List all settings, newest first
#[utoipa::path(
    tag = "Settings",
    get,
    path = "/settings",
    responses(
        (status = 200, description = "All settings", body = Vec<SettingResponse>),
        (status = 401, description = "Unauthorized", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_settings(
    RequireAuth(auth): RequireAuth,
    State(state): State<Arc<SettingsAppState>>,
) -> Result<Json<Vec<SettingResponse>>, Problem> {
    debug!("{} listing settings", auth.username);

    let settings = state.settings_service.list().await?;

    Ok(Json(settings.into_iter().map(SettingResponse::from).collect()))
}

/// Get a setting by key
#[utoipa::path(
    tag = "Settings",
    get,
    path = "/settings/{key}",
    params(
        ("key" = String, Path, description = "Integer-shaped setting key")
    ),
    responses(
        (status = 200, description = "Setting found", body = SettingResponse),
        (status = 400, description = "Key is not an integer", body = ProblemDetails),
        (status = 401, description = "Unauthorized", body = ProblemDetails),
        (status = 404, description = "Setting not found", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_setting(
    RequireAuth(auth): RequireAuth,
    State(state): State<Arc<SettingsAppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<SettingResponse>, Problem> {
    let raw = path_key(path)?;
    let key = raw
        .parse::<i64>()
        .map_err(|_| SettingsError::InvalidKey)?
        .to_string();

    debug!("{} reading setting {}", auth.username, key);

    let setting = state.settings_service.get(&key).await?;

    Ok(Json(setting.into()))
}

/// Create a setting and cache it with an expiry
#[utoipa::path(
    tag = "Settings",
    post,
    path = "/settings",
    request_body = SettingPayload,
    responses(
        (status = 201, description = "Setting created, request echoed", body = SettingPayload),
        (status = 400, description = "Invalid request", body = ProblemDetails),
        (status = 401, description = "Unauthorized", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_setting(
    RequireAuth(auth): RequireAuth,
    State(state): State<Arc<SettingsAppState>>,
    body: Result<Json<SettingPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<SettingPayload>), Problem> {
    let request = payload(body)?;

    debug!("{} creating setting {}", auth.username, request.key);

    state
        .settings_service
        .create(&request.to_new_setting())
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// Update a setting's value and/or cache expiry
#[utoipa::path(
    tag = "Settings",
    put,
    path = "/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key, URL-escaped (`+` is a space)")
    ),
    request_body = SettingPayload,
    responses(
        (status = 200, description = "Setting updated, request echoed", body = SettingPayload),
        (status = 400, description = "Invalid request", body = ProblemDetails),
        (status = 401, description = "Unauthorized", body = ProblemDetails),
        (status = 404, description = "Setting not found", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_setting(
    RequireAuth(auth): RequireAuth,
    State(state): State<Arc<SettingsAppState>>,
    uri: Uri,
    body: Result<Json<SettingPayload>, JsonRejection>,
) -> Result<Json<SettingPayload>, Problem> {
    let key = unescape_key(&uri)?;
    let request = payload(body)?;

    debug!("{} updating setting {}", auth.username, key);

    state
        .settings_service
        .update(&key, &request.to_update())
        .await?;

    Ok(Json(request))
}
