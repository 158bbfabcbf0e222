use serde::{Deserialize, Serialize};
use setstore_core::null_as_default;
use utoipa::ToSchema;

/// Credentials submitted to `/signin`; missing or `null` fields read as empty
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SignInRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignInResponse {
    /// Signed token to send back in the `Authorization` header
    pub token: String,
}
