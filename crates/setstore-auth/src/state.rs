use std::sync::Arc;

use crate::token_service::TokenService;

/// The single credential pair allowed to sign in
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("admin", "SabziPolo")
    }
}

/// Application state for sign-in and token verification
#[derive(Clone)]
pub struct AuthState {
    pub token_service: Arc<TokenService>,
    pub credentials: Credentials,
}

impl AuthState {
    pub fn new(secret: &str, credentials: Credentials) -> Self {
        Self {
            token_service: Arc::new(TokenService::new(secret)),
            credentials,
        }
    }
}
