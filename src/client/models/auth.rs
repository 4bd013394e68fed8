//! Authentication models

use std::fmt;

use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;

/// API key and secret issued by the listings provider.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    /// Value for an `Authorization: Basic ...` header.
    pub fn basic_auth_header(&self) -> String {
        let encoded = general_purpose::STANDARD.encode(format!("{}:{}", self.api_key, self.secret));
        format!("Basic {}", encoded)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// OAuth2 bearer token returned by the token endpoint.
///
/// Expiry is reported by the provider but not tracked; a rejected token
/// surfaces as [`ApiError::AuthExpired`](crate::error::ApiError::AuthExpired).
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct BearerToken {
    #[serde(rename = "access_token")]
    token: String,

    /// Lifetime in seconds, when the provider sends it
    #[serde(default)]
    expires_in: Option<u64>,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_in: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }

    /// Value for an `Authorization: Bearer ...` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
