//! Error types for casafind

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for casafind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No listings to flatten. The search returned an empty batch.")]
    EmptyBatch,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Errors talking to the search API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}. Check your API key and secret.")]
    Auth(String),

    #[error("Bearer token was rejected by the search endpoint. Acquire a new token and retry.")]
    AuthExpired,

    #[error("Search failed: {0}")]
    Search(String),
}

impl ApiError {
    /// Whether the caller should re-acquire a token before trying again.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }
}

/// Human-readable description of a transport failure.
pub(crate) fn describe_transport(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "failed to connect to API".to_string()
    } else {
        err.to_string()
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("API key not configured. Pass --api-key, set CASAFIND_API_KEY or add api_key to the config file.")]
    MissingApiKey,

    #[error("API secret not configured. Pass --secret, set CASAFIND_SECRET or add secret to the config file.")]
    MissingSecret,

    #[error("Invalid filter '{0}'. Expected KEY=VALUE.")]
    InvalidFilter(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
