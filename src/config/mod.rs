//! Configuration management for casafind
//!
//! The config file is read-only from casafind's point of view: credentials
//! and default filters are edited by hand and never written back.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::client::{Credentials, SearchFilters};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API key issued by the listings provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API secret paired with `api_key`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Custom API host for development/testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// HTTP timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Filters applied to every search unless overridden on the command line
    #[serde(default)]
    pub filters: SearchFilters,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Columns to show by default (all common columns when empty)
    #[serde(default)]
    pub columns: Vec<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".casafind").join("config.yaml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the default config, so
    /// credentials can come from flags or the environment alone. A missing
    /// explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(PathBuf::from(path)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from YAML text. An empty document is the default config.
    pub fn parse(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Resolve the file path that `load_at` would read.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Credentials from this config, failing if either half is missing.
    pub fn credentials(&self) -> Result<Credentials> {
        let api_key = non_empty(&self.api_key).ok_or(ConfigError::MissingApiKey)?;
        let secret = non_empty(&self.secret).ok_or(ConfigError::MissingSecret)?;
        Ok(Credentials::new(api_key, secret))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
