//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, credential resolution, and client initialization.

use std::time::Duration;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::{GlobalOptions, SearchFilterArgs};
use crate::client::search::DEFAULT_TIMEOUT_SECS;
use crate::client::{Credentials, SearchClient, SearchFilters};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with CLI/env overrides applied
    pub config: Config,
    /// API client pointed at the configured host
    pub client: SearchClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config (from `--config` or the default location), applies
    /// credential and host overrides, and builds the HTTP client. No network
    /// calls are made here.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Self::resolve_config(opts)?;

        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let client = SearchClient::with_host(config.api_host.as_deref(), timeout)?;

        let format = Self::resolve_format(opts, &config);
        debug!("Using output format {:?}", format);

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Load the config file and overlay CLI/env values on it.
    pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
        let config = Config::load_at(opts.config_ref())?;
        Ok(Self::apply_overrides(config, opts))
    }

    /// Overlay the CLI/env credential and host values on `config`.
    pub fn apply_overrides(mut config: Config, opts: &GlobalOptions) -> Config {
        if let Some(ref key) = opts.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(ref secret) = opts.secret {
            config.secret = Some(secret.clone());
        }
        if let Some(ref host) = opts.api_host {
            config.api_host = Some(host.clone());
        }

        config
    }

    fn resolve_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
        opts.format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_name)
            })
            .unwrap_or_default()
    }

    /// Credentials to authenticate with, failing if any half is missing.
    pub fn credentials(&self) -> Result<Credentials> {
        self.config.credentials()
    }

    /// Columns to display: `requested` when given, otherwise the configured default.
    pub fn columns<'a>(&'a self, requested: &'a [String]) -> &'a [String] {
        if requested.is_empty() {
            &self.config.preferences.columns
        } else {
            requested
        }
    }

    /// Config-file filters overlaid with the command-line ones.
    pub fn filters(&self, args: &SearchFilterArgs) -> SearchFilters {
        self.config.filters.clone().merge(&args.to_filters())
    }
}
