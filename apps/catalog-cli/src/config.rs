//! # Configuration
//!
//! Settings for one catalog session.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--seed`, `--currency`, `--format`)
//! 2. Environment variables (`CATALOG_*`)
//! 3. Defaults (this file)
//!
//! Read-only once the session starts.

use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::display::OutputFormat;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Currency symbol printed before prices
    pub currency_symbol: String,

    /// Preload the two sample products at startup
    pub seed: bool,

    /// Output format for list / show
    pub format: OutputFormat,
}

impl Default for CatalogConfig {
    /// ## Default Values
    /// - Currency: "R$"
    /// - Seed: off
    /// - Format: text
    fn default() -> Self {
        CatalogConfig {
            currency_symbol: "R$".to_string(),
            seed: false,
            format: OutputFormat::Text,
        }
    }
}

impl CatalogConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CATALOG_CURRENCY`: currency symbol
    /// - `CATALOG_SEED`: `1`/`true`/`yes` or `0`/`false`/`no`
    /// - `CATALOG_FORMAT`: `text` or `json`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CatalogConfig::default();

        if let Some(symbol) = lookup("CATALOG_CURRENCY") {
            config.currency_symbol = symbol;
        }

        if let Some(seed) = lookup("CATALOG_SEED") {
            config.seed = parse_flag(&seed).ok_or(ConfigError::InvalidValue {
                key: "CATALOG_SEED",
                value: seed,
            })?;
        }

        if let Some(format) = lookup("CATALOG_FORMAT") {
            config.format = format
                .parse::<OutputFormat>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "CATALOG_FORMAT",
                    value: format,
                })?;
        }

        Ok(config)
    }

    /// Overrides fields with whatever was passed on the command line.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if args.seed {
            self.seed = true;
        }
        if let Some(symbol) = &args.currency {
            self.currency_symbol = symbol.clone();
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}
