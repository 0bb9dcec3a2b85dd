//! Configuration management for the SAT prompt server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::Error;

/// Main configuration structure for the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Prompt catalog configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the prompt catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// Directory of `<domain>.json` files that add to or override the
    /// compiled-in domains.
    pub data_dir: Option<PathBuf>,

    /// Fail startup when any domain loader fails instead of serving the
    /// domains that did load.
    pub strict: bool,

    /// Domains to load ahead of the first lookup.
    pub preload: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "sat-prompt-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `SAT_`.
    /// For example: `SAT_SERVER_NAME`, `SAT_LOG_LEVEL`, `SAT_PROMPTS_DIR`.
    ///
    /// Invalid values fall back to their defaults. Each fallback is returned
    /// as an [`Error::Config`] so the caller can report it once logging is up.
    pub fn from_env() -> (Self, Vec<Error>) {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        let mut issues = Vec::new();

        if let Ok(name) = std::env::var("SAT_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("SAT_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(dir) = std::env::var("SAT_PROMPTS_DIR") {
            let dir = PathBuf::from(dir);
            if dir.is_dir() {
                config.prompts.data_dir = Some(dir);
            } else {
                issues.push(Error::config(format!(
                    "SAT_PROMPTS_DIR {:?} is not a directory - ignoring",
                    dir
                )));
            }
        }

        if let Ok(strict) = std::env::var("SAT_PROMPTS_STRICT") {
            match strict.trim().parse::<bool>() {
                Ok(strict) => config.prompts.strict = strict,
                Err(_) => issues.push(Error::config(format!(
                    "Invalid SAT_PROMPTS_STRICT value '{}' - expected true or false",
                    strict
                ))),
            }
        }

        if let Ok(preload) = std::env::var("SAT_PROMPTS_PRELOAD") {
            config.prompts.preload = preload
                .split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect();
        }

        (config, issues)
    }
}
