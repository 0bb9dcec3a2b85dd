//! Error types and handling for the SAT prompt server.
//!
//! This module defines a unified error type that can represent errors from
//! the prompt catalog, the transport layer and configuration.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Invalid configuration value that was replaced by its default.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::PromptError;

    #[test]
    fn test_prompt_error_conversion() {
        let err: Error = PromptError::unknown_domain("Poetry").into();
        assert!(matches!(err, Error::Prompt(_)));
        assert_eq!(err.to_string(), "Prompt error: Unknown domain: Poetry");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("bad value");
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }
}
