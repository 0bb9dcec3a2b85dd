//! Prompt-specific error types.

use thiserror::Error;

/// Errors that can occur during prompt operations.
///
/// A prompt that is simply absent from the catalog is not an error at the
/// registry level; lookups return `None` / `false` for that case.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The requested prompt was not found (service level only).
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// The named domain has no loader in the table.
    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    /// A domain loader failed to produce its records.
    #[error("Failed to load domain '{domain}': {reason}")]
    DomainLoad { domain: String, reason: String },

    /// A loaded record is inconsistent with its loader.
    #[error("Invalid record in domain '{domain}': {reason}")]
    InvalidRecord { domain: String, reason: String },

    /// The difficulty string is not one of easy, medium, hard.
    #[error("Invalid difficulty '{0}': expected easy, medium or hard")]
    InvalidDifficulty(String),

    /// Required argument is missing.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    TemplateError(String),

    /// I/O failure while reading prompt data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed prompt data file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PromptError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn unknown_domain(domain: impl Into<String>) -> Self {
        Self::UnknownDomain(domain.into())
    }

    /// Create a new "domain load" error.
    pub fn domain_load(domain: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DomainLoad {
            domain: domain.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_record(domain: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            domain: domain.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(arg: impl Into<String>) -> Self {
        Self::MissingArgument(arg.into())
    }

    /// Create a new "template" error.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::TemplateError(msg.into())
    }
}
