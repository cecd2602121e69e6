//! Error types for the rating engine
//!
//! The engine itself only ever fails with [`RatingError`]. Application code
//! (configuration loading, the CLI) uses the anyhow-based [`Result`] alias.

/// Result type alias for application-level code
pub type Result<T> = anyhow::Result<T>;

/// Errors surfaced by the rating engine and its configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl RatingError {
    pub(crate) fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }
}
