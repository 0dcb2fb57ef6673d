//! Application error types.

use thiserror::Error;

/// Application-level errors for the graph viewer.
#[derive(Error, Debug)]
pub enum AppError {
    // Render configuration errors
    #[error("Invalid render mode: {0}")]
    InvalidMode(String),

    #[error("Invalid marker symbol: {0}")]
    InvalidSymbol(String),

    // Input errors
    #[error("Malformed node list in {source_name}: {source}")]
    Input {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Whether the caller should treat this as "nothing to show" rather than a failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AppError::InvalidMode(_))
    }
}
