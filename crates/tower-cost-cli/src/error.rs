//! Error types for the tower-eval binary.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a CLI invocation with a non-zero exit status.
#[derive(Debug, Error)]
pub enum Error {
    /// A height argument or stdin token is not an integer
    #[error("invalid height {0:?}")]
    InvalidHeight(String),

    /// Unrecognized flag
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Unrecognized output format
    #[error("invalid output format {0:?} (expected text or json)")]
    InvalidFormat(String),

    /// Evaluation error
    #[error("evaluation failed: {0}")]
    Cost(#[from] tower_cost::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
