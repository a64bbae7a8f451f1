//! Error types for the operations layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors that can occur during operations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// The input path does not exist.
    #[error("No input found at {path}")]
    InputNotFound { path: PathBuf },

    /// A directory input contained no JSON files.
    #[error("No JSON files found under {path}")]
    NoInputFiles { path: PathBuf },

    /// A method violates an invariant of the input format.
    #[error("Invalid method {signature} in {path}: {message}")]
    InvalidMethod {
        path: PathBuf,
        signature: String,
        message: String,
    },

    /// An input file could not be parsed.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A translation worker panicked or was cancelled.
    #[error("Translation worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OpsError {
    /// Create an invalid method error.
    pub fn invalid_method(
        path: impl Into<PathBuf>,
        signature: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidMethod {
            path: path.into(),
            signature: signature.into(),
            message: message.into(),
        }
    }
}

impl From<tcomment_translator::TranslatorError> for OpsError {
    fn from(err: tcomment_translator::TranslatorError) -> Self {
        OpsError::Config(err.to_string())
    }
}
