//! Error types for the translator.
//!
//! Translation itself never fails; these errors only come from parsing
//! configuration values.

use thiserror::Error;

/// Result type alias for translator operations.
pub type TranslatorResult<T> = Result<T, TranslatorError>;

/// Errors raised while configuring a translator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslatorError {
    /// The throws mode name is not recognized.
    #[error("unknown throws mode: {value} (expected `all` or `gated`)")]
    UnknownThrowsMode { value: String },
}
