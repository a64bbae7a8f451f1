//! Translator configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TranslatorError, TranslatorResult};

/// How a `@throws` comment naming several parameters is translated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThrowsMode {
    /// Every named parameter contributes a clause.
    #[default]
    All,
    /// Only the first named parameter contributes, unless the comment also
    /// says `or` or `either`.
    Gated,
}

impl ThrowsMode {
    /// Name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThrowsMode::All => "all",
            ThrowsMode::Gated => "gated",
        }
    }
}

impl fmt::Display for ThrowsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThrowsMode {
    type Err = TranslatorError;

    fn from_str(s: &str) -> TranslatorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "all-matches" | "permissive" => Ok(Self::All),
            "gated" | "legacy" => Ok(Self::Gated),
            _ => Err(TranslatorError::UnknownThrowsMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Settings for a [`crate::Translator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub throws_mode: ThrowsMode,
}

impl TranslatorConfig {
    pub fn with_throws_mode(mut self, mode: ThrowsMode) -> Self {
        self.throws_mode = mode;
        self
    }
}
