//! Response DTOs for operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tcomment_translator::{ThrowsMode, TranslatedMethod};

use crate::evaluation::Stats;
use crate::requests::OutputFormat;

/// Response from a translate operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Translated methods in input order.
    pub methods: Vec<TranslatedMethod>,

    /// Input files that were read.
    pub files: Vec<PathBuf>,

    pub format: OutputFormat,

    pub throws_mode: ThrowsMode,

    /// Where the output was written, unless writing was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
}

impl TranslateResponse {
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Number of tags seen across all methods.
    pub fn tag_count(&self) -> usize {
        self.methods
            .iter()
            .map(|m| {
                m.specification.param_specifications.len()
                    + m.specification.throws_specifications.len()
            })
            .sum()
    }

    /// Number of tags that received a non-empty condition.
    pub fn inferred_count(&self) -> usize {
        self.methods
            .iter()
            .map(|m| m.specification.inferred_count())
            .sum()
    }
}

/// Response from an evaluate operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub goal: PathBuf,
    pub files: Vec<PathBuf>,
    pub method_count: usize,
    /// Tags in the goal file, including those without an expectation.
    pub tag_count: usize,
    pub throws_mode: ThrowsMode,
    pub stats: Stats,
}

/// Response from an inspect operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectResponse {
    /// Words the comment was split into.
    pub words: Vec<String>,

    /// Whether the comment reads as a non-null precondition.
    pub not_null: bool,

    /// Precondition for the documented parameter, when one was named and
    /// the comment reads as non-null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precondition: Option<String>,

    /// Condition the comment yields when read as a `@throws` comment.
    pub throws_condition: String,
}
