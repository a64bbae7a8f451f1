//! Request DTOs for operations.
//!
//! Each request carries everything an operation needs. Optional fields fall
//! back to the [`crate::Config`] of the executing context.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tcomment_translator::ThrowsMode;

use crate::error::OpsError;

/// Shape of the translation output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every specification, positional conditions, empty ones included.
    #[default]
    Specs,
    /// Randoop operation specifications with resolved parameter names.
    Randoop,
}

impl OutputFormat {
    /// Suffix appended to the input stem for default output file names.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            OutputFormat::Specs => "specs",
            OutputFormat::Randoop => "randoop",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}

impl FromStr for OutputFormat {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "specs" | "json" => Ok(Self::Specs),
            "randoop" => Ok(Self::Randoop),
            _ => Err(OpsError::Config(format!(
                "Unknown format: {}. Use 'specs' or 'randoop'",
                s
            ))),
        }
    }
}

/// Request to translate the documented methods found at a path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// JSON file or directory of JSON files.
    pub input: PathBuf,

    /// Where to write the result. Defaults to the configured output dir.
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub format: OutputFormat,

    /// Overrides the configured throws mode.
    #[serde(default)]
    pub throws_mode: Option<ThrowsMode>,

    /// Overrides the configured worker count.
    #[serde(default)]
    pub workers: Option<usize>,

    /// Translate without writing anything to disk.
    #[serde(default)]
    pub no_write: bool,
}

impl TranslateRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            format: OutputFormat::default(),
            throws_mode: None,
            workers: None,
            no_write: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_throws_mode(mut self, mode: ThrowsMode) -> Self {
        self.throws_mode = Some(mode);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Skip writing the output file.
    pub fn without_write(mut self) -> Self {
        self.no_write = true;
        self
    }
}

/// Request to measure translations against a goal file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// Goal file or directory whose tags carry expected conditions.
    pub goal: PathBuf,

    #[serde(default)]
    pub throws_mode: Option<ThrowsMode>,

    #[serde(default)]
    pub workers: Option<usize>,
}

impl EvaluateRequest {
    pub fn new(goal: impl Into<PathBuf>) -> Self {
        Self {
            goal: goal.into(),
            throws_mode: None,
            workers: None,
        }
    }

    pub fn with_throws_mode(mut self, mode: ThrowsMode) -> Self {
        self.throws_mode = Some(mode);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
}

/// Request to run the heuristics on a single comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectRequest {
    pub comment: String,

    /// Parameter names of the enclosing method, in declaration order.
    #[serde(default)]
    pub parameters: Vec<String>,

    /// Parameter the comment documents, when it is a `@param` comment.
    #[serde(default)]
    pub parameter: Option<String>,

    #[serde(default)]
    pub throws_mode: Option<ThrowsMode>,
}

impl InspectRequest {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            ..Default::default()
        }
    }

    pub fn with_parameters(
        mut self,
        parameters: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.parameters = parameters.into_iter().map(|p| p.into()).collect();
        self
    }

    pub fn for_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    pub fn with_throws_mode(mut self, mode: ThrowsMode) -> Self {
        self.throws_mode = Some(mode);
        self
    }
}
