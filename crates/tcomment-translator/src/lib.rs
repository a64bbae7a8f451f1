//! Heuristic translation of documentation comments into executable conditions.
//!
//! This crate implements the tComment algorithm. It does not parse sentences.
//! It tokenizes comment text and looks for a handful of trigger words (`null`,
//! `not`, `never`, `or`, `either`) plus literal parameter names.
//!
//! ## Pipeline
//!
//! ```text
//! comment ──tokenize──▶ words ──┬─▶ must_be_not_null ──▶ (args[i]==null)==false
//!                               └─▶ build_condition  ──▶ args[i]==null || args[j]==null
//! ```
//!
//! - [`tokenize`]: lowercase, commas to spaces, split on single spaces
//! - [`must_be_not_null`]: looks for `not`/`never` within [`NEGATION_WINDOW`]
//!   words of each `null`
//! - [`build_condition`]: blames the parameters named in a `@throws` comment
//!   that mentions `null`
//! - [`Translator`]: applies both to every tag of every method
//!
//! Every function here is pure. Translating the same input twice yields the
//! same output, and methods can be translated in any order or in parallel.

mod config;
mod error;
mod null_guard;
mod throws;
mod tokenizer;
mod translator;

pub use config::{ThrowsMode, TranslatorConfig};
pub use error::{TranslatorError, TranslatorResult};
pub use null_guard::{must_be_not_null, NEGATION_WINDOW};
pub use throws::build_condition;
pub use tokenizer::{tokenize, Words};
pub use translator::{TranslatedMethod, Translator};
