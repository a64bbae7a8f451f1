//! tComment Operations Layer
//!
//! This crate provides a typed API over the translator: loading documented
//! methods from JSON, translating them in parallel, writing specifications,
//! and measuring precision and recall against goal files.
//!
//! ## Architecture
//!
//! - **Requests**: Typed input DTOs for each operation
//! - **Responses**: Typed output DTOs with all relevant data
//! - **OpsContext**: The service that executes operations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tcomment_ops::{Config, OpsContext, TranslateRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tcomment_ops::OpsError> {
//!     let ctx = OpsContext::new(Config::load()?);
//!     let response = ctx.translate(TranslateRequest::new("methods.json")).await?;
//!     println!("Translated {} methods", response.method_count());
//!     Ok(())
//! }
//! ```

mod config;
mod context;
mod error;
mod evaluation;
mod input;
mod output;
mod randoop;
mod requests;
mod responses;

// Re-export public API
pub use config::{Config, CONFIG_KEYS};
pub use context::{translate_parallel, OpsContext};
pub use error::{OpsError, OpsResult};
pub use evaluation::{Counts, Stats, TagKind, TagOutcome, Verdict};
pub use input::{discover, load, load_file, InputFile};
pub use output::{default_output_path, render};
pub use randoop::{
    convert as to_randoop, resolve_names, RandoopGuard, RandoopIdentifiers, RandoopOperation,
    RandoopPost, RandoopPre, RandoopSpecification, RandoopThrows,
};
pub use requests::*;
pub use responses::*;

// Re-export the layers below for consumers that only depend on ops.
pub use tcomment_core;
pub use tcomment_translator::{ThrowsMode, TranslatedMethod, Translator, TranslatorConfig};
