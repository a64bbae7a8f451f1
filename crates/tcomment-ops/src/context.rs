//! OpsContext - The main service for executing operations.
//!
//! The OpsContext holds configuration and provides methods for every
//! tComment operation. It can be used by the CLI or any other consumer.

use std::path::PathBuf;
use std::sync::Arc;

use tcomment_core::{Condition, DocumentedMethod};
use tcomment_translator::{
    build_condition, must_be_not_null, tokenize, ThrowsMode, TranslatedMethod, Translator,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::OpsResult;
use crate::evaluation::Stats;
use crate::input::{self, InputFile};
use crate::output;
use crate::requests::*;
use crate::responses::*;

/// The main operations context.
///
/// Cheap to clone and safe to share across async tasks.
#[derive(Debug, Clone, Default)]
pub struct OpsContext {
    /// Configuration for operations.
    pub config: Config,
}

impl OpsContext {
    /// Create a new OpsContext with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a new OpsContext from the on-disk configuration.
    pub fn default_config() -> OpsResult<Self> {
        Ok(Self::new(Config::load()?))
    }

    fn translator(&self, mode: Option<ThrowsMode>) -> Translator {
        let config = self.config.translator_config();
        Translator::new(match mode {
            Some(mode) => config.with_throws_mode(mode),
            None => config,
        })
    }

    fn workers(&self, workers: Option<usize>) -> usize {
        workers.unwrap_or(self.config.workers).max(1)
    }

    // =========================================================================
    // Translate
    // =========================================================================

    /// Translate every documented method found at the request's input path.
    pub async fn translate(&self, request: TranslateRequest) -> OpsResult<TranslateResponse> {
        let translator = self.translator(request.throws_mode);
        let (files, methods) = split_inputs(input::load(&request.input)?);

        let methods =
            translate_parallel(translator, methods, self.workers(request.workers)).await?;

        let output_path = if request.no_write {
            None
        } else {
            let path = request.output.clone().unwrap_or_else(|| {
                let input = request
                    .input
                    .canonicalize()
                    .unwrap_or_else(|_| request.input.clone());
                output::default_output_path(&self.config.output_dir, &input, request.format)
            });
            output::write(&path, &output::render(&methods, request.format)?)?;
            Some(path)
        };

        let response = TranslateResponse {
            methods,
            files,
            format: request.format,
            throws_mode: translator.config().throws_mode,
            output_path,
        };
        info!(
            methods = response.method_count(),
            tags = response.tag_count(),
            inferred = response.inferred_count(),
            mode = %response.throws_mode,
            "Translation complete"
        );
        Ok(response)
    }

    // =========================================================================
    // Evaluate
    // =========================================================================

    /// Translate the methods of a goal file and compare with its expectations.
    pub async fn evaluate(&self, request: EvaluateRequest) -> OpsResult<EvaluateResponse> {
        let translator = self.translator(request.throws_mode);
        let (files, expected) = split_inputs(input::load(&request.goal)?);

        let actual =
            translate_parallel(translator, expected.clone(), self.workers(request.workers))
                .await?;

        let mut stats = Stats::default();
        for (method, translated) in expected.iter().zip(&actual) {
            stats.record_method(method, &translated.specification);
        }

        info!(
            methods = expected.len(),
            compared = stats.outcomes.len(),
            precision = stats.precision(),
            recall = stats.recall(),
            "Evaluation complete"
        );
        Ok(EvaluateResponse {
            goal: request.goal,
            files,
            method_count: expected.len(),
            tag_count: expected.iter().map(DocumentedMethod::tag_count).sum(),
            throws_mode: translator.config().throws_mode,
            stats,
        })
    }

    // =========================================================================
    // Inspect
    // =========================================================================

    /// Run both heuristics on a single comment.
    pub fn inspect(&self, request: InspectRequest) -> InspectResponse {
        let translator = self.translator(request.throws_mode);
        let not_null = must_be_not_null(&request.comment);

        let precondition = request
            .parameter
            .as_ref()
            .filter(|_| not_null)
            .and_then(|name| request.parameters.iter().position(|p| p == name))
            .map(Condition::not_null);

        InspectResponse {
            words: tokenize(&request.comment),
            not_null,
            precondition,
            throws_condition: build_condition(
                &request.comment,
                &request.parameters,
                translator.config().throws_mode,
            ),
        }
    }
}

fn split_inputs(files: Vec<InputFile>) -> (Vec<PathBuf>, Vec<DocumentedMethod>) {
    let paths = files.iter().map(|f| f.path.clone()).collect();
    let methods = files.into_iter().flat_map(|f| f.methods).collect();
    (paths, methods)
}

/// Translate `methods` on up to `workers` blocking tasks.
///
/// The result is in input order and identical to [`Translator::translate`]
/// for any worker count.
pub async fn translate_parallel(
    translator: Translator,
    methods: Vec<DocumentedMethod>,
    workers: usize,
) -> OpsResult<Vec<TranslatedMethod>> {
    let total = methods.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    let chunk_size = total.div_ceil(workers.max(1));
    let methods = Arc::new(methods);

    let handles: Vec<_> = (0..total)
        .step_by(chunk_size)
        .map(|start| {
            let end = (start + chunk_size).min(total);
            let methods = Arc::clone(&methods);
            tokio::task::spawn_blocking(move || translator.translate(&methods[start..end]))
        })
        .collect();
    debug!(methods = total, tasks = handles.len(), "Dispatched translation");

    let mut translated = Vec::with_capacity(total);
    for handle in handles {
        translated.extend(handle.await?);
    }
    Ok(translated)
}
