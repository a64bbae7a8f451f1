//! Applies the heuristics to every tag of a documented method.

use serde::{Deserialize, Serialize};
use tcomment_core::{
    Condition, DocumentedMethod, Guard, OperationSpecification, ParamTag, PreSpecification,
    ThrowsSpecification, ThrowsTag,
};
use tracing::{debug, warn};

use crate::config::TranslatorConfig;
use crate::null_guard::must_be_not_null;
use crate::throws::build_condition;

/// The specification synthesized for one method, keyed by its signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedMethod {
    pub signature: String,
    pub specification: OperationSpecification,
}

/// Translates documented methods into operation specifications.
///
/// Holds only configuration, so a single translator can be shared across
/// threads and reused for any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate every method, preserving input order.
    pub fn translate(&self, methods: &[DocumentedMethod]) -> Vec<TranslatedMethod> {
        let translated: Vec<TranslatedMethod> = methods
            .iter()
            .map(|method| TranslatedMethod {
                signature: method.signature(),
                specification: self.translate_method(method),
            })
            .collect();

        debug!(
            methods = translated.len(),
            inferred = translated
                .iter()
                .map(|t| t.specification.inferred_count())
                .sum::<usize>(),
            mode = %self.config.throws_mode,
            "Translated methods"
        );
        translated
    }

    /// Translate the tags of a single method.
    pub fn translate_method(&self, method: &DocumentedMethod) -> OperationSpecification {
        let parameter_names = method.parameter_names();

        let mut spec = OperationSpecification::new(method);
        spec.add_param_specifications(
            method
                .param_tags
                .iter()
                .map(|tag| self.translate_param_tag(tag, &parameter_names)),
        );
        spec.add_throws_specifications(
            method
                .throws_tags
                .iter()
                .map(|tag| self.translate_throws_tag(tag, &parameter_names)),
        );

        debug!(
            method = %method.signature(),
            params = spec.param_specifications.len(),
            throws = spec.throws_specifications.len(),
            inferred = spec.inferred_count(),
            "Translated method"
        );
        spec
    }

    /// Translate a `@param` comment into a non-null precondition.
    ///
    /// A tag naming a parameter that the method does not declare gets an
    /// empty condition.
    pub fn translate_param_tag(&self, tag: &ParamTag, parameter_names: &[String]) -> PreSpecification {
        let condition = if must_be_not_null(&tag.comment) {
            match parameter_names.iter().position(|name| *name == tag.parameter) {
                Some(index) => Condition::not_null(index),
                None => {
                    warn!(
                        parameter = %tag.parameter,
                        "@param tag names an undeclared parameter"
                    );
                    String::new()
                }
            }
        } else {
            String::new()
        };

        PreSpecification::new(tag.comment.clone(), Guard::new(tag.comment.clone(), condition))
    }

    /// Translate a `@throws` comment into the condition that triggers it.
    pub fn translate_throws_tag(
        &self,
        tag: &ThrowsTag,
        parameter_names: &[String],
    ) -> ThrowsSpecification {
        let condition = build_condition(&tag.comment, parameter_names, self.config.throws_mode);
        ThrowsSpecification::new(
            tag.comment.clone(),
            Guard::new(tag.comment.clone(), condition),
            tag.exception.qualified_name.clone(),
        )
    }
}
