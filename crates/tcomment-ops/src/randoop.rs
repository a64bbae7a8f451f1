//! Conversion to Randoop's operation specification format.
//!
//! Randoop expects conditions written over parameter names rather than
//! positional `args[i]` references, and has no use for empty conditions.

use serde::{Deserialize, Serialize};
use tcomment_core::{ExceptionType, OperationSpecification};

/// Method identity in Randoop's format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandoopOperation {
    pub classname: String,
    pub name: String,
    pub parameter_types: Vec<String>,
}

/// Names Randoop binds in conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandoopIdentifiers {
    pub parameters: Vec<String>,
    pub receiver_name: String,
    pub return_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandoopGuard {
    pub description: String,
    pub condition_source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandoopPre {
    pub description: String,
    pub guard: RandoopGuard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandoopThrows {
    pub description: String,
    pub guard: RandoopGuard,
    pub exception: String,
}

/// Postconditions are never inferred; the list is kept for format parity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandoopPost {
    pub description: String,
    pub guard: RandoopGuard,
    pub property: RandoopGuard,
}

/// One operation specification as Randoop reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandoopSpecification {
    pub operation: RandoopOperation,
    pub identifiers: RandoopIdentifiers,
    pub throws: Vec<RandoopThrows>,
    pub post: Vec<RandoopPost>,
    pub pre: Vec<RandoopPre>,
}

impl RandoopSpecification {
    /// Number of specifications that survived the conversion.
    pub fn len(&self) -> usize {
        self.pre.len() + self.throws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Replace each `args[i]` in `condition` with the i-th parameter name.
pub fn resolve_names(condition: &str, parameters: &[String]) -> String {
    parameters
        .iter()
        .enumerate()
        .fold(condition.to_string(), |resolved, (index, name)| {
            resolved.replace(&format!("args[{}]", index), name)
        })
}

/// Convert a specification, dropping guards with empty conditions.
pub fn convert(spec: &OperationSpecification) -> RandoopSpecification {
    let parameters = &spec.identifiers.parameters;

    let pre = spec
        .param_specifications
        .iter()
        .filter(|s| !s.guard.is_empty())
        .map(|s| RandoopPre {
            description: s.description.clone(),
            guard: RandoopGuard {
                description: s.guard.description.clone(),
                condition_source: resolve_names(&s.guard.condition, parameters),
            },
        })
        .collect();

    let throws = spec
        .throws_specifications
        .iter()
        .filter(|s| !s.guard.is_empty())
        .map(|s| RandoopThrows {
            description: format!(
                "throws {} {}",
                ExceptionType::new(s.exception.as_str()).simple_name(),
                s.description
            ),
            guard: RandoopGuard {
                description: s.guard.description.clone(),
                condition_source: resolve_names(&s.guard.condition, parameters),
            },
            exception: s.exception.clone(),
        })
        .collect();

    RandoopSpecification {
        operation: RandoopOperation {
            classname: spec.operation.class_name.clone(),
            name: spec.operation.name.clone(),
            parameter_types: spec.operation.parameter_types.clone(),
        },
        identifiers: RandoopIdentifiers {
            parameters: parameters.clone(),
            receiver_name: spec.identifiers.receiver_name.clone(),
            return_name: spec.identifiers.return_name.clone(),
        },
        throws,
        post: Vec::new(),
        pre,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcomment_core::{DocumentedMethod, ParamTag, ThrowsTag};
    use tcomment_translator::Translator;

    fn spec() -> OperationSpecification {
        let method = DocumentedMethod::new("com.example.Map", "put")
            .with_parameter("key", "java.lang.Object")
            .with_parameter("value", "java.lang.Object")
            .with_param_tag(ParamTag::new("key", "the key, not null"))
            .with_param_tag(ParamTag::new("value", "the value"))
            .with_throws_tag(ThrowsTag::new(
                "java.lang.NullPointerException",
                "if key or value is null",
            ))
            .with_throws_tag(ThrowsTag::new("java.lang.IllegalStateException", "if full"));
        Translator::default().translate_method(&method)
    }

    #[test]
    fn test_resolve_names() {
        let params = vec!["key".to_string(), "value".to_string()];
        assert_eq!(
            resolve_names("args[0]==null || args[1]==null", &params),
            "key==null || value==null"
        );
        assert_eq!(resolve_names("(args[1]==null)==false", &params), "(value==null)==false");
        assert_eq!(resolve_names("", &params), "");
    }

    #[test]
    fn test_resolve_names_does_not_clobber_longer_indices() {
        let params: Vec<String> = (0..11).map(|i| format!("p{}", i)).collect();
        assert_eq!(resolve_names("args[10]==null", &params), "p10==null");
    }

    #[test]
    fn test_convert_drops_empty_conditions() {
        let randoop = convert(&spec());
        assert_eq!(randoop.pre.len(), 1);
        assert_eq!(randoop.throws.len(), 1);
        assert!(randoop.post.is_empty());
        assert_eq!(randoop.len(), 2);
        assert!(!randoop.is_empty());

        assert_eq!(randoop.pre[0].description, "the key, not null");
        assert_eq!(randoop.pre[0].guard.condition_source, "(key==null)==false");
        assert_eq!(
            randoop.throws[0].description,
            "throws NullPointerException if key or value is null"
        );
        assert_eq!(
            randoop.throws[0].guard.condition_source,
            "key==null || value==null"
        );
        assert_eq!(randoop.throws[0].exception, "java.lang.NullPointerException");
    }

    #[test]
    fn test_pre_description_is_raw_comment() {
        let method = DocumentedMethod::new("A", "f")
            .with_parameter("x", "java.lang.Object")
            .with_param_tag(ParamTag::new("x", "must not be null"));
        let randoop = convert(&Translator::default().translate_method(&method));

        assert_eq!(randoop.pre[0].description, "must not be null");
        assert_eq!(randoop.pre[0].guard.description, "must not be null");
        assert_eq!(randoop.pre[0].guard.condition_source, "(x==null)==false");
    }

    #[test]
    fn test_convert_json_field_names() {
        let value = serde_json::to_value(convert(&spec())).unwrap();
        assert_eq!(value["operation"]["classname"], "com.example.Map");
        assert_eq!(value["operation"]["parameterTypes"][1], "java.lang.Object");
        assert_eq!(value["identifiers"]["receiverName"], "receiver");
        assert_eq!(value["identifiers"]["returnName"], "result");
        assert_eq!(value["pre"][0]["guard"]["conditionSource"], "(key==null)==false");
    }
}
