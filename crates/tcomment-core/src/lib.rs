//! Core domain types shared across the tComment workspace.
//!
//! The types here describe two sides of a translation:
//!
//! - the *input* view of a documented method (its parameters, `@param` tags and
//!   `@throws` tags), as produced by whatever extracted the documentation, and
//! - the *output* specifications synthesized from that documentation
//!   ([`Guard`], [`PreSpecification`], [`ThrowsSpecification`],
//!   [`OperationSpecification`]).
//!
//! Conditions reference arguments by position (`args[0]`, `args[1]`, ...), never
//! by name.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Documented Methods (input)
// =============================================================================

/// A formal parameter of a documented method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Declared name, unique within the method.
    pub name: String,
    /// Declared type, e.g. `java.lang.String`.
    #[serde(default)]
    pub type_name: String,
}

impl Parameter {
    /// Create a parameter with the given name and type.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Exception type named by a `@throws` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExceptionType {
    /// Fully qualified name, e.g. `java.lang.NullPointerException`.
    pub qualified_name: String,
}

impl ExceptionType {
    /// Create an exception type from its qualified name.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }

    /// Name without the package prefix.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

impl fmt::Display for ExceptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

/// A `@param` tag: free text attached to one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamTag {
    /// Name of the parameter the tag documents.
    pub parameter: String,
    /// Comment text following the parameter name.
    pub comment: String,
    /// Expected condition. Only present in goal files used for evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl ParamTag {
    /// Create a tag without an expected condition.
    pub fn new(parameter: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            comment: comment.into(),
            condition: None,
        }
    }

    /// Attach an expected condition.
    pub fn expecting(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// A `@throws` (or `@exception`) tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowsTag {
    /// Exception the tag documents.
    pub exception: ExceptionType,
    /// Comment text following the exception type.
    pub comment: String,
    /// Expected condition. Only present in goal files used for evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl ThrowsTag {
    /// Create a tag without an expected condition.
    pub fn new(exception: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            exception: ExceptionType::new(exception),
            comment: comment.into(),
            condition: None,
        }
    }

    /// Attach an expected condition.
    pub fn expecting(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Read-only view of a method and its documentation tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentedMethod {
    /// Fully qualified name of the declaring class.
    pub class_name: String,
    /// Method name (`<init>` or the class simple name for constructors).
    pub name: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// `@param` tags in source order.
    #[serde(default)]
    pub param_tags: Vec<ParamTag>,
    /// `@throws` tags in source order.
    #[serde(default)]
    pub throws_tags: Vec<ThrowsTag>,
}

impl DocumentedMethod {
    /// Create a method with no parameters or tags.
    pub fn new(class_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, type_name));
        self
    }

    /// Append a `@param` tag.
    pub fn with_param_tag(mut self, tag: ParamTag) -> Self {
        self.param_tags.push(tag);
        self
    }

    /// Append a `@throws` tag.
    pub fn with_throws_tag(mut self, tag: ThrowsTag) -> Self {
        self.throws_tags.push(tag);
        self
    }

    /// Parameter names in declaration order.
    pub fn parameter_names(&self) -> Vec<String> {
        self.parameters.iter().map(|p| p.name.clone()).collect()
    }

    /// Name of the first parameter declared more than once, if any.
    pub fn duplicate_parameter(&self) -> Option<&str> {
        self.parameters.iter().enumerate().find_map(|(i, p)| {
            self.parameters[..i]
                .iter()
                .any(|q| q.name == p.name)
                .then_some(p.name.as_str())
        })
    }

    /// Total number of documentation tags.
    pub fn tag_count(&self) -> usize {
        self.param_tags.len() + self.throws_tags.len()
    }

    /// Human readable signature, e.g. `com.example.Foo.bar(int, java.lang.String)`.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self
            .parameters
            .iter()
            .map(|p| p.type_name.as_str())
            .collect();
        format!("{}.{}({})", self.class_name, self.name, types.join(", "))
    }
}

// =============================================================================
// Conditions
// =============================================================================

/// Separator between clauses of a throws disjunction.
pub const DISJUNCTION: &str = " || ";

/// Builders for the condition strings the translator emits.
pub struct Condition;

impl Condition {
    /// Precondition asserting that argument `index` is not null.
    pub fn not_null(index: usize) -> String {
        format!("(args[{index}]==null)==false")
    }

    /// Clause asserting that argument `index` is null.
    pub fn is_null(index: usize) -> String {
        format!("args[{index}]==null")
    }
}

/// Every `args[i]` index referenced by `condition`, in order of appearance.
pub fn arg_indices(condition: &str) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut rest = condition;
    while let Some(start) = rest.find("args[") {
        rest = &rest[start + "args[".len()..];
        if let Some(end) = rest.find(']') {
            if let Ok(index) = rest[..end].parse() {
                indices.push(index);
            }
            rest = &rest[end..];
        }
    }
    indices
}

// =============================================================================
// Specifications (output)
// =============================================================================

/// A synthesized condition paired with the text it came from.
///
/// An empty condition means nothing could be inferred and is treated as
/// "always true" by consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guard {
    /// Original comment text.
    pub description: String,
    /// Boolean expression over `args[i]`, or empty.
    pub condition: String,
}

impl Guard {
    /// Create a guard.
    pub fn new(description: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            condition: condition.into(),
        }
    }

    /// True when no condition was inferred.
    pub fn is_empty(&self) -> bool {
        self.condition.is_empty()
    }
}

/// Precondition derived from a `@param` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreSpecification {
    pub description: String,
    pub guard: Guard,
}

impl PreSpecification {
    pub fn new(description: impl Into<String>, guard: Guard) -> Self {
        Self {
            description: description.into(),
            guard,
        }
    }
}

/// Exception-trigger condition derived from a `@throws` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowsSpecification {
    pub description: String,
    pub guard: Guard,
    /// Qualified name of the exception expected when the guard holds.
    pub exception: String,
}

impl ThrowsSpecification {
    pub fn new(description: impl Into<String>, guard: Guard, exception: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            guard,
            exception: exception.into(),
        }
    }
}

/// Identifies the method a specification belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    pub class_name: String,
    pub name: String,
    pub parameter_types: Vec<String>,
}

impl Operation {
    /// Operation for a documented method.
    pub fn of(method: &DocumentedMethod) -> Self {
        Self {
            class_name: method.class_name.clone(),
            name: method.name.clone(),
            parameter_types: method
                .parameters
                .iter()
                .map(|p| p.type_name.clone())
                .collect(),
        }
    }
}

/// Names usable in conditions once `args[i]` has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifiers {
    pub parameters: Vec<String>,
    pub receiver_name: String,
    pub return_name: String,
}

/// Default name of the receiver object in resolved conditions.
pub const RECEIVER_NAME: &str = "receiver";

/// Default name of the return value in resolved conditions.
pub const RETURN_NAME: &str = "result";

impl Identifiers {
    /// Identifiers with the default receiver and return names.
    pub fn new(parameters: Vec<String>) -> Self {
        Self {
            parameters,
            receiver_name: RECEIVER_NAME.to_string(),
            return_name: RETURN_NAME.to_string(),
        }
    }
}

/// All specifications synthesized for one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSpecification {
    pub operation: Operation,
    pub identifiers: Identifiers,
    pub param_specifications: Vec<PreSpecification>,
    pub throws_specifications: Vec<ThrowsSpecification>,
}

impl OperationSpecification {
    /// Empty specification for `method`.
    pub fn new(method: &DocumentedMethod) -> Self {
        Self {
            operation: Operation::of(method),
            identifiers: Identifiers::new(method.parameter_names()),
            param_specifications: Vec::new(),
            throws_specifications: Vec::new(),
        }
    }

    pub fn add_param_specifications(&mut self, specs: impl IntoIterator<Item = PreSpecification>) {
        self.param_specifications.extend(specs);
    }

    pub fn add_throws_specifications(
        &mut self,
        specs: impl IntoIterator<Item = ThrowsSpecification>,
    ) {
        self.throws_specifications.extend(specs);
    }

    /// Every guard, preconditions first.
    pub fn guards(&self) -> impl Iterator<Item = &Guard> {
        self.param_specifications
            .iter()
            .map(|s| &s.guard)
            .chain(self.throws_specifications.iter().map(|s| &s.guard))
    }

    /// Number of guards with a non-empty condition.
    pub fn inferred_count(&self) -> usize {
        self.guards().filter(|g| !g.is_empty()).count()
    }
}
