//! Condition synthesis for `@throws` comments.

use tcomment_core::{Condition, DISJUNCTION};

use crate::config::ThrowsMode;
use crate::tokenizer::{contains, tokenize};

/// Build the condition under which the exception documented by `comment` is
/// thrown.
///
/// The comment must mention `null`. Each parameter name that appears as a
/// word contributes `args[i]==null`, where `i` is its position in
/// `parameter_names`. Clauses follow the order in which the names appear in
/// the comment, each name at most once, joined with ` || `.
///
/// Words are lowercased, so a parameter name containing uppercase letters is
/// never matched.
///
/// Returns an empty string when nothing can be inferred.
pub fn build_condition(comment: &str, parameter_names: &[String], mode: ThrowsMode) -> String {
    let words = tokenize(comment);
    if !contains(&words, "null") {
        return String::new();
    }

    let single = mode == ThrowsMode::Gated
        && !contains(&words, "or")
        && !contains(&words, "either");

    let mut seen: Vec<&str> = Vec::new();
    let mut clauses: Vec<String> = Vec::new();
    for word in &words {
        if seen.contains(&word.as_str()) {
            continue;
        }
        let Some(index) = parameter_names.iter().position(|name| name == word) else {
            continue;
        };
        seen.push(word.as_str());
        clauses.push(Condition::is_null(index));
        if single {
            break;
        }
    }
    clauses.join(DISJUNCTION)
}
