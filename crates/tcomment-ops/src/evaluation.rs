//! Precision and recall of translations against expected conditions.
//!
//! A goal file is an ordinary input file whose tags carry the expected
//! `condition`. Tags are compared positionally with the specifications the
//! translator produced for the same method.

use std::fmt;

use serde::{Deserialize, Serialize};
use tcomment_core::{DocumentedMethod, OperationSpecification};

/// Which kind of tag an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Param,
    Throws,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Param => f.write_str("@param"),
            TagKind::Throws => f.write_str("@throws"),
        }
    }
}

/// Result of comparing one translated tag with its expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Same condition as expected (true positive).
    Correct,
    /// A different, non-empty condition (false positive).
    Wrong,
    /// No condition where one was expected (false negative).
    Missing,
}

/// Comparison detail for one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOutcome {
    pub signature: String,
    pub kind: TagKind,
    pub comment: String,
    pub expected: String,
    pub actual: String,
    pub verdict: Verdict,
}

/// Counters for one tag kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub correct: usize,
    pub wrong: usize,
    pub missing: usize,
}

impl Counts {
    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => self.correct += 1,
            Verdict::Wrong => self.wrong += 1,
            Verdict::Missing => self.missing += 1,
        }
    }

    /// Number of tags with an expected condition.
    pub fn total(&self) -> usize {
        self.correct + self.wrong + self.missing
    }

    /// Correct over produced translations; 1.0 when nothing was produced.
    pub fn precision(&self) -> f64 {
        ratio(self.correct, self.correct + self.wrong)
    }

    /// Correct over expected conditions; 1.0 when nothing was expected.
    pub fn recall(&self) -> f64 {
        ratio(self.correct, self.total())
    }
}

impl std::ops::Add for Counts {
    type Output = Counts;

    fn add(self, other: Counts) -> Counts {
        Counts {
            correct: self.correct + other.correct,
            wrong: self.wrong + other.wrong,
            missing: self.missing + other.missing,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        1.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Aggregated evaluation statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub param: Counts,
    pub throws: Counts,
    pub outcomes: Vec<TagOutcome>,
}

impl Stats {
    /// Counters for one tag kind.
    pub fn counts(&self, kind: TagKind) -> Counts {
        match kind {
            TagKind::Param => self.param,
            TagKind::Throws => self.throws,
        }
    }

    /// Counters over both tag kinds.
    pub fn overall(&self) -> Counts {
        self.param + self.throws
    }

    pub fn precision(&self) -> f64 {
        self.overall().precision()
    }

    pub fn recall(&self) -> f64 {
        self.overall().recall()
    }

    /// Compare one method's expected tags with its specification.
    pub fn record_method(&mut self, expected: &DocumentedMethod, actual: &OperationSpecification) {
        let signature = expected.signature();

        let params = expected
            .param_tags
            .iter()
            .zip(&actual.param_specifications)
            .map(|(tag, spec)| (&tag.comment, tag.condition.as_deref(), &spec.guard.condition));
        for (comment, want, got) in params {
            self.record(&signature, TagKind::Param, comment, want, got);
        }

        let throws = expected
            .throws_tags
            .iter()
            .zip(&actual.throws_specifications)
            .map(|(tag, spec)| (&tag.comment, tag.condition.as_deref(), &spec.guard.condition));
        for (comment, want, got) in throws {
            self.record(&signature, TagKind::Throws, comment, want, got);
        }
    }

    fn record(
        &mut self,
        signature: &str,
        kind: TagKind,
        comment: &str,
        expected: Option<&str>,
        actual: &str,
    ) {
        let expected = strip_spaces(expected.unwrap_or_default());
        if expected.is_empty() {
            return;
        }
        let actual = strip_spaces(actual);
        let verdict = judge(&expected, &actual);

        match kind {
            TagKind::Param => self.param.record(verdict),
            TagKind::Throws => self.throws.record(verdict),
        }
        self.outcomes.push(TagOutcome {
            signature: signature.to_string(),
            kind,
            comment: comment.to_string(),
            expected,
            actual,
            verdict,
        });
    }
}

fn strip_spaces(condition: &str) -> String {
    condition.replace(' ', "")
}

fn judge(expected: &str, actual: &str) -> Verdict {
    if expected == actual {
        Verdict::Correct
    } else if actual.is_empty() {
        Verdict::Missing
    } else {
        Verdict::Wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcomment_core::{ParamTag, ThrowsTag};
    use tcomment_translator::Translator;

    const NPE: &str = "java.lang.NullPointerException";

    fn goal() -> DocumentedMethod {
        DocumentedMethod::new("com.example.Map", "put")
            .with_parameter("key", "java.lang.Object")
            .with_parameter("value", "java.lang.Object")
            // correct
            .with_param_tag(
                ParamTag::new("key", "the key, must not be null")
                    .expecting("(args[0]==null) == false"),
            )
            // missing: "non-null" is not a trigger word
            .with_param_tag(
                ParamTag::new("value", "a non-null value").expecting("(args[1]==null)==false"),
            )
            // wrong: the conjunction is beyond the heuristic
            .with_throws_tag(
                ThrowsTag::new(NPE, "if key is null, or value is null and key is absent")
                    .expecting("args[0]==null || args[1]==null && args[0]==null"),
            )
            // ignored: no expectation
            .with_throws_tag(ThrowsTag::new(NPE, "if value is null"))
    }

    #[test]
    fn test_ratio_conventions() {
        let empty = Counts::default();
        assert_eq!(empty.precision(), 1.0);
        assert_eq!(empty.recall(), 1.0);

        let counts = Counts {
            correct: 1,
            wrong: 1,
            missing: 2,
        };
        assert_eq!(counts.precision(), 0.5);
        assert_eq!(counts.recall(), 0.25);
    }

    #[test]
    fn test_record_method() {
        let method = goal();
        let spec = Translator::default().translate_method(&method);

        let mut stats = Stats::default();
        stats.record_method(&method, &spec);

        assert_eq!(
            stats.param,
            Counts {
                correct: 1,
                wrong: 0,
                missing: 1
            }
        );
        assert_eq!(
            stats.throws,
            Counts {
                correct: 0,
                wrong: 1,
                missing: 0
            }
        );
        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.outcomes[0].verdict, Verdict::Correct);
        assert_eq!(stats.outcomes[0].expected, "(args[0]==null)==false");
        assert_eq!(stats.outcomes[1].verdict, Verdict::Missing);
        assert_eq!(stats.outcomes[2].verdict, Verdict::Wrong);
        assert_eq!(stats.outcomes[2].kind, TagKind::Throws);

        assert_eq!(stats.overall().total(), 3);
        assert_eq!(stats.precision(), 0.5);
        assert!((stats.recall() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_expectation_is_ignored() {
        let method = DocumentedMethod::new("A", "f")
            .with_parameter("x", "int")
            .with_param_tag(ParamTag::new("x", "must not be null").expecting(""));
        let spec = Translator::default().translate_method(&method);

        let mut stats = Stats::default();
        stats.record_method(&method, &spec);
        assert!(stats.outcomes.is_empty());
        assert_eq!(stats.counts(TagKind::Param), Counts::default());
    }
}
