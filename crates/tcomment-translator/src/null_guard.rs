//! Detection of "must not be null" preconditions in `@param` comments.

use crate::tokenizer::tokenize;

/// How many words on each side of `null` may carry the negation.
pub const NEGATION_WINDOW: usize = 3;

const NULL: &str = "null";
const NEGATIONS: [&str; 2] = ["not", "never"];

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

/// Check whether `comment` expresses a non-null precondition, e.g.
/// "must not be null" or "null is not permitted".
///
/// Each occurrence of `null` is checked independently: first the preceding
/// [`NEGATION_WINDOW`] words (nearest first), then the following ones. The
/// window stops at the edges of the comment.
pub fn must_be_not_null(comment: &str) -> bool {
    let words = tokenize(comment);
    words
        .iter()
        .enumerate()
        .filter(|(_, word)| *word == NULL)
        .any(|(index, _)| negated_near(&words, index))
}

fn negated_near(words: &[String], index: usize) -> bool {
    let before = words[index.saturating_sub(NEGATION_WINDOW)..index]
        .iter()
        .rev();
    let after = words[index + 1..]
        .iter()
        .take(NEGATION_WINDOW);
    before.chain(after).any(|word| is_negation(word))
}
