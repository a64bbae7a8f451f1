//! Word splitting shared by every heuristic.

/// Ordered lowercase words of a comment.
pub type Words = Vec<String>;

/// Split `text` into lowercase words.
///
/// Commas become spaces and the result is split on single spaces, so runs of
/// spaces produce empty words and an empty text yields one empty word. No
/// other punctuation is removed: `"null."` stays `"null."`.
pub fn tokenize(text: &str) -> Words {
    text.to_lowercase()
        .replace(',', " ")
        .split(' ')
        .map(str::to_string)
        .collect()
}

/// True if `word` occurs anywhere in `words`.
pub(crate) fn contains(words: &[String], word: &str) -> bool {
    words.iter().any(|w| w == word)
}
