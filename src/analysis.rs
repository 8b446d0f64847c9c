//! Text analysis module for textmetrics.
//!
//! This module turns raw text into the normalized word sequence that every
//! scorer consumes: whitespace splitting, punctuation removal, lower-casing
//! and a minimum length, arranged as a tokenizer followed by token filters.

use std::sync::LazyLock;

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

use crate::analysis::analyzer::word::WordAnalyzer;

static WORD_ANALYZER: LazyLock<WordAnalyzer> = LazyLock::new(WordAnalyzer::new);

/// Split `text` into normalized words.
///
/// ```
/// use textmetrics::analysis::tokenize;
///
/// assert_eq!(tokenize("Hello, World!!"), vec!["hello", "world"]);
/// assert!(tokenize("a an if").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_ANALYZER
        .words(text)
        .into_iter()
        .map(|token| token.text)
        .collect()
}
