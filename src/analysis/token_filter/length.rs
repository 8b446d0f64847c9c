//! Minimum length filter implementation.

use super::Filter;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Shortest token the word analyzer emits.
pub const MIN_WORD_LEN: usize = 3;

/// Shortest token counted as a keyword candidate.
pub const MIN_KEYWORD_LEN: usize = 4;

/// A filter that removes tokens shorter than a minimum length.
///
/// Length is measured in bytes, which equals characters once the
/// alphanumeric filter has run.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_len: usize,
}

impl MinLengthFilter {
    /// Create a new filter that keeps tokens of at least `min_len` bytes.
    pub fn new(min_len: usize) -> Self {
        MinLengthFilter { min_len }
    }

    /// Get the minimum length.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Whether a word of this text would pass the filter.
    pub fn accepts(&self, text: &str) -> bool {
        text.len() >= self.min_len
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        Self::new(MIN_WORD_LEN)
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filter = self.clone();
        Ok(Box::new(tokens.filter(move |token| filter.accepts(&token.text))))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
