//! Alphanumeric filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that keeps only ASCII letters and digits in each token.
///
/// Punctuation and symbols are dropped, not replaced, so `"can't"` becomes
/// `"cant"` and `"well-known"` becomes `"wellknown"`. Non-ASCII characters are
/// dropped as well. Tokens that clean to nothing are kept as empty tokens; a
/// length filter further down the pipeline removes them.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }

    /// Clean a single word.
    pub fn clean(word: &str) -> String {
        word.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
    }
}

impl Filter for AlphanumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let cleaned = Self::clean(&token.text);
            token.with_text(cleaned)
        })))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}
