//! ASCII case folding.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that folds ASCII letters to lowercase.
///
/// Lexicon and stop-word keys are ASCII, and the alphanumeric filter has
/// already removed everything else, so no Unicode case mapping is needed.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            token.text.make_ascii_lowercase();
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
