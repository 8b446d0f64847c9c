//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline: they split raw text
//! into tokens, which token filters then clean and normalize.
//!
//! # Examples
//!
//! ```
//! use textmetrics::analysis::tokenizer::Tokenizer;
//! use textmetrics::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a configured pipeline can be shared
/// between threads without coordination.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
