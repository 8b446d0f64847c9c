//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by a tokenizer and clean, normalize or
//! drop tokens.
//!
//! # Available Filters
//!
//! - [`alphanumeric::AlphanumericFilter`] - Drops every non-alphanumeric character
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`length::MinLengthFilter`] - Removes tokens shorter than a minimum length
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Examples
//!
//! ```
//! use textmetrics::analysis::token_filter::Filter;
//! use textmetrics::analysis::token_filter::lowercase::LowercaseFilter;
//! use textmetrics::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! words:    Tokenizer → Alphanumeric → Lowercase → MinLength(3)
//! keywords: words → Stop → MinLength(4)
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod alphanumeric;
pub mod length;
pub mod lowercase;
pub mod stop;
