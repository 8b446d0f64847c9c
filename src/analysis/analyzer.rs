//! Analyzer implementations that combine tokenizers and filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Scorers
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! - [`WordAnalyzer`](word::WordAnalyzer) - The normalized word pipeline every scorer consumes
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve concurrent
/// callers; analyzers hold no per-call state.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod pipeline;
pub mod word;
