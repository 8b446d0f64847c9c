//! Word analyzer: the normalized token sequence every scorer consumes.
//!
//! # Pipeline
//!
//! 1. WhitespaceTokenizer (C whitespace classes)
//! 2. AlphanumericFilter (punctuation and symbols dropped, not replaced)
//! 3. LowercaseFilter
//! 4. MinLengthFilter (tokens of 3 or more characters)
//!
//! # Examples
//!
//! ```
//! use textmetrics::analysis::analyzer::Analyzer;
//! use textmetrics::analysis::analyzer::word::WordAnalyzer;
//!
//! let analyzer = WordAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Hello, World!!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use log::warn;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::alphanumeric::AlphanumericFilter;
use crate::analysis::token_filter::length::{MIN_WORD_LEN, MinLengthFilter};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// The analyzer that turns raw text into normalized words.
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
}

impl WordAnalyzer {
    /// Create a new word analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(AlphanumericFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(MinLengthFilter::new(MIN_WORD_LEN)))
            .with_name("word");

        WordAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }

    /// Analyze `text` into a vector of tokens.
    ///
    /// None of the pipeline stages can fail; should one ever report an error,
    /// it is logged and the text is treated as containing no words.
    pub fn words(&self, text: &str) -> Vec<Token> {
        match self.analyze(text) {
            Ok(stream) => stream.collect(),
            Err(e) => {
                warn!("word analysis failed, treating text as empty: {e}");
                Vec::new()
            }
        }
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

impl std::fmt::Debug for WordAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
