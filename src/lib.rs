//! # textmetrics
//!
//! Lexical metrics for plain English text.
//!
//! ## Features
//!
//! - Word counting over a normalized token stream
//! - Lexicon-based sentiment with intensifiers, in `[-1, 1]`
//! - Frequency-ranked keywords with stop-word filtering
//! - Flesch-based complexity in `[0, 1]`
//! - Reading-time estimates
//! - A C ABI and a command line front end
//!
//! ```
//! use textmetrics::prelude::*;
//!
//! let engine = AnalysisEngine::new();
//! let report = engine.report("The new release is excellent. Truly excellent work!");
//! assert_eq!(report.sentiment_label, SentimentLabel::Positive);
//! assert_eq!(report.keywords[0], "excellent");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod lexicon;
pub mod scoring;

pub mod prelude {
    pub use crate::analysis::tokenize;
    pub use crate::config::EngineConfig;
    pub use crate::engine::{AnalysisEngine, AnalysisReport, AnalysisResult, default_engine};
    pub use crate::error::{Result, TextMetricsError};
    pub use crate::scoring::keyword::KeywordCount;
    pub use crate::scoring::readability::ReadabilityStats;
    pub use crate::scoring::sentiment::SentimentLabel;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
