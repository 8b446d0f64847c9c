//! Analysis engine: one tokenization pass feeding every scorer.
//!
//! [`AnalysisEngine`] owns a configured word analyzer and the four scorers and
//! exposes one method per metric plus [`analyze`](AnalysisEngine::analyze)
//! and [`report`](AnalysisEngine::report), which compute everything from a
//! single tokenization of the input.
//!
//! Every method accepts either a `&str` or an `Option<&str>`. An absent or
//! zero-length text yields the zero/neutral result; in particular its reading
//! time is `0`, while any other text reads in at least one minute.
//!
//! ```
//! use textmetrics::engine::AnalysisEngine;
//!
//! let engine = AnalysisEngine::new();
//! let result = engine.analyze("This is an absolutely amazing product");
//! assert_eq!(result.word_count, 4);
//! assert_eq!(result.sentiment, 1.0);
//! assert_eq!(result.reading_time, 1);
//!
//! assert_eq!(engine.analyze(None).reading_time, 0);
//! ```

use std::sync::LazyLock;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::word::WordAnalyzer;
use crate::analysis::token::Token;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::scoring::keyword::{KeywordCount, KeywordExtractor};
use crate::scoring::readability::{ReadabilityScorer, ReadabilityStats};
use crate::scoring::reading_time::ReadingTimeEstimator;
use crate::scoring::sentiment::{SentimentLabel, SentimentScorer};

static DEFAULT_ENGINE: LazyLock<AnalysisEngine> = LazyLock::new(AnalysisEngine::new);

/// The process-wide engine with the default configuration.
pub fn default_engine() -> &'static AnalysisEngine {
    &DEFAULT_ENGINE
}

/// The four scalar metrics of one text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub word_count: usize,
    /// In `[-1.0, 1.0]`.
    pub sentiment: f32,
    /// Minutes; `0` only for absent or zero-length text.
    pub reading_time: u32,
    /// In `[0.0, 1.0]`, higher meaning harder to read.
    pub complexity: f32,
}

/// Everything the engine knows about one text, ready for display or JSON.
///
/// Scores are rounded to three decimals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub word_count: usize,
    pub sentiment: f32,
    pub sentiment_label: SentimentLabel,
    pub keywords: Vec<String>,
    pub complexity: f32,
    pub reading_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityStats>,
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Treat zero-length text like absent text.
fn present<'a>(text: impl Into<Option<&'a str>>) -> Option<&'a str> {
    text.into().filter(|t| !t.is_empty())
}

/// Runs the word analyzer and scorers over text.
#[derive(Debug)]
pub struct AnalysisEngine {
    config: EngineConfig,
    analyzer: WordAnalyzer,
    sentiment: SentimentScorer,
    keywords: KeywordExtractor,
    readability: ReadabilityScorer,
    reading_time: ReadingTimeEstimator,
}

impl AnalysisEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Create an engine from a validated configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        AnalysisEngine {
            reading_time: ReadingTimeEstimator::new(config.words_per_minute),
            config,
            analyzer: WordAnalyzer::new(),
            sentiment: SentimentScorer::new(),
            keywords: KeywordExtractor::new(),
            readability: ReadabilityScorer::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Normalized words of `text`; empty when the text is absent.
    pub fn words<'a>(&self, text: impl Into<Option<&'a str>>) -> Vec<Token> {
        match present(text) {
            Some(text) => self.analyzer.words(text),
            None => Vec::new(),
        }
    }

    /// Number of normalized words.
    pub fn word_count<'a>(&self, text: impl Into<Option<&'a str>>) -> usize {
        self.words(text).len()
    }

    /// Sentiment in `[-1.0, 1.0]`.
    pub fn sentiment_score<'a>(&self, text: impl Into<Option<&'a str>>) -> f32 {
        self.sentiment.score(&self.words(text))
    }

    /// Sentiment label using the configured threshold.
    pub fn sentiment_label<'a>(&self, text: impl Into<Option<&'a str>>) -> SentimentLabel {
        SentimentLabel::from_score(self.sentiment_score(text), self.config.label_threshold)
    }

    /// Up to `max_keywords` keywords, best first.
    pub fn extract_keywords<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
        max_keywords: usize,
    ) -> Vec<String> {
        self.keywords.extract(&self.words(text), max_keywords)
    }

    /// Like [`extract_keywords`](Self::extract_keywords), keeping the counts.
    pub fn ranked_keywords<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
        max_keywords: usize,
    ) -> Vec<KeywordCount> {
        self.keywords.ranked(&self.words(text), max_keywords)
    }

    /// Readability statistics; `None` when the text has no words.
    pub fn readability<'a>(&self, text: impl Into<Option<&'a str>>) -> Option<ReadabilityStats> {
        let text = present(text)?;
        self.readability.stats(text, &self.analyzer.words(text))
    }

    /// Complexity in `[0.0, 1.0]`.
    pub fn complexity<'a>(&self, text: impl Into<Option<&'a str>>) -> f32 {
        match present(text) {
            Some(text) => self.readability.score(text, &self.analyzer.words(text)),
            None => 0.0,
        }
    }

    /// Reading time in minutes: `0` for absent text, otherwise at least `1`.
    pub fn reading_time<'a>(&self, text: impl Into<Option<&'a str>>) -> u32 {
        match present(text) {
            Some(text) => self.reading_time.estimate(self.analyzer.words(text).len()),
            None => 0,
        }
    }

    /// All four scalar metrics from a single tokenization.
    pub fn analyze<'a>(&self, text: impl Into<Option<&'a str>>) -> AnalysisResult {
        let Some(text) = present(text) else {
            return AnalysisResult::default();
        };

        let words = self.analyzer.words(text);
        let result = AnalysisResult {
            word_count: words.len(),
            sentiment: self.sentiment.score(&words),
            reading_time: self.reading_time.estimate(words.len()),
            complexity: self.readability.score(text, &words),
        };

        debug!(
            "analyzed {} bytes: words={} sentiment={} complexity={} reading_time={}",
            text.len(),
            result.word_count,
            result.sentiment,
            result.complexity,
            result.reading_time
        );
        result
    }

    /// Full report from a single tokenization.
    pub fn report<'a>(&self, text: impl Into<Option<&'a str>>) -> AnalysisReport {
        let Some(text) = present(text) else {
            return AnalysisReport {
                word_count: 0,
                sentiment: 0.0,
                sentiment_label: SentimentLabel::Neutral,
                keywords: Vec::new(),
                complexity: 0.0,
                reading_time: 0,
                readability: None,
            };
        };

        let words = self.analyzer.words(text);
        let sentiment = self.sentiment.score(&words);
        let readability = self.readability.stats(text, &words);
        let complexity = readability
            .as_ref()
            .map(ReadabilityStats::complexity)
            .unwrap_or(0.0);

        debug!(
            "report for {} bytes: words={} keywords<={}",
            text.len(),
            words.len(),
            self.config.max_keywords
        );

        AnalysisReport {
            word_count: words.len(),
            sentiment: round3(sentiment),
            sentiment_label: SentimentLabel::from_score(sentiment, self.config.label_threshold),
            keywords: self.keywords.extract(&words, self.config.max_keywords),
            complexity: round3(complexity),
            reading_time: self.reading_time.estimate(words.len()),
            readability: readability.map(|stats| ReadabilityStats {
                avg_word_length: round3(stats.avg_word_length),
                avg_sentence_length: round3(stats.avg_sentence_length),
                flesch: round3(stats.flesch),
                ..stats
            }),
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVIEW: &str = "This is an absolutely amazing product. The battery lasts \
                          forever and the screen is brilliant! Shipping was slow, though.";

    #[test]
    fn test_absent_and_empty_text() {
        let engine = AnalysisEngine::new();
        for text in [None, Some("")] {
            assert_eq!(engine.analyze(text), AnalysisResult::default());
            assert_eq!(engine.word_count(text), 0);
            assert_eq!(engine.sentiment_score(text), 0.0);
            assert!(engine.extract_keywords(text, 10).is_empty());
            assert_eq!(engine.complexity(text), 0.0);
            assert_eq!(engine.reading_time(text), 0);
        }
    }

    #[test]
    fn test_blank_text_still_reads_in_a_minute() {
        let engine = AnalysisEngine::new();
        let result = engine.analyze("   \n\t ");
        assert_eq!(result.word_count, 0);
        assert_eq!(result.reading_time, 1);
        assert_eq!(result.complexity, 0.0);
    }

    #[test]
    fn test_analyze_matches_individual_metrics() {
        let engine = AnalysisEngine::new();
        let result = engine.analyze(REVIEW);

        assert_eq!(result.word_count, engine.word_count(REVIEW));
        assert_eq!(result.sentiment, engine.sentiment_score(REVIEW));
        assert_eq!(result.complexity, engine.complexity(REVIEW));
        assert_eq!(result.reading_time, engine.reading_time(REVIEW));
        assert_eq!(result.reading_time, 1);
        assert!(result.sentiment > 0.0);
    }

    #[test]
    fn test_report() {
        let engine = AnalysisEngine::new();
        let report = engine.report(REVIEW);

        assert_eq!(report.word_count, engine.word_count(REVIEW));
        assert_eq!(report.sentiment_label, SentimentLabel::Positive);
        assert!(report.keywords.len() <= 10);
        assert!(report.keywords.contains(&"battery".to_string()));
        let readability = report.readability.unwrap();
        assert_eq!(readability.sentence_count, 3);
        assert_eq!(readability.word_count, report.word_count);
    }

    #[test]
    fn test_report_rounds_scores() {
        let engine = AnalysisEngine::new();
        let report = engine.report("happy people.");
        assert_eq!(report.complexity, 0.221);

        let stats = report.readability.unwrap();
        assert_eq!(stats.flesch, 77.905);
        assert_eq!(stats.avg_word_length, 5.5);
    }

    #[test]
    fn test_empty_report() {
        let report = AnalysisEngine::new().report(None);
        assert_eq!(report.sentiment_label, SentimentLabel::Neutral);
        assert_eq!(report.reading_time, 0);
        assert!(report.readability.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("readability").is_none());
        assert_eq!(json["sentiment_label"], "NEUTRAL");
    }

    #[test]
    fn test_custom_config() {
        let config = EngineConfig::default()
            .with_max_keywords(1)
            .with_words_per_minute(2.0)
            .with_label_threshold(0.9);
        let engine = AnalysisEngine::with_config(config).unwrap();

        let report = engine.report("good coding coding tests");
        assert_eq!(report.keywords, vec!["coding"]);
        assert_eq!(report.reading_time, 2);
        assert_eq!(report.sentiment_label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_invalid_config() {
        let config = EngineConfig::default().with_words_per_minute(-1.0);
        assert!(AnalysisEngine::with_config(config).is_err());
    }

    #[test]
    fn test_default_engine_is_shared() {
        assert!(std::ptr::eq(default_engine(), default_engine()));
        assert_eq!(default_engine().config(), &EngineConfig::default());
    }
}
