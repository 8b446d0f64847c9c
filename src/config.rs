//! Engine configuration.
//!
//! The library defaults are compiled in; nothing is read from the environment.
//! A host or the command line may override them with an [`EngineConfig`],
//! either built in code or loaded from a JSON document whose missing fields
//! fall back to the defaults.
//!
//! ```
//! use textmetrics::config::EngineConfig;
//!
//! let config = EngineConfig::default().with_max_keywords(5);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.max_keywords, 5);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextMetricsError};
use crate::scoring::keyword::DEFAULT_MAX_KEYWORDS;
use crate::scoring::reading_time::DEFAULT_WORDS_PER_MINUTE;
use crate::scoring::sentiment::DEFAULT_LABEL_THRESHOLD;

/// Configuration for the analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Keywords returned by reports and by keyword extraction without an
    /// explicit size.
    pub max_keywords: usize,

    /// Reading speed used for reading-time estimates.
    pub words_per_minute: f32,

    /// Sentiment magnitude a score must exceed to be labelled positive or
    /// negative.
    pub label_threshold: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            label_threshold: DEFAULT_LABEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Set the default number of keywords.
    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    /// Set the reading speed.
    pub fn with_words_per_minute(mut self, words_per_minute: f32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    /// Set the sentiment label threshold.
    pub fn with_label_threshold(mut self, label_threshold: f32) -> Self {
        self.label_threshold = label_threshold;
        self
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if !self.words_per_minute.is_finite() || self.words_per_minute <= 0.0 {
            return Err(TextMetricsError::invalid_config(format!(
                "words_per_minute must be a positive number, got {}",
                self.words_per_minute
            )));
        }
        if !self.label_threshold.is_finite() || self.label_threshold < 0.0 {
            return Err(TextMetricsError::invalid_config(format!(
                "label_threshold must be a non-negative number, got {}",
                self.label_threshold
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_keywords, 10);
        assert_eq!(config.words_per_minute, 225.0);
        assert_eq!(config.label_threshold, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json_str(r#"{"max_keywords": 3}"#).unwrap();
        assert_eq!(config.max_keywords, 3);
        assert_eq!(config.words_per_minute, 225.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = EngineConfig::default().with_words_per_minute(0.0);
        assert!(matches!(
            config.validate(),
            Err(TextMetricsError::InvalidConfig(_))
        ));

        let config = EngineConfig::default().with_words_per_minute(f32::NAN);
        assert!(config.validate().is_err());

        let config = EngineConfig::default().with_label_threshold(-0.5);
        assert!(config.validate().is_err());

        let err = EngineConfig::from_json_str(r#"{"words_per_minute": -1.0}"#).unwrap_err();
        assert!(err.to_string().contains("words_per_minute"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EngineConfig::from_json_str("{not json"),
            Err(TextMetricsError::Json(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        fs::write(&path, r#"{"label_threshold": 0.25}"#).unwrap();

        let config = EngineConfig::from_json_file(&path).unwrap();
        assert_eq!(config.label_threshold, 0.25);

        assert!(matches!(
            EngineConfig::from_json_file(dir.path().join("missing.json")),
            Err(TextMetricsError::Io(_))
        ));
    }
}
