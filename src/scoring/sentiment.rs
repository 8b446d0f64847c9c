//! Lexicon-weighted sentiment scoring.
//!
//! One left-to-right pass over the words with a single piece of carried
//! state, the intensifier multiplier:
//!
//! - an intensifier sets the multiplier and contributes nothing itself;
//! - a sentiment word adds `weight * multiplier` and resets the multiplier;
//! - any other word resets the multiplier.
//!
//! An intensifier therefore only affects the token immediately after it. The
//! raw sum is damped for long texts (`raw / max(1, words / 10)`), divided by
//! five and clamped into `[-1, 1]`.

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::lexicon::{self, LexiconEntry};
use crate::scoring::clamp_score;

/// Number of words per unit of length damping.
const LENGTH_DAMPING_UNIT: f32 = 10.0;

/// Divisor mapping a damped raw score onto the output range.
const SCORE_SCALE: f32 = 5.0;

/// Default distance from zero a score must exceed to be labelled non-neutral.
pub const DEFAULT_LABEL_THRESHOLD: f32 = 0.1;

/// Scores text polarity from the built-in lexicons.
#[derive(Clone, Copy, Debug, Default)]
pub struct SentimentScorer;

impl SentimentScorer {
    /// Create a new sentiment scorer.
    pub fn new() -> Self {
        SentimentScorer
    }

    /// Sum of lexicon weights after intensifiers, before any normalization.
    pub fn raw_score<S: AsRef<str>>(&self, words: &[S]) -> f32 {
        let mut raw_score = 0.0f32;
        let mut multiplier = 1.0f32;

        for word in words {
            match lexicon::lookup(word.as_ref()) {
                Some(LexiconEntry::Intensifier(m)) => {
                    multiplier = m;
                    continue;
                }
                Some(LexiconEntry::Sentiment(weight)) => {
                    raw_score += weight * multiplier;
                }
                None => {}
            }
            multiplier = 1.0;
        }

        raw_score
    }

    /// Score `words`, returning a value in `[-1.0, 1.0]`.
    pub fn score<S: AsRef<str>>(&self, words: &[S]) -> f32 {
        let raw_score = self.raw_score(words);
        let damping = (words.len() as f32 / LENGTH_DAMPING_UNIT).max(1.0);
        let normalized = raw_score / damping;
        let score = clamp_score(normalized / SCORE_SCALE, -1.0, 1.0);

        trace!(
            "sentiment: words={} raw={raw_score} damping={damping} score={score}",
            words.len()
        );
        score
    }
}

/// Coarse polarity label for a sentiment score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Label a score: above `threshold` is positive, below `-threshold` is
    /// negative, anything in between is neutral.
    pub fn from_score(score: f32, threshold: f32) -> Self {
        if score > threshold {
            SentimentLabel::Positive
        } else if score < -threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Negative => "NEGATIVE",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenize;

    fn score(text: &str) -> f32 {
        SentimentScorer::new().score(&tokenize(text))
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_intensifier_scales_next_word() {
        let words = tokenize("This is an absolutely amazing product");
        assert_eq!(words, vec!["this", "absolutely", "amazing", "product"]);

        let scorer = SentimentScorer::new();
        assert_close(scorer.raw_score(&words), 5.4);
        // 5.4 / 5 exceeds the range and is clamped
        assert_eq!(scorer.score(&words), 1.0);
    }

    #[test]
    fn test_intensifier_only_reaches_next_token() {
        assert_close(score("very good"), 0.45);
        assert_close(score("very nice product good"), 0.75);
        assert_close(score("very product good"), 0.3);
    }

    #[test]
    fn test_last_intensifier_wins() {
        assert_close(score("very extremely good"), 0.6);
    }

    #[test]
    fn test_trailing_intensifier_contributes_nothing() {
        assert_eq!(score("quite"), 0.0);
        assert_eq!(score("that was really"), 0.0);
    }

    #[test]
    fn test_negative_text_clamps() {
        assert_eq!(score("this is terrible awful"), -1.0);
        assert_close(score("boring"), -0.2);
    }

    #[test]
    fn test_long_text_is_damped() {
        let mut text = String::from("good");
        for _ in 0..19 {
            text.push_str(" filler");
        }
        // 1.5 / (20 / 10) / 5
        assert_close(score(&text), 0.15);
    }

    #[test]
    fn test_case_and_punctuation_are_normalized() {
        assert_close(score("GOOD!"), 0.3);
    }

    #[test]
    fn test_no_words() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("the cat sat on the mat"), 0.0);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(
            SentimentLabel::from_score(0.5, DEFAULT_LABEL_THRESHOLD),
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentLabel::from_score(0.1, DEFAULT_LABEL_THRESHOLD),
            SentimentLabel::Neutral
        );
        assert_eq!(
            SentimentLabel::from_score(-0.1, DEFAULT_LABEL_THRESHOLD),
            SentimentLabel::Neutral
        );
        assert_eq!(
            SentimentLabel::from_score(-0.11, DEFAULT_LABEL_THRESHOLD),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"NEGATIVE\"");
        assert_eq!(SentimentLabel::Positive.to_string(), "POSITIVE");
    }
}
