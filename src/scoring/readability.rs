//! Readability and complexity scoring.
//!
//! A Flesch Reading Ease estimate built from word, sentence and syllable
//! counts, inverted and normalized so that `0.0` is easy text and `1.0` hard
//! text:
//!
//! ```text
//! flesch     = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
//! complexity = clamp((100 - flesch) / 100, 0, 1)
//! ```
//!
//! Sentences are approximated by counting `.`, `!` and `?` in the raw text
//! (at least one); syllables by counting vowel groups per word (at least one).

use log::trace;
use serde::{Deserialize, Serialize};

use crate::scoring::clamp_score;

const FLESCH_BASE: f32 = 206.835;
const FLESCH_SENTENCE_WEIGHT: f32 = 1.015;
const FLESCH_SYLLABLE_WEIGHT: f32 = 84.6;

/// Intermediate statistics behind a complexity score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub total_syllables: usize,
    /// Mean word length in characters. Informational; the complexity formula
    /// does not use it.
    pub avg_word_length: f32,
    pub avg_sentence_length: f32,
    pub flesch: f32,
}

impl ReadabilityStats {
    /// Complexity in `[0.0, 1.0]`, higher meaning harder to read.
    pub fn complexity(&self) -> f32 {
        clamp_score((100.0 - self.flesch) / 100.0, 0.0, 1.0)
    }
}

/// Count sentence terminators in `text`, floored at one.
pub fn count_sentences(text: &str) -> usize {
    text.bytes()
        .filter(|b| matches!(b, b'.' | b'!' | b'?'))
        .count()
        .max(1)
}

/// Estimate the syllables of a normalized word by counting vowel groups.
///
/// Every word has at least one syllable, even without vowels ("rhythm").
pub fn count_syllables(word: &str) -> usize {
    let mut syllables = 0;
    let mut prev_was_vowel = false;

    for byte in word.bytes() {
        let is_vowel = matches!(byte, b'a' | b'e' | b'i' | b'o' | b'u');
        if is_vowel && !prev_was_vowel {
            syllables += 1;
        }
        prev_was_vowel = is_vowel;
    }

    syllables.max(1)
}

/// Computes complexity from readability statistics.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadabilityScorer;

impl ReadabilityScorer {
    /// Create a new readability scorer.
    pub fn new() -> Self {
        ReadabilityScorer
    }

    /// Gather statistics for `words` drawn from `text`.
    ///
    /// Returns `None` when there are no words.
    pub fn stats<S: AsRef<str>>(&self, text: &str, words: &[S]) -> Option<ReadabilityStats> {
        if words.is_empty() {
            return None;
        }

        let word_count = words.len();
        let sentence_count = count_sentences(text);
        let total_length: usize = words.iter().map(|w| w.as_ref().len()).sum();
        let total_syllables: usize = words.iter().map(|w| count_syllables(w.as_ref())).sum();

        let avg_word_length = total_length as f32 / word_count as f32;
        let avg_sentence_length = word_count as f32 / sentence_count as f32;
        let syllables_per_word = total_syllables as f32 / word_count as f32;
        let flesch = FLESCH_BASE
            - FLESCH_SENTENCE_WEIGHT * avg_sentence_length
            - FLESCH_SYLLABLE_WEIGHT * syllables_per_word;

        Some(ReadabilityStats {
            word_count,
            sentence_count,
            total_syllables,
            avg_word_length,
            avg_sentence_length,
            flesch,
        })
    }

    /// Complexity of `text` in `[0.0, 1.0]`; `0.0` when there are no words.
    pub fn score<S: AsRef<str>>(&self, text: &str, words: &[S]) -> f32 {
        match self.stats(text, words) {
            Some(stats) => {
                let complexity = stats.complexity();
                trace!(
                    "readability: words={} sentences={} syllables={} flesch={} complexity={complexity}",
                    stats.word_count, stats.sentence_count, stats.total_syllables, stats.flesch
                );
                complexity
            }
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenize;

    fn complexity(text: &str) -> f32 {
        ReadabilityScorer::new().score(text, &tokenize(text))
    }

    #[test]
    fn test_syllable_estimate() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("people"), 2);
        assert_eq!(count_syllables("area"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("queue"), 1);
        assert_eq!(count_syllables("internationalization"), 8);
        // No vowel group still counts as one syllable
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("2024"), 1);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(count_sentences("Hi. There! Why?"), 3);
        assert_eq!(count_sentences("no terminator"), 1);
        assert_eq!(count_sentences("Wait..."), 3);
        assert_eq!(count_sentences(""), 1);
    }

    #[test]
    fn test_stats() {
        let text = "happy people.";
        let stats = ReadabilityScorer::new()
            .stats(text, &tokenize(text))
            .unwrap();

        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.total_syllables, 3);
        assert!((stats.avg_word_length - 5.5).abs() < 1e-6);
        assert!((stats.avg_sentence_length - 2.0).abs() < 1e-6);
        assert!((stats.flesch - 77.905).abs() < 1e-3);
    }

    #[test]
    fn test_mid_range_complexity() {
        assert!((complexity("happy people.") - 0.22095).abs() < 1e-4);
    }

    #[test]
    fn test_simple_text_floors_at_zero() {
        assert_eq!(complexity("The cat sat on the mat."), 0.0);
    }

    #[test]
    fn test_dense_text_caps_at_one() {
        assert_eq!(complexity("internationalization"), 1.0);
    }

    #[test]
    fn test_no_words() {
        assert_eq!(complexity(""), 0.0);
        assert_eq!(complexity("a b c. d!"), 0.0);
        assert!(ReadabilityScorer::new().stats::<String>("...", &[]).is_none());
    }
}
