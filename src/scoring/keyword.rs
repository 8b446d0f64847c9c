//! Frequency-based keyword extraction.
//!
//! Words are run through a stop filter and then a minimum length filter of
//! four characters; the survivors are counted, ranked by frequency (descending), then word length (descending),
//! then alphabetically, and truncated to the requested size.
//!
//! # Examples
//!
//! ```
//! use textmetrics::analysis::tokenize;
//! use textmetrics::scoring::keyword::KeywordExtractor;
//!
//! let extractor = KeywordExtractor::new();
//! let words = tokenize("testing testing coding coding coding");
//! assert_eq!(extractor.extract(&words, 2), vec!["coding", "testing"]);
//! ```

use std::cmp::Ordering;

use ahash::AHashMap;
use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::length::{MIN_KEYWORD_LEN, MinLengthFilter};
use crate::analysis::token_filter::stop::StopFilter;
use crate::error::Result;

/// Number of keywords returned when the caller does not ask for a size.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// A keyword together with its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

impl KeywordCount {
    /// Ranking order: higher count first, then longer word, then alphabetical.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| other.word.len().cmp(&self.word.len()))
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Extracts the most frequent content words.
#[derive(Clone, Debug)]
pub struct KeywordExtractor {
    stop_filter: StopFilter,
    length_filter: MinLengthFilter,
}

impl KeywordExtractor {
    /// Create an extractor with the default stop words and minimum length.
    pub fn new() -> Self {
        KeywordExtractor {
            stop_filter: StopFilter::new(),
            length_filter: MinLengthFilter::new(MIN_KEYWORD_LEN),
        }
    }

    /// Replace the stop filter.
    pub fn with_stop_filter(mut self, stop_filter: StopFilter) -> Self {
        self.stop_filter = stop_filter;
        self
    }

    /// Stream the words of `words` that survive the stop and length filters.
    pub fn candidates<S: AsRef<str>>(&self, words: &[S]) -> Result<TokenStream> {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(position, word)| Token::new(word.as_ref(), position))
            .collect();

        let tokens = self.stop_filter.filter(tokens.into_token_stream())?;
        self.length_filter.filter(tokens)
    }

    /// Build the frequency table for `words`.
    pub fn frequencies<S: AsRef<str>>(&self, words: &[S]) -> AHashMap<String, usize> {
        let mut table: AHashMap<String, usize> = AHashMap::new();
        match self.candidates(words) {
            Ok(tokens) => {
                for token in tokens {
                    *table.entry(token.text).or_insert(0) += 1;
                }
            }
            Err(e) => warn!("keyword filtering failed, counting no keywords: {e}"),
        }
        table
    }

    /// Rank candidates and keep the top `max_keywords`, with their counts.
    pub fn ranked<S: AsRef<str>>(&self, words: &[S], max_keywords: usize) -> Vec<KeywordCount> {
        if max_keywords == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<KeywordCount> = self
            .frequencies(words)
            .into_iter()
            .map(|(word, count)| KeywordCount { word, count })
            .collect();
        ranked.sort_unstable_by(KeywordCount::rank_cmp);
        ranked.truncate(max_keywords);

        trace!("keywords: {} candidates kept", ranked.len());
        ranked
    }

    /// Rank candidates and keep the top `max_keywords` words.
    pub fn extract<S: AsRef<str>>(&self, words: &[S], max_keywords: usize) -> Vec<String> {
        self.ranked(words, max_keywords)
            .into_iter()
            .map(|k| k.word)
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
