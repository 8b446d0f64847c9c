//! Reading-time estimation.

/// Average adult reading speed, in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: f32 = 225.0;

/// Estimates reading time from a word count.
#[derive(Clone, Copy, Debug)]
pub struct ReadingTimeEstimator {
    words_per_minute: f32,
}

impl ReadingTimeEstimator {
    /// Create an estimator reading `words_per_minute`.
    ///
    /// The rate is expected to be positive and finite; see
    /// [`EngineConfig::validate`](crate::config::EngineConfig::validate).
    pub fn new(words_per_minute: f32) -> Self {
        ReadingTimeEstimator { words_per_minute }
    }

    pub fn words_per_minute(&self) -> f32 {
        self.words_per_minute
    }

    /// Whole minutes needed to read `word_count` words, never less than one.
    pub fn estimate(&self, word_count: usize) -> u32 {
        let minutes = (word_count as f64 / self.words_per_minute as f64).ceil();
        // `as` saturates, so absurd rates cannot wrap
        (minutes as u32).max(1)
    }
}

impl Default for ReadingTimeEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_MINUTE)
    }
}
