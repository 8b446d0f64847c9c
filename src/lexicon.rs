//! Sentiment lexicons.
//!
//! Three read-only tables keyed by normalized (lower-cased, alphanumeric)
//! words: positive weights, negative weights and intensifier multipliers.
//! They are built once on first use and never mutated, so concurrent callers
//! share them without locking.

use std::sync::LazyLock;

use ahash::AHashMap;

const POSITIVE_WORDS: &[(&str, f32)] = &[
    ("excellent", 3.0),
    ("amazing", 3.0),
    ("outstanding", 3.0),
    ("fantastic", 3.0),
    ("wonderful", 2.5),
    ("great", 2.0),
    ("good", 1.5),
    ("nice", 1.5),
    ("happy", 2.0),
    ("joy", 2.5),
    ("love", 2.5),
    ("like", 1.0),
    ("positive", 1.5),
    ("perfect", 2.5),
    ("brilliant", 2.5),
    ("superb", 2.5),
    ("marvelous", 2.5),
    ("incredible", 2.5),
    ("awesome", 2.0),
    ("terrific", 2.0),
];

const NEGATIVE_WORDS: &[(&str, f32)] = &[
    ("terrible", -3.0),
    ("awful", -3.0),
    ("horrible", -3.0),
    ("disgusting", -3.0),
    ("bad", -2.0),
    ("poor", -1.5),
    ("sad", -1.5),
    ("angry", -2.0),
    ("hate", -2.5),
    ("dislike", -1.5),
    ("disappointed", -2.0),
    ("frustrated", -2.0),
    ("annoying", -1.5),
    ("boring", -1.0),
    ("worst", -3.0),
    ("useless", -2.5),
    ("pathetic", -2.5),
    ("ridiculous", -2.0),
    ("stupid", -2.5),
    ("trash", -2.5),
];

const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.5),
    ("extremely", 2.0),
    ("incredibly", 2.0),
    ("absolutely", 1.8),
    ("completely", 1.7),
    ("totally", 1.6),
    ("really", 1.3),
    ("quite", 1.2),
];

/// Positive sentiment weights.
pub static POSITIVE: LazyLock<AHashMap<&'static str, f32>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().copied().collect());

/// Negative sentiment weights.
pub static NEGATIVE: LazyLock<AHashMap<&'static str, f32>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().copied().collect());

/// Intensifier multipliers.
pub static INTENSIFIER: LazyLock<AHashMap<&'static str, f32>> =
    LazyLock::new(|| INTENSIFIERS.iter().copied().collect());

/// What a word means to the sentiment scorer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LexiconEntry {
    /// Scales the weight of the next token.
    Intensifier(f32),
    /// Signed sentiment weight, positive or negative.
    Sentiment(f32),
}

/// Look up a normalized word.
///
/// Intensifiers take precedence over sentiment words; positive entries over
/// negative ones. The tables are disjoint, so precedence only documents the
/// order in which they are consulted.
pub fn lookup(word: &str) -> Option<LexiconEntry> {
    if let Some(&multiplier) = INTENSIFIER.get(word) {
        return Some(LexiconEntry::Intensifier(multiplier));
    }
    POSITIVE
        .get(word)
        .or_else(|| NEGATIVE.get(word))
        .map(|&weight| LexiconEntry::Sentiment(weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(POSITIVE.len(), 20);
        assert_eq!(NEGATIVE.len(), 20);
        assert_eq!(INTENSIFIER.len(), 8);
    }

    #[test]
    fn test_tables_are_disjoint() {
        for word in POSITIVE.keys() {
            assert!(!NEGATIVE.contains_key(word));
            assert!(!INTENSIFIER.contains_key(word));
        }
        for word in NEGATIVE.keys() {
            assert!(!INTENSIFIER.contains_key(word));
        }
    }

    #[test]
    fn test_weights_have_expected_signs() {
        assert!(POSITIVE.values().all(|&w| w > 0.0));
        assert!(NEGATIVE.values().all(|&w| w < 0.0));
        assert!(INTENSIFIER.values().all(|&m| m > 1.0));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("amazing"), Some(LexiconEntry::Sentiment(3.0)));
        assert_eq!(lookup("trash"), Some(LexiconEntry::Sentiment(-2.5)));
        assert_eq!(lookup("absolutely"), Some(LexiconEntry::Intensifier(1.8)));
        assert_eq!(lookup("product"), None);
        // Keys are lower-case; callers normalize first.
        assert_eq!(lookup("Amazing"), None);
    }

    #[test]
    fn test_keys_are_normalized() {
        for word in POSITIVE.keys().chain(NEGATIVE.keys()).chain(INTENSIFIER.keys()) {
            assert!(word.len() >= 3, "{word} would never survive tokenization");
            assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
