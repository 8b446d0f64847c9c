//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Whitespace as classified by C `isspace` in the default locale.
///
/// This differs from [`u8::is_ascii_whitespace`] by also accepting the
/// vertical tab (`0x0B`).
#[inline]
pub fn is_c_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// A tokenizer that splits text on runs of ASCII whitespace.
///
/// Fields are emitted verbatim; cleaning and case folding are left to the
/// token filters that follow in the pipeline. Offsets are byte offsets into
/// the original text. Only ASCII bytes are treated as separators, so every
/// field boundary is also a UTF-8 character boundary.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let bytes = text.as_bytes();
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut start = 0;

        while start < bytes.len() {
            // Skip whitespace to find the next field
            while start < bytes.len() && is_c_whitespace(bytes[start]) {
                start += 1;
            }
            if start >= bytes.len() {
                break;
            }

            let mut end = start;
            while end < bytes.len() && !is_c_whitespace(bytes[end]) {
                end += 1;
            }

            tokens.push(Token::with_offsets(&text[start..end], position, start, end));
            position += 1;
            start = end;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[1].end_offset, 12);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_c_whitespace_classes() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer
            .tokenize("\r\none\x0Btwo\x0Cthree\n")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_non_ascii_is_not_a_separator() {
        let tokenizer = WhitespaceTokenizer::new();
        // U+00A0 NO-BREAK SPACE is not C whitespace
        let tokens: Vec<Token> = tokenizer.tokenize("caf\u{e9}\u{a0}bar baz").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "caf\u{e9}\u{a0}bar");
        assert_eq!(tokens[1].text, "baz");
    }

    #[test]
    fn test_empty_and_blank_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize(" \t\n ").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
