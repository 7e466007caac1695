//! Whitespace tokenizer implementation.

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on runs of whitespace.
///
/// Leading and trailing whitespace never produce tokens, and consecutive
/// separators never produce empty tokens.
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
        let mut tokens = Vec::new();
        let mut word_start: Option<usize> = None;

        for (offset, ch) in text.char_indices() {
            match (ch.is_whitespace(), word_start) {
                (true, Some(start)) => {
                    tokens.push(Token::with_offsets(
                        &text[start..offset],
                        tokens.len(),
                        start,
                        offset,
                    ));
                    word_start = None;
                }
                (false, None) => word_start = Some(offset),
                _ => {}
            }
        }

        if let Some(start) = word_start {
            tokens.push(Token::with_offsets(
                &text[start..],
                tokens.len(),
                start,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
