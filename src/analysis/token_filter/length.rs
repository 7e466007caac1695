//! Length filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::{Result, WordFreqError};

/// A filter that removes tokens shorter than a minimum length.
///
/// Length is measured in characters.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_length: usize,
}

impl LengthFilter {
    /// Create a new length filter. `min_length` must be at least 1.
    pub fn new(min_length: usize) -> Result<Self> {
        if min_length == 0 {
            return Err(WordFreqError::configuration(
                "min_length must be at least 1",
            ));
        }
        Ok(LengthFilter { min_length })
    }

    /// Get the minimum token length kept by this filter.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        Ok(Box::new(
            tokens.filter(move |token| token.text.chars().count() >= min_length),
        ))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
