//! Stop filter implementation.
//!
//! Removes tokens that appear in a stopword set. The set is usually resolved
//! per language by [`StopwordCache`](crate::analysis::stopwords::StopwordCache)
//! and shared between filters through an `Arc`.
//!
//! # Examples
//!
//! ```
//! use wordfreq::analysis::token::Token;
//! use wordfreq::analysis::token_filter::Filter;
//! use wordfreq::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["the", "on"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("cat", 1),
//!     Token::new("on", 2),
//!     Token::new("mat", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(result, vec!["cat", "mat"]);
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter sharing an already resolved stopword set.
    pub fn new(stop_words: Arc<AHashSet<String>>) -> Self {
        StopFilter { stop_words }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// Words are stored as given; callers supply lowercase words to match the
    /// lowercased token stream.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words: AHashSet<String> = words.into_iter().map(Into::into).collect();
        Self::new(Arc::new(stop_words))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the shared stopword set.
    pub fn stop_words(&self) -> &Arc<AHashSet<String>> {
        &self.stop_words
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token| !stop_words.contains(token.text.as_str())),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
