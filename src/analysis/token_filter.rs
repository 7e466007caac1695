//! Token filter implementations for token transformation.
//!
//! Filters receive the tokenizer's stream and rewrite or drop tokens. The
//! normalizer chains them in a fixed order:
//!
//! ```text
//! Tokenizer → Lowercase → Length → Stop Words → tokens
//! ```
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - ASCII lowercasing
//! - [`length::LengthFilter`] - Drops tokens shorter than a minimum
//! - [`stop::StopFilter`] - Drops stop words
//!
//! # Examples
//!
//! ```
//! use wordfreq::analysis::token::Token;
//! use wordfreq::analysis::token_filter::Filter;
//! use wordfreq::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so filters can be shared across the
/// threads of a parallel analysis.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod length;
pub mod lowercase;
pub mod stop;

pub use length::LengthFilter;
pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
