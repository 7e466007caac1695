//! Text analysis: turning raw text into normalized word tokens.
//!
//! The building blocks (char filters, tokenizers, token filters) are
//! assembled by [`normalizer::Normalizer`] into the fixed pipeline used for
//! word counting. Stopword lists live in [`stopwords`].

pub mod char_filter;
pub mod normalizer;
pub mod stopwords;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use normalizer::Normalizer;
pub use stopwords::{StopwordCache, StopwordSet, StopwordSource};
pub use token::{Token, TokenStream};
