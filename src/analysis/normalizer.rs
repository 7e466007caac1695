//! Normalizer: turns raw document text into filtered word tokens.
//!
//! The normalizer is a fixed pipeline:
//!
//! ```text
//! Raw Text → PatternReplace (non-letters → " ") → Whitespace Tokenizer
//!          → Lowercase → Length (≥ min_length) → Stop Words → tokens
//! ```
//!
//! Tokens come out in source order. Lowercasing runs after tokenization;
//! because it only touches ASCII letters, this yields the same tokens as
//! lowercasing the whole text up front.
//!
//! # Examples
//!
//! ```
//! use wordfreq::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::with_stop_words(3, ["the", "on"]).unwrap();
//! let tokens = normalizer.tokenize("the cat sat on the mat").unwrap();
//! assert_eq!(tokens, vec!["cat", "sat", "mat"]);
//! ```

use std::sync::Arc;

use ahash::AHashSet;
use log::debug;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::stopwords::{StopwordCache, StopwordSet};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{Filter, LengthFilter, LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Converts raw text into an ordered sequence of normalized tokens.
///
/// A normalizer owns its stopword set for its whole lifetime; the set is
/// resolved once, when the normalizer is built.
#[derive(Clone)]
pub struct Normalizer {
    char_filter: Arc<dyn CharFilter>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    min_length: usize,
    stop_words: StopwordSet,
}

impl Normalizer {
    /// Build a normalizer for a configuration.
    ///
    /// The stopword list for `config.language` is resolved here, through the
    /// process-wide cache for the configured stopword directory, or the
    /// built-in cache when there is none.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let stop_words = match &config.stopwords_dir {
            Some(dir) => StopwordCache::for_directory(dir.as_path()).get(&config.language)?,
            None => StopwordCache::global().get(&config.language)?,
        };
        debug!(
            "normalizer ready: language={}, min_length={}, {} stop words",
            config.language,
            config.min_length,
            stop_words.len()
        );

        Self::from_parts(config.min_length, stop_words)
    }

    /// Build a normalizer with an explicit stopword list.
    pub fn with_stop_words<I, S>(min_length: usize, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words: AHashSet<String> = words.into_iter().map(Into::into).collect();
        Self::from_parts(min_length, Arc::new(stop_words))
    }

    /// Build a normalizer from an already resolved stopword set.
    pub fn from_parts(min_length: usize, stop_words: StopwordSet) -> Result<Self> {
        let filters: Vec<Arc<dyn Filter>> = vec![
            Arc::new(LowercaseFilter::new()),
            Arc::new(LengthFilter::new(min_length)?),
            Arc::new(StopFilter::new(Arc::clone(&stop_words))),
        ];

        Ok(Normalizer {
            char_filter: Arc::new(PatternReplaceCharFilter::ascii_letters_only()?),
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
            filters,
            min_length,
            stop_words,
        })
    }

    /// Run the pipeline, returning the surviving tokens with positions.
    ///
    /// Positions and offsets refer to the char-filtered text.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let filtered = self.char_filter.filter(text);
        let mut tokens = self.tokenizer.tokenize(&filtered)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    /// Tokenize one document's text into normalized words, in source order.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(Token::into_text).collect())
    }

    /// Minimum token length kept by this normalizer.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// The stopword set used by this normalizer.
    pub fn stop_words(&self) -> &StopwordSet {
        &self.stop_words
    }

    /// Names of the pipeline stages, in order.
    pub fn stages(&self) -> Vec<&'static str> {
        let mut stages = vec![self.char_filter.name(), self.tokenizer.name()];
        stages.extend(self.filters.iter().map(|f| f.name()));
        stages
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("stages", &self.stages())
            .field("min_length", &self.min_length)
            .field("stop_words", &self.stop_words.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordFreqError;

    fn plain(min_length: usize) -> Normalizer {
        Normalizer::with_stop_words(min_length, Vec::<String>::new()).unwrap()
    }

    #[test]
    fn test_punctuation_and_digits_are_separators() {
        let tokens = plain(3).tokenize("Hello, World! 123 test-case").unwrap();
        assert_eq!(tokens, vec!["hello", "world", "test", "case"]);
    }

    #[test]
    fn test_stopword_filtering() {
        let normalizer = Normalizer::with_stop_words(3, ["the", "on"]).unwrap();
        let tokens = normalizer.tokenize("the cat sat on the mat").unwrap();
        assert_eq!(tokens, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn test_stopwords_match_after_lowercasing() {
        let normalizer = Normalizer::with_stop_words(1, ["the"]).unwrap();
        let tokens = normalizer.tokenize("The THE tHe cat").unwrap();
        assert_eq!(tokens, vec!["cat"]);
    }

    #[test]
    fn test_non_ascii_letters_split_words() {
        let tokens = plain(2).tokenize("Café naïve über").unwrap();
        assert_eq!(tokens, vec!["caf", "na", "ve", "ber"]);
    }

    #[test]
    fn test_digits_inside_words_split_them() {
        let tokens = plain(1).tokenize("abc123def 42").unwrap();
        assert_eq!(tokens, vec!["abc", "def"]);
    }

    #[test]
    fn test_unicode_whitespace_separates_words() {
        let tokens = plain(3).tokenize("cat\u{00A0}dog\u{2003}bird\u{3000}fish").unwrap();
        assert_eq!(tokens, vec!["cat", "dog", "bird", "fish"]);
    }

    #[test]
    fn test_directory_stopwords_shared_between_normalizers() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("english"), "cat\n").unwrap();
        let config = AnalysisConfig::default().with_stopwords_dir(dir.path());

        let a = Normalizer::new(&config).unwrap();
        let b = Normalizer::new(&config).unwrap();

        assert!(Arc::ptr_eq(a.stop_words(), b.stop_words()));
        assert_eq!(a.tokenize("the cat and dog").unwrap(), vec!["the", "and", "dog"]);
    }

    #[test]
    fn test_empty_and_blank_text() {
        let normalizer = plain(3);
        assert!(normalizer.tokenize("").unwrap().is_empty());
        assert!(normalizer.tokenize("  \n\t 12 !! ").unwrap().is_empty());
    }

    #[test]
    fn test_order_and_repeats_preserved() {
        let tokens = plain(1).tokenize("b a b\nc a").unwrap();
        assert_eq!(tokens, vec!["b", "a", "b", "c", "a"]);
    }

    #[test]
    fn test_min_length_boundary() {
        let tokens = plain(3).tokenize("at cat cats").unwrap();
        assert_eq!(tokens, vec!["cat", "cats"]);
    }

    #[test]
    fn test_zero_min_length_rejected() {
        assert!(matches!(
            Normalizer::with_stop_words(0, ["the"]),
            Err(WordFreqError::Configuration(_))
        ));
    }

    #[test]
    fn test_from_config_uses_builtin_english() {
        let normalizer = Normalizer::new(&AnalysisConfig::default()).unwrap();
        let tokens = normalizer
            .tokenize("The quick brown fox jumps over the lazy dog")
            .unwrap();

        assert_eq!(tokens, vec!["quick", "brown", "fox", "jumps", "lazy", "dog"]);
        assert!(normalizer.stop_words().contains("over"));
    }

    #[test]
    fn test_unknown_language_fails() {
        let config = AnalysisConfig::default().with_language("klingon");
        let err = Normalizer::new(&config).unwrap_err();

        assert!(matches!(err, WordFreqError::Configuration(_)));
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_analyze_positions() {
        let tokens: Vec<Token> = plain(3).analyze("a big, red dog").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "big");
        assert_eq!(tokens[0].position, 1);
        assert_eq!(tokens[2].text, "dog");
        assert_eq!(tokens[2].position, 3);
    }

    #[test]
    fn test_stages() {
        assert_eq!(
            plain(3).stages(),
            vec!["pattern_replace", "whitespace", "lowercase", "length", "stop"]
        );
    }
}
