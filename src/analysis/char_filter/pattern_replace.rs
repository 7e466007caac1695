use regex::Regex;

use super::CharFilter;
use crate::error::{Result, WordFreqError};

/// Matches one character that is neither an ASCII letter nor whitespace.
const NON_LETTER_PATTERN: &str = r"[^A-Za-z\s]";

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| WordFreqError::analysis(format!("Invalid regex pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that replaces each character that is not an ASCII
    /// letter or whitespace with a single space.
    ///
    /// Digits, punctuation, symbols and non-ASCII letters all become
    /// separators.
    pub fn ascii_letters_only() -> Result<Self> {
        Self::new(NON_LETTER_PATTERN, " ")
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
