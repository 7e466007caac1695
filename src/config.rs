//! Configuration for an analysis run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordFreqError};

/// Default stopword language.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Default minimum token length.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Default number of entries in the top-N tables.
pub const DEFAULT_TOP_N: usize = 20;

/// Configuration for normalization and aggregation.
///
/// Every field has a default, so a config file only needs the fields it
/// overrides:
///
/// ```
/// use wordfreq::config::AnalysisConfig;
///
/// let config: AnalysisConfig = serde_json::from_str(r#"{"top_n": 5}"#).unwrap();
/// assert_eq!(config.top_n, 5);
/// assert_eq!(config.language, "english");
/// assert_eq!(config.min_length, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Language of the stopword list.
    pub language: String,

    /// Minimum token length in characters (at least 1).
    pub min_length: usize,

    /// Number of entries in the top-N tables. Zero yields empty rankings.
    pub top_n: usize,

    /// Tokenize documents on the rayon thread pool.
    ///
    /// Output is identical to a sequential run.
    pub parallel: bool,

    /// Directory with NLTK-style stopword files, consulted before the
    /// built-in lists.
    pub stopwords_dir: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            top_n: DEFAULT_TOP_N,
            parallel: false,
            stopwords_dir: None,
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            WordFreqError::configuration(format!(
                "invalid config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Set the stopword language.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Set the minimum token length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the size of the top-N tables.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Enable or disable parallel tokenization.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set a stopword directory.
    pub fn with_stopwords_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.stopwords_dir = Some(dir.into());
        self
    }

    /// Check the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(WordFreqError::configuration(
                "min_length must be at least 1",
            ));
        }
        if self.language.trim().is_empty() {
            return Err(WordFreqError::configuration("language must not be empty"));
        }
        Ok(())
    }
}
