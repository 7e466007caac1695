//! Error types for the wordfreq library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordFreqError`] enum. Errors are fatal to the analysis run that produced
//! them: nothing in the core retries or returns partial output.
//!
//! # Examples
//!
//! ```
//! use wordfreq::error::{Result, WordFreqError};
//!
//! fn check_min_length(min_length: usize) -> Result<()> {
//!     if min_length == 0 {
//!         return Err(WordFreqError::configuration("min_length must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_min_length(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordfreq operations.
#[derive(Error, Debug)]
pub enum WordFreqError {
    /// I/O errors (reading documents, writing reports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid or unavailable configuration (stopword language, limits, config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input documents (duplicate ids, missing input folder)
    #[error("Input error: {0}")]
    Input(String),

    /// Analysis pipeline errors (char filters, tokenizers, filters)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for operations that may fail with WordFreqError.
pub type Result<T> = std::result::Result<T, WordFreqError>;

impl WordFreqError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        WordFreqError::Configuration(msg.into())
    }

    /// Create a configuration error for a stopword language that cannot be obtained.
    pub fn unknown_language<S: AsRef<str>>(language: S) -> Self {
        WordFreqError::Configuration(format!(
            "stopword list for language '{}' is not available",
            language.as_ref()
        ))
    }

    /// Create a new input error.
    pub fn input<S: Into<String>>(msg: S) -> Self {
        WordFreqError::Input(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordFreqError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordFreqError::configuration("min_length must be at least 1");
        assert_eq!(
            error.to_string(),
            "Configuration error: min_length must be at least 1"
        );

        let error = WordFreqError::input("duplicate document id 'a.txt'");
        assert_eq!(error.to_string(), "Input error: duplicate document id 'a.txt'");

        let error = WordFreqError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");
    }

    #[test]
    fn test_unknown_language_names_language() {
        let error = WordFreqError::unknown_language("klingon");
        assert!(matches!(error, WordFreqError::Configuration(_)));
        assert!(error.to_string().contains("klingon"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WordFreqError::from(io_error);

        match error {
            WordFreqError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
