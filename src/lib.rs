//! # wordfreq
//!
//! Batch word-frequency analysis for folders of plain-text documents.
//!
//! ## Pipeline
//!
//! - [`analysis`] normalizes raw text into lowercase ASCII-letter tokens,
//!   dropping short words and stopwords
//! - [`aggregator`] counts tokens per document and globally and ranks them
//! - [`corpus`] and [`export`] read `.txt` folders and write CSV reports
//!
//! ```
//! use wordfreq::aggregator::analyze;
//! use wordfreq::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::default().with_top_n(1);
//! let report = analyze(
//!     vec![("a.txt", "The cat and the hat."), ("b.txt", "A cat!")],
//!     &config,
//! )
//! .unwrap();
//!
//! assert_eq!(report.top_global.iter().next().unwrap().word, "cat");
//! assert_eq!(report.global.get("cat"), 2);
//! ```

pub mod aggregator;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod frequency;

pub mod prelude {
    pub use crate::aggregator::{Aggregator, AnalysisReport, analyze};
    pub use crate::analysis::normalizer::Normalizer;
    pub use crate::config::AnalysisConfig;
    pub use crate::corpus::Corpus;
    pub use crate::error::{Result, WordFreqError};
    pub use crate::export::ReportWriter;
    pub use crate::frequency::{DocumentEntry, FrequencyTable, RankedEntry, RankedTable};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
