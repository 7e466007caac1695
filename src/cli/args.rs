//! Command line argument parsing for the wordfreq CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::Result;

/// wordfreq - batch word-frequency analysis of plain-text documents
#[derive(Parser, Debug, Clone)]
#[command(name = "wordfreq")]
#[command(about = "Count word frequencies across a folder of .txt files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordFreqArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordFreqArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a folder of .txt files and write CSV reports
    Analyze(AnalyzeArgs),

    /// Print the normalized tokens of a text
    Tokenize(TokenizeArgs),

    /// List the built-in stopword languages
    Languages,
}

/// Options shared by every command that builds a normalizer.
///
/// Unset options fall back to the config file, then to the defaults.
#[derive(Parser, Debug, Clone, Default)]
pub struct NormalizerArgs {
    /// Stopwords language
    #[arg(short, long)]
    pub language: Option<String>,

    /// Minimum token length
    #[arg(short = 'm', long)]
    pub min_length: Option<usize>,

    /// Directory with one stopword file per language (NLTK corpus layout)
    #[arg(long, value_name = "DIR", env = "WORDFREQ_STOPWORDS_DIR")]
    pub stopwords_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl NormalizerArgs {
    /// Resolve the configuration: defaults, then config file, then flags.
    pub fn base_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)?,
            None => AnalysisConfig::default(),
        };
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(min_length) = self.min_length {
            config.min_length = min_length;
        }
        if let Some(dir) = &self.stopwords_dir {
            config.stopwords_dir = Some(dir.clone());
        }
        Ok(config)
    }
}

/// Arguments for analyzing a folder
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Folder with .txt files
    #[arg(short, long, default_value = "data")]
    pub input: PathBuf,

    /// Folder to write CSV reports
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Top-N most frequent words
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Tokenize documents in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Also write the full report as report.json
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub normalizer: NormalizerArgs,
}

impl AnalyzeArgs {
    /// Resolve the analysis configuration for this run.
    pub fn to_config(&self) -> Result<AnalysisConfig> {
        let mut config = self.normalizer.base_config()?;
        if let Some(top) = self.top {
            config.top_n = top;
        }
        if self.parallel {
            config.parallel = true;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for tokenizing a text
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub normalizer: NormalizerArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
