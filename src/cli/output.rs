//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordFreqArgs};
use crate::error::Result;
use crate::frequency::RankedEntry;

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Render the result as lines of text.
    fn human_lines(&self) -> Vec<String>;
}

/// Result structure for an analysis run.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub input: String,
    pub output: String,
    pub language: String,
    pub documents: usize,
    pub total_tokens: u64,
    pub vocabulary_size: usize,
    pub top_words: Vec<RankedEntry>,
    pub files_written: Vec<String>,
    pub duration_ms: u64,
}

impl HumanOutput for AnalysisSummary {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Analysis Summary:".to_string(),
            "═════════════════".to_string(),
            format!("Input folder: {}", self.input),
            format!("Language: {}", self.language),
            format!("Documents: {}", self.documents),
            format!("Tokens counted: {}", self.total_tokens),
            format!("Distinct words: {}", self.vocabulary_size),
            format!("Elapsed: {}ms", self.duration_ms),
        ];

        if !self.top_words.is_empty() {
            lines.push(String::new());
            lines.push(format!("Top {} words:", self.top_words.len()));
            lines.push("─────────────".to_string());
            let width = self
                .top_words
                .iter()
                .map(|e| e.word.len())
                .max()
                .unwrap_or(0);
            for (rank, entry) in self.top_words.iter().enumerate() {
                lines.push(format!(
                    "{:>3}. {:<width$}  {}",
                    rank + 1,
                    entry.word,
                    entry.freq
                ));
            }
        }

        lines.push(String::new());
        lines.push(format!("Reports written to {}:", self.output));
        lines.extend(self.files_written.iter().map(|f| format!("  {f}")));
        lines
    }
}

/// Result structure for tokenizing a text.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub tokens: Vec<String>,
}

impl HumanOutput for TokenizeResult {
    fn human_lines(&self) -> Vec<String> {
        if self.tokens.is_empty() {
            vec!["(no tokens)".to_string()]
        } else {
            self.tokens.clone()
        }
    }
}

/// Result structure for listing stopword languages.
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageList {
    pub languages: Vec<String>,
}

impl HumanOutput for LanguageList {
    fn human_lines(&self) -> Vec<String> {
        self.languages.clone()
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &WordFreqArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            output_human(message, result, args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &WordFreqArgs) {
    if args.verbosity() > 1 && !message.is_empty() {
        println!("{message}");
        println!();
    }
    for line in result.human_lines() {
        println!("{line}");
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordFreqArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
