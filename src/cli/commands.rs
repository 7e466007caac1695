//! Command implementations for the wordfreq CLI.

use std::time::Instant;

use log::info;

use crate::aggregator::Aggregator;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::stopwords::builtin_languages;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::export::ReportWriter;

/// Execute a CLI command.
pub fn execute_command(args: WordFreqArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_folder(analyze_args, &args),
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args, &args),
        Command::Languages => list_languages(&args),
    }
}

/// Analyze a folder and write the CSV reports.
fn analyze_folder(args: &AnalyzeArgs, cli_args: &WordFreqArgs) -> Result<()> {
    let config = args.to_config()?;
    let start_time = Instant::now();

    // Resolve stopwords before touching the input so a bad language fails fast.
    let aggregator = Aggregator::new(&config)?;
    let corpus = Corpus::from_dir(&args.input)?;
    if corpus.is_empty() {
        info!("no .txt files found in {}", args.input.display());
    }

    let report = aggregator.analyze(corpus.iter())?;
    let written = ReportWriter::new(&args.output)
        .with_json(args.json)
        .write(&report)?;

    let duration = start_time.elapsed();

    output_result(
        "Analysis completed successfully",
        &AnalysisSummary {
            input: args.input.display().to_string(),
            output: args.output.display().to_string(),
            language: config.language.clone(),
            documents: report.documents.len(),
            total_tokens: report.total_tokens,
            vocabulary_size: report.vocabulary_size(),
            top_words: report.top_global.as_slice().to_vec(),
            files_written: written.iter().map(|p| p.display().to_string()).collect(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Print the normalized tokens of a text.
fn tokenize_text(args: &TokenizeArgs, cli_args: &WordFreqArgs) -> Result<()> {
    let config = args.normalizer.base_config()?;
    let normalizer = Normalizer::new(&config)?;

    output_result(
        "Tokens",
        &TokenizeResult {
            tokens: normalizer.tokenize(&args.text)?,
        },
        cli_args,
    )
}

/// List the built-in stopword languages.
fn list_languages(cli_args: &WordFreqArgs) -> Result<()> {
    output_result(
        "Built-in stopword languages",
        &LanguageList {
            languages: builtin_languages().map(str::to_string).collect(),
        },
        cli_args,
    )
}
