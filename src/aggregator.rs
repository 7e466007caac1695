//! Aggregator: per-document and global word frequencies with top-N rankings.
//!
//! Documents are processed in lexicographic order of their ids, whatever
//! order the caller supplies them in. That order defines "first occurrence"
//! for tie-breaking: the earliest (document, position) at which a token is
//! seen across the corpus, or within a document for per-document rankings.
//!
//! # Examples
//!
//! ```
//! use wordfreq::aggregator::Aggregator;
//! use wordfreq::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::with_stop_words(3, ["the"]).unwrap();
//! let aggregator = Aggregator::with_normalizer(normalizer, 2);
//!
//! let report = aggregator
//!     .analyze(vec![
//!         ("b.txt", "the dog saw the cat"),
//!         ("a.txt", "the cat sat"),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(report.global.get("cat"), 2);
//! assert_eq!(report.top_global.len(), 2);
//! assert_eq!(report.top_per_document[0].document, "a.txt");
//! ```

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::Normalizer;
use crate::config::AnalysisConfig;
use crate::error::{Result, WordFreqError};
use crate::frequency::{DocumentEntry, FrequencyTable, RankedTable};

/// Token statistics for one analyzed document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document identifier.
    pub id: String,
    /// Number of tokens that survived filtering.
    pub token_count: u64,
    /// Number of distinct tokens.
    pub distinct_count: usize,
}

/// Result of one analysis run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Every token with a non-zero count, ranked.
    pub global: RankedTable,
    /// The first `top_n` rows of `global`.
    pub top_global: RankedTable,
    /// Each document's own top `top_n` rows, grouped by document in id order.
    pub top_per_document: Vec<DocumentEntry>,
    /// Per-document statistics, in id order.
    pub documents: Vec<DocumentSummary>,
    /// Tokens counted across all documents.
    pub total_tokens: u64,
}

impl AnalysisReport {
    /// Split the report into its three tables.
    pub fn into_tables(self) -> (RankedTable, RankedTable, Vec<DocumentEntry>) {
        (self.global, self.top_global, self.top_per_document)
    }

    /// Number of distinct tokens across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.global.len()
    }
}

/// Turns a set of documents into frequency tables and rankings.
#[derive(Clone, Debug)]
pub struct Aggregator {
    normalizer: Normalizer,
    top_n: usize,
    parallel: bool,
}

impl Aggregator {
    /// Build an aggregator, resolving the configured stopword list.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let normalizer = Normalizer::new(config)?;
        Ok(Self::with_normalizer(normalizer, config.top_n).with_parallel(config.parallel))
    }

    /// Build an aggregator around an existing normalizer.
    pub fn with_normalizer(normalizer: Normalizer, top_n: usize) -> Self {
        Aggregator {
            normalizer,
            top_n,
            parallel: false,
        }
    }

    /// Tokenize documents on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The normalizer used for every document.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Size of the top-N tables.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Analyze a set of `(id, text)` documents.
    ///
    /// Fails without partial output if two documents share an id or if any
    /// document fails to tokenize. An empty set yields an empty report.
    pub fn analyze<I, K, V>(&self, documents: I) -> Result<AnalysisReport>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str> + Sync,
    {
        let mut documents: Vec<(String, V)> = documents
            .into_iter()
            .map(|(id, text)| (id.into(), text))
            .collect();
        documents.sort_by(|a, b| a.0.cmp(&b.0));

        if let Some(pair) = documents.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(WordFreqError::input(format!(
                "duplicate document id '{}'",
                pair[0].0
            )));
        }

        let token_lists = self.tokenize_all(&documents)?;

        let mut global = FrequencyTable::new();
        let mut top_per_document = Vec::new();
        let mut summaries = Vec::with_capacity(documents.len());

        for ((id, _), tokens) in documents.iter().zip(token_lists) {
            let per_doc: FrequencyTable = tokens.iter().collect();
            debug!(
                "{id}: {} tokens, {} distinct",
                per_doc.total(),
                per_doc.len()
            );

            global.merge(&per_doc);
            top_per_document.extend(
                per_doc
                    .ranked()
                    .top(self.top_n)
                    .iter()
                    .map(|entry| DocumentEntry::new(id.as_str(), entry.word.as_str(), entry.freq)),
            );
            summaries.push(DocumentSummary {
                id: id.clone(),
                token_count: per_doc.total(),
                distinct_count: per_doc.len(),
            });
        }

        let ranked = global.ranked();
        info!(
            "analyzed {} documents: {} tokens, {} distinct",
            summaries.len(),
            global.total(),
            global.len()
        );

        Ok(AnalysisReport {
            top_global: ranked.top(self.top_n),
            global: ranked,
            top_per_document,
            documents: summaries,
            total_tokens: global.total(),
        })
    }

    /// Tokenize every document, keeping the input order.
    fn tokenize_all<V>(&self, documents: &[(String, V)]) -> Result<Vec<Vec<String>>>
    where
        V: AsRef<str> + Sync,
    {
        if self.parallel {
            documents
                .par_iter()
                .map(|(_, text)| self.normalizer.tokenize(text.as_ref()))
                .collect()
        } else {
            documents
                .iter()
                .map(|(_, text)| self.normalizer.tokenize(text.as_ref()))
                .collect()
        }
    }
}

/// Analyze documents with a configuration in one call.
pub fn analyze<I, K, V>(documents: I, config: &AnalysisConfig) -> Result<AnalysisReport>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str> + Sync,
{
    Aggregator::new(config)?.analyze(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregator(top_n: usize, stop_words: &[&str]) -> Aggregator {
        let normalizer = Normalizer::with_stop_words(3, stop_words.iter().copied()).unwrap();
        Aggregator::with_normalizer(normalizer, top_n)
    }

    fn words(table: &RankedTable) -> Vec<&str> {
        table.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let report = aggregator(5, &[])
            .analyze(Vec::<(String, String)>::new())
            .unwrap();

        assert!(report.global.is_empty());
        assert!(report.top_global.is_empty());
        assert!(report.top_per_document.is_empty());
        assert_eq!(report.total_tokens, 0);
    }

    #[test]
    fn test_counts_and_conservation() {
        let docs = vec![
            ("one.txt", "apple banana apple cherry"),
            ("two.txt", "banana banana date apple"),
        ];
        let report = aggregator(10, &[]).analyze(docs).unwrap();

        assert_eq!(report.global.get("apple"), 3);
        assert_eq!(report.global.get("banana"), 3);
        assert_eq!(report.global.get("cherry"), 1);
        assert_eq!(report.global.get("date"), 1);
        assert_eq!(report.total_tokens, 8);

        for entry in &report.global {
            let per_doc_sum: u64 = report
                .top_per_document
                .iter()
                .filter(|row| row.word == entry.word)
                .map(|row| row.freq)
                .sum();
            assert_eq!(per_doc_sum, entry.freq);
        }

        let summed: u64 = report.documents.iter().map(|d| d.token_count).sum();
        assert_eq!(summed, report.total_tokens);
    }

    #[test]
    fn test_global_tie_break_follows_document_order() {
        // "zebra" first occurs in a.txt, "yak" in b.txt; both appear twice.
        let docs = vec![("b.txt", "yak zebra"), ("a.txt", "zebra yak")];
        let report = aggregator(10, &[]).analyze(docs).unwrap();

        assert_eq!(words(&report.global), vec!["zebra", "yak"]);
    }

    #[test]
    fn test_per_document_tie_break_is_local() {
        let docs = vec![("a.txt", "cat dog"), ("b.txt", "dog cat")];
        let report = aggregator(10, &[]).analyze(docs).unwrap();

        let rows: Vec<(&str, &str)> = report
            .top_per_document
            .iter()
            .map(|r| (r.document.as_str(), r.word.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("a.txt", "cat"),
                ("a.txt", "dog"),
                ("b.txt", "dog"),
                ("b.txt", "cat")
            ]
        );
    }

    #[test]
    fn test_top_n_zero() {
        let report = aggregator(0, &[]).analyze(vec![("a", "one two two")]).unwrap();

        assert!(report.top_global.is_empty());
        assert!(report.top_per_document.is_empty());
        assert_eq!(words(&report.global), vec!["two", "one"]);
    }

    #[test]
    fn test_top_n_larger_than_vocabulary() {
        let report = aggregator(100, &[]).analyze(vec![("a", "one two two")]).unwrap();

        assert_eq!(report.top_global, report.global);
        assert_eq!(report.top_per_document.len(), 2);
    }

    #[test]
    fn test_top_n_truncates() {
        let report = aggregator(1, &[])
            .analyze(vec![("a", "red red blue"), ("b", "green blue blue")])
            .unwrap();

        assert_eq!(words(&report.top_global), vec!["blue"]);
        let rows: Vec<&str> = report
            .top_per_document
            .iter()
            .map(|r| r.word.as_str())
            .collect();
        assert_eq!(rows, vec!["red", "blue"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = aggregator(5, &[])
            .analyze(vec![("same", "first text"), ("same", "second text")])
            .unwrap_err();

        assert!(matches!(err, WordFreqError::Input(_)));
        assert!(err.to_string().contains("same"));
    }

    #[test]
    fn test_document_without_tokens_is_summarized() {
        let report = aggregator(5, &["the"])
            .analyze(vec![("a", "the 12 !!"), ("b", "words here")])
            .unwrap();

        assert_eq!(report.documents.len(), 2);
        assert_eq!(report.documents[0].token_count, 0);
        assert_eq!(report.documents[0].distinct_count, 0);
        assert!(report.top_per_document.iter().all(|r| r.document == "b"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let docs: Vec<(String, String)> = (0..40)
            .map(|i| {
                (
                    format!("doc{i:02}"),
                    format!("alpha beta gamma delta {} epsilon zeta", "beta ".repeat(i % 4)),
                )
            })
            .collect();

        let sequential = aggregator(3, &[]).analyze(docs.clone()).unwrap();
        let parallel = aggregator(3, &[]).with_parallel(true).analyze(docs).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_idempotent() {
        let docs = vec![("x", "some words repeat words"), ("y", "more words here")];
        let agg = aggregator(2, &[]);

        assert_eq!(
            agg.analyze(docs.clone()).unwrap(),
            agg.analyze(docs).unwrap()
        );
    }

    #[test]
    fn test_analyze_with_config_unknown_language() {
        let config = AnalysisConfig::default().with_language("klingon");
        let err = analyze(vec![("a", "text")], &config).unwrap_err();
        assert!(matches!(err, WordFreqError::Configuration(_)));
    }
}
