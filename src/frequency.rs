//! Frequency tables and ranked views.
//!
//! A [`FrequencyTable`] remembers the order in which tokens were first
//! counted. Ranking is a stable sort by count, so tokens with equal counts
//! keep that first-occurrence order.
//!
//! # Examples
//!
//! ```
//! use wordfreq::frequency::FrequencyTable;
//!
//! let table: FrequencyTable = ["pear", "apple", "pear", "fig", "apple"]
//!     .into_iter()
//!     .collect();
//!
//! let ranked = table.ranked();
//! let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
//! assert_eq!(words, vec!["pear", "apple", "fig"]);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A `(word, freq)` row of a ranked table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub freq: u64,
}

impl RankedEntry {
    pub fn new<S: Into<String>>(word: S, freq: u64) -> Self {
        RankedEntry {
            word: word.into(),
            freq,
        }
    }
}

/// A `(document, word, freq)` row of the per-document top-N table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub document: String,
    pub word: String,
    pub freq: u64,
}

impl DocumentEntry {
    pub fn new<D: Into<String>, W: Into<String>>(document: D, word: W, freq: u64) -> Self {
        DocumentEntry {
            document: document.into(),
            word: word.into(),
            freq,
        }
    }
}

/// Token counts for one scope (a document, or the whole corpus).
///
/// Iteration yields tokens in first-occurrence order.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    index: AHashMap<String, usize>,
    entries: Vec<RankedEntry>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a token.
    pub fn add(&mut self, token: &str) {
        self.add_count(token, 1);
    }

    /// Count `count` occurrences of a token. A zero count is ignored, so the
    /// table never holds zero-count tokens.
    pub fn add_count(&mut self, token: &str, count: u64) {
        if count == 0 {
            return;
        }
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].freq += count,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push(RankedEntry::new(token, count));
            }
        }
        self.total += count;
    }

    /// Add every count of `other`, in `other`'s first-occurrence order.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for entry in &other.entries {
            self.add_count(&entry.word, entry.freq);
        }
    }

    /// Count for a token; zero when absent.
    pub fn get(&self, token: &str) -> u64 {
        self.index
            .get(token)
            .map_or(0, |&slot| self.entries[slot].freq)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no token has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate over the counts in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter()
    }

    /// All tokens sorted by count descending, ties in first-occurrence order.
    pub fn ranked(&self) -> RankedTable {
        let mut entries = self.entries.clone();
        // `sort_by` is stable, which is what keeps ties in first-occurrence order.
        entries.sort_by(|a, b| b.freq.cmp(&a.freq));
        RankedTable { entries }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for token in iter {
            table.add(token.as_ref());
        }
        table
    }
}

/// Rows sorted by count descending with a deterministic tie-break.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedTable {
    entries: Vec<RankedEntry>,
}

impl RankedTable {
    /// The first `n` rows (all rows when fewer than `n`).
    pub fn top(&self, n: usize) -> RankedTable {
        RankedTable {
            entries: self.entries.iter().take(n).cloned().collect(),
        }
    }

    /// Count for a word; zero when absent.
    pub fn get(&self, word: &str) -> u64 {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map_or(0, |e| e.freq)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RankedEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a RankedTable {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<RankedEntry>> for RankedTable {
    fn from(entries: Vec<RankedEntry>) -> Self {
        RankedTable { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(table: &RankedTable) -> Vec<&str> {
        table.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_counting() {
        let table: FrequencyTable = ["a", "b", "a", "c", "a", "b"].into_iter().collect();

        assert_eq!(table.get("a"), 3);
        assert_eq!(table.get("b"), 2);
        assert_eq!(table.get("c"), 1);
        assert_eq!(table.get("missing"), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_iteration_in_first_occurrence_order() {
        let table: FrequencyTable = ["z", "y", "z", "x"].into_iter().collect();
        let order: Vec<&str> = table.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_ranked_ties_keep_first_occurrence() {
        let table: FrequencyTable = ["delta", "beta", "alpha", "beta", "alpha", "gamma"]
            .into_iter()
            .collect();

        let ranked = table.ranked();
        assert_eq!(words(&ranked), vec!["beta", "alpha", "delta", "gamma"]);
        assert_eq!(ranked.get("beta"), 2);
    }

    #[test]
    fn test_merge_sums_counts() {
        let mut global = FrequencyTable::new();
        let first: FrequencyTable = ["cat", "dog", "cat"].into_iter().collect();
        let second: FrequencyTable = ["bird", "dog"].into_iter().collect();

        global.merge(&first);
        global.merge(&second);

        assert_eq!(global.get("cat"), 2);
        assert_eq!(global.get("dog"), 2);
        assert_eq!(global.get("bird"), 1);
        assert_eq!(global.total(), first.total() + second.total());

        let order: Vec<&str> = global.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_zero_count_ignored() {
        let mut table = FrequencyTable::new();
        table.add_count("ghost", 0);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_top() {
        let table: FrequencyTable = ["a", "a", "b", "c"].into_iter().collect();
        let ranked = table.ranked();

        assert!(ranked.top(0).is_empty());
        assert_eq!(words(&ranked.top(2)), vec!["a", "b"]);
        assert_eq!(ranked.top(10).len(), 3);
    }

    #[test]
    fn test_ranked_serializes_as_rows() {
        let table: FrequencyTable = ["hello", "hello", "world"].into_iter().collect();
        let json = serde_json::to_string(&table.ranked()).unwrap();
        assert_eq!(
            json,
            r#"[{"word":"hello","freq":2},{"word":"world","freq":1}]"#
        );
    }
}
