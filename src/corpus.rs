//! Loading documents from a folder of plain-text files.
//!
//! A [`Corpus`] maps document ids to text. Ids are unique by construction
//! and iterate in lexicographic order, the order the aggregator processes
//! documents in.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{Result, WordFreqError};

/// File extension of the documents picked up by [`Corpus::from_dir`].
pub const DOCUMENT_EXTENSION: &str = "txt";

/// A set of named plain-text documents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: BTreeMap<String, String>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.txt` regular file directly inside `dir`.
    ///
    /// The document id is the file name. Byte sequences that are not valid
    /// UTF-8 are dropped; the rest of the file is kept. Entries that cannot
    /// be read are logged and skipped.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(WordFreqError::input(format!(
                "input folder {} does not exist or is not a directory",
                dir.display()
            )));
        }

        let mut corpus = Corpus::new();
        for entry in fs::read_dir(dir)? {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    warn!("skipping unreadable entry in {}: {e}", dir.display());
                    continue;
                }
            };
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => {}
                Ok(_) => {
                    debug!("skipping {}: not a regular file", path.display());
                    continue;
                }
                Err(e) => {
                    warn!("skipping {}: {e}", path.display());
                    continue;
                }
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                warn!("skipping {}: file name is not valid UTF-8", path.display());
                continue;
            };

            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("skipping {name}: {e}");
                    continue;
                }
            };
            let (text, dropped) = decode_utf8_dropping_invalid(&bytes);
            if dropped > 0 {
                warn!("{name}: dropped {dropped} bytes of invalid UTF-8");
            }
            debug!("loaded {name} ({} bytes)", bytes.len());
            corpus.insert(name, text);
        }

        info!("loaded {} documents from {}", corpus.len(), dir.display());
        Ok(corpus)
    }

    /// Add a document, returning the text it replaced, if any.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, id: K, text: V) -> Option<String> {
        self.documents.insert(id.into(), text.into())
    }

    /// Text of a document.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.documents.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document ids in processing order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// `(id, text)` pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (id, text) in iter {
            corpus.insert(id, text);
        }
        corpus
    }
}

impl IntoIterator for Corpus {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

/// Decode UTF-8, skipping invalid sequences. Returns the text and the number
/// of bytes skipped.
pub fn decode_utf8_dropping_invalid(bytes: &[u8]) -> (String, usize) {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0;
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                // `valid` is well-formed, so this borrows without replacing anything.
                text.push_str(&String::from_utf8_lossy(valid));
                let skip = e.error_len().unwrap_or(after.len());
                dropped += skip;
                rest = &after[skip..];
            }
        }
    }

    (text, dropped)
}
