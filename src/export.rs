//! Writing analysis reports to disk.
//!
//! Each table becomes one CSV file, rows in the order the aggregator
//! produced them:
//!
//! | File | Columns |
//! |---|---|
//! | `word_frequencies_global.csv` | `word,freq` |
//! | `top_global.csv` | `word,freq` |
//! | `top_per_document.csv` | `document,word,freq` |
//!
//! Optionally the whole report is also written as `report.json`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use log::info;

use crate::aggregator::AnalysisReport;
use crate::error::Result;
use crate::frequency::{DocumentEntry, RankedTable};

pub const GLOBAL_FILE: &str = "word_frequencies_global.csv";
pub const TOP_GLOBAL_FILE: &str = "top_global.csv";
pub const TOP_PER_DOCUMENT_FILE: &str = "top_per_document.csv";
pub const REPORT_JSON_FILE: &str = "report.json";

/// Writes report tables into an output directory.
#[derive(Clone, Debug)]
pub struct ReportWriter {
    output_dir: PathBuf,
    write_json: bool,
}

impl ReportWriter {
    /// Create a writer for `output_dir`. The directory is created on write.
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        ReportWriter {
            output_dir: output_dir.into(),
            write_json: false,
        }
    }

    /// Also write the whole report as pretty-printed JSON.
    pub fn with_json(mut self, write_json: bool) -> Self {
        self.write_json = write_json;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write every table, returning the paths written.
    pub fn write(&self, report: &AnalysisReport) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let mut written = vec![
            self.write_file(GLOBAL_FILE, |out| write_ranked_csv(out, &report.global))?,
            self.write_file(TOP_GLOBAL_FILE, |out| {
                write_ranked_csv(out, &report.top_global)
            })?,
            self.write_file(TOP_PER_DOCUMENT_FILE, |out| {
                write_document_csv(out, &report.top_per_document)
            })?,
        ];

        if self.write_json {
            written.push(self.write_file(REPORT_JSON_FILE, |out| {
                serde_json::to_writer_pretty(&mut *out, report)?;
                writeln!(out)?;
                Ok(())
            })?);
        }

        info!(
            "wrote {} report files to {}",
            written.len(),
            self.output_dir.display()
        );
        Ok(written)
    }

    fn write_file<F>(&self, name: &str, body: F) -> Result<PathBuf>
    where
        F: FnOnce(&mut BufWriter<File>) -> Result<()>,
    {
        let path = self.output_dir.join(name);
        let mut out = BufWriter::new(File::create(&path)?);
        body(&mut out)?;
        out.flush()?;
        Ok(path)
    }
}

const RANKED_HEADER: [&str; 2] = ["word", "freq"];
const DOCUMENT_HEADER: [&str; 3] = ["document", "word", "freq"];

/// CSV writer with `\n` line endings. Headers are written explicitly so
/// empty tables still get one.
fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out)
}

/// Write a `word,freq` table.
pub fn write_ranked_csv<W: Write>(out: W, table: &RankedTable) -> Result<()> {
    let mut writer = csv_writer(out);
    writer.write_record(RANKED_HEADER)?;
    for entry in table {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a `document,word,freq` table.
pub fn write_document_csv<W: Write>(out: W, rows: &[DocumentEntry]) -> Result<()> {
    let mut writer = csv_writer(out);
    writer.write_record(DOCUMENT_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
