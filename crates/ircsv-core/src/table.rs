//! Tabular output: record sequences and their CSV serialization
//!
//! Output follows the layout downstream tooling expects from the classic
//! collection dumps: comma-separated, `\n` line endings, a header row with the
//! fixed column names, one row per record in input order, no index column.

use crate::error::{ConversionError, Result};
use crate::record::{CsvRecord, DocumentRecord, DocumentText, QueryRecord, RelevanceJudgment};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Parsed contents of one collection file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Table {
    /// Documents from a tagged `.ALL` file
    Documents(Vec<DocumentRecord>),
    /// Documents from a numeric-delimited file
    DocumentTexts(Vec<DocumentText>),
    /// Queries
    Queries(Vec<QueryRecord>),
    /// Relevance judgments
    Judgments(Vec<RelevanceJudgment>),
}

impl Table {
    /// Number of rows (excluding the header)
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Documents(rows) => rows.len(),
            Self::DocumentTexts(rows) => rows.len(),
            Self::Queries(rows) => rows.len(),
            Self::Judgments(rows) => rows.len(),
        }
    }

    /// True when there is nothing to write
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Header columns of this table
    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Documents(_) => DocumentRecord::COLUMNS,
            Self::DocumentTexts(_) => DocumentText::COLUMNS,
            Self::Queries(_) => QueryRecord::COLUMNS,
            Self::Judgments(_) => RelevanceJudgment::COLUMNS,
        }
    }

    /// Serialize the table (header included) into `writer`
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Csv` if a row cannot be written.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<W> {
        match self {
            Self::Documents(rows) => write_rows(writer, rows),
            Self::DocumentTexts(rows) => write_rows(writer, rows),
            Self::Queries(rows) => write_rows(writer, rows),
            Self::Judgments(rows) => write_rows(writer, rows),
        }
    }

    /// Render the table as a CSV string
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Csv` if a row cannot be serialized.
    pub fn to_csv_string(&self) -> Result<String> {
        let bytes = self.write_to(Vec::new())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Write the table to `path`, creating missing parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::WriteError` if the directory or file cannot be
    /// created or flushed, and `ConversionError::Csv` on serialization failure.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConversionError::write_error(parent, e))?;
        }

        let file = File::create(path).map_err(|e| ConversionError::write_error(path, e))?;
        let mut writer = self.write_to(BufWriter::new(file))?;
        writer
            .flush()
            .map_err(|e| ConversionError::write_error(path, e))?;

        log::debug!("Wrote {} rows to {}", self.len(), path.display());
        Ok(())
    }
}

fn write_rows<W: Write, T: CsvRecord>(writer: W, rows: &[T]) -> Result<W> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(T::COLUMNS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer
        .into_inner()
        .map_err(|e| ConversionError::Csv(csv::Error::from(e.into_error())))
}
