//! Error types for collection conversion

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Line-level failure raised while scanning a collection file.
///
/// Line numbers are 1-based and count every physical line of the input,
/// including blank ones.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Record-start marker without an ID token (e.g. a bare `.I` line)
    #[error("line {line}: record marker has no ID")]
    MissingId {
        /// Line of the offending marker
        line: usize,
    },

    /// Record-start marker followed by a token that is not an integer
    #[error("line {line}: invalid record ID {token:?}")]
    InvalidId {
        /// Line of the offending marker
        line: usize,
        /// Token found where the ID was expected
        token: String,
    },

    /// Relevance-judgment line with a non-integer query ID, document ID or grade
    #[error("line {line}: invalid relevance judgment value {token:?}")]
    InvalidJudgment {
        /// Line of the offending judgment
        line: usize,
        /// Token that failed to parse
        token: String,
    },
}

/// Error type for converting a collection file to CSV
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Failed to read an input file (other than it being absent)
    #[error("Failed to read collection file {path}: {source}")]
    ReadError {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to create or write an output file
    #[error("Failed to write CSV file {path}: {source}")]
    WriteError {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input file is malformed; the conversion of that file is aborted
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// Path to the malformed file
        path: PathBuf,
        /// Line-level cause
        source: ParseError,
    },

    /// CSV serialization failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File-type selector is not one of `ALL`, `QRY`, `REL`
    #[error("Unknown file type {0:?}: expected one of ALL, QRY, REL")]
    UnknownFileType(String),

    /// Collection format selector is not one of `tagged`, `numeric`
    #[error("Unknown collection format {0:?}: expected tagged or numeric")]
    UnknownFormat(String),
}

impl ConversionError {
    /// Create a read error
    #[inline]
    #[must_use = "returns ConversionError for file read failures"]
    pub fn read_error<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a write error
    #[inline]
    #[must_use = "returns ConversionError for file write failures"]
    pub fn write_error<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Attach the input path to a line-level parse failure
    #[inline]
    #[must_use = "returns ConversionError for malformed input"]
    pub fn parse<P: AsRef<Path>>(path: P, source: ParseError) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
