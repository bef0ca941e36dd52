//! # ircsv-npl
//!
//! Parsers for the NPL test collection, whose files use a numeric-delimited
//! layout instead of `.I`/`.W` markers:
//!
//! - a line holding only `/` closes a record,
//! - a line of ASCII digits is a record ID,
//! - every other non-blank line is free text (documents, queries) or a list of
//!   document IDs (judgments).
//!
//! ## Quick Start
//!
//! ```no_run
//! use ircsv_npl::{parse_documents_file, parse_judgments_file, parse_queries_file};
//!
//! let docs = parse_documents_file("collections/NPL/npl.ALL")?;
//! let queries = parse_queries_file("collections/NPL/npl.QRY")?;
//! let qrels = parse_judgments_file("collections/NPL/npl.REL")?;
//! # Ok::<(), ircsv_core::ConversionError>(())
//! ```
//!
//! ## Malformed Input
//!
//! Nothing in an NPL file is fatal: tokens that are not digit runs are text
//! (documents, queries) or silently skipped (judgments). A digit run too large
//! for a [`RecordId`](ircsv_core::RecordId) is treated as non-numeric.

pub mod judgments;
pub mod text;

pub use judgments::{parse_judgments_file, parse_judgments_str, GroupedJudgmentParser};
pub use text::{
    parse_documents_file, parse_documents_str, parse_queries_file, parse_queries_str,
    DocumentTextParser, NumberedQueryParser, NumberedRecord, NumberedTextParser,
};

use ircsv_core::RecordId;

/// Line closing a record or judgment group
pub const SEPARATOR: &str = "/";

/// True for a (trimmed) separator line
#[inline]
#[must_use]
pub fn is_separator(line: &str) -> bool {
    line == SEPARATOR
}

/// Integer value of a non-empty run of ASCII digits
///
/// Returns `None` for anything else, including digit runs that overflow.
#[must_use]
pub fn parse_digits(token: &str) -> Option<RecordId> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
