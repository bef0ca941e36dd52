//! `.QRY` query files

use crate::parser::{TaggedParser, TaggedRecord};
use ircsv_core::{parse_file, FieldKind, LineParser, ParseError, QueryRecord, Result};
use std::path::Path;

/// Parser producing [`QueryRecord`]s; only `.W` switches fields
#[derive(Debug, Clone)]
pub struct QueryParser {
    inner: TaggedParser,
}

impl QueryParser {
    /// Create a query parser
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: TaggedParser::queries(),
        }
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl From<TaggedRecord> for QueryRecord {
    fn from(mut record: TaggedRecord) -> Self {
        Self {
            query_id: record.id,
            text: record.fields.take(FieldKind::Text),
        }
    }
}

impl LineParser for QueryParser {
    type Output = Vec<QueryRecord>;

    #[inline]
    fn push_line(&mut self, line: &str) -> std::result::Result<(), ParseError> {
        self.inner.push_line(line)
    }

    fn finish(self) -> Vec<QueryRecord> {
        self.inner.finish().into_iter().map(Into::into).collect()
    }
}

/// Parse a tagged `.QRY` file into queries
///
/// A missing file is logged and yields an empty list.
///
/// # Errors
///
/// Returns `ConversionError::Parse` if a `.I` line has no integer ID, and
/// `ConversionError::ReadError` if the file exists but cannot be read.
#[must_use = "this function returns parsed queries that should be processed"]
pub fn parse_qry_file<P: AsRef<Path>>(path: P) -> Result<Vec<QueryRecord>> {
    let path = path.as_ref();
    let queries = parse_file(path, QueryParser::new())?.unwrap_or_default();
    log::debug!("Parsed {} queries from {}", queries.len(), path.display());
    Ok(queries)
}

/// Parse tagged query content held in memory
///
/// # Errors
///
/// Returns `ParseError` if a `.I` line has no integer ID.
pub fn parse_qry_str(content: &str) -> std::result::Result<Vec<QueryRecord>, ParseError> {
    QueryParser::new().parse_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cran_queries() {
        let content = "\
.I 001
.W
what similarity laws must be obeyed when constructing aeroelastic models
of heated high speed aircraft .
.I 002
.W
what are the structural and aeroelastic problems associated with flight
of high speed aircraft .
";
        let queries = parse_qry_str(content).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].query_id, 1);
        assert_eq!(
            queries[0].text,
            " what similarity laws must be obeyed when constructing aeroelastic models of heated high speed aircraft ."
        );
        assert_eq!(queries[1].query_id, 2);
    }

    #[test]
    fn test_query_without_text() {
        let queries = parse_qry_str(".I 5\n.I 6\n.W\nsix\n").unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].text, "");
        assert_eq!(queries[1].text, " six");
    }

    #[test]
    fn test_parse_qry_file_missing() {
        assert!(parse_qry_file("nonexistent/cran.QRY").unwrap().is_empty());
    }
}
