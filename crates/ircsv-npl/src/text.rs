//! NPL document and query files
//!
//! ```text
//! 1
//! compact memories have flexible capacities  a digital data storage
//! system with capacity up to bits and random and or sequential access
//!    /
//! 2
//! ...
//! ```
//!
//! A bare-digit line starts a record; every other non-blank line up to the
//! next `/` or ID line is body text.

use crate::{is_separator, parse_digits};
use ircsv_core::{
    parse_file, DocumentText, LineParser, ParseError, QueryRecord, RecordId, Result,
};
use std::path::Path;

/// Row type built from an `(id, text)` pair
pub trait NumberedRecord {
    /// Build the row
    fn from_parts(id: RecordId, text: String) -> Self;
}

impl NumberedRecord for DocumentText {
    fn from_parts(doc_id: RecordId, text: String) -> Self {
        Self { doc_id, text }
    }
}

impl NumberedRecord for QueryRecord {
    fn from_parts(query_id: RecordId, text: String) -> Self {
        Self { query_id, text }
    }
}

/// Parser for numeric-delimited `(id, text)` records
///
/// A record whose text is still empty when it would be flushed is dropped, and
/// in that case the pending ID is kept across a `/` line.
#[derive(Debug, Clone)]
pub struct NumberedTextParser<T> {
    records: Vec<T>,
    current_id: Option<RecordId>,
    current_text: Vec<String>,
}

impl<T: NumberedRecord> NumberedTextParser<T> {
    /// Create an empty parser
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            current_id: None,
            current_text: Vec::new(),
        }
    }

    /// Emit the pending record if it has both an ID and text
    ///
    /// Returns true when a record was emitted.
    fn flush(&mut self) -> bool {
        match self.current_id {
            Some(id) if !self.current_text.is_empty() => {
                let text = self.current_text.join(" ").trim().to_string();
                self.records.push(T::from_parts(id, text));
                self.current_text.clear();
                true
            }
            _ => false,
        }
    }

    fn push(&mut self, line: &str) {
        let line = line.trim();

        if is_separator(line) {
            if self.flush() {
                self.current_id = None;
            }
            return;
        }
        if line.is_empty() {
            return;
        }

        match parse_digits(line) {
            Some(id) => {
                self.flush();
                self.current_id = Some(id);
            }
            None => self.current_text.push(line.to_string()),
        }
    }
}

impl<T: NumberedRecord> Default for NumberedTextParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NumberedRecord> LineParser for NumberedTextParser<T> {
    type Output = Vec<T>;

    fn push_line(&mut self, line: &str) -> std::result::Result<(), ParseError> {
        self.push(line);
        Ok(())
    }

    fn finish(mut self) -> Vec<T> {
        self.flush();
        self.records
    }
}

/// Parser for NPL documents
pub type DocumentTextParser = NumberedTextParser<DocumentText>;

/// Parser for NPL queries
pub type NumberedQueryParser = NumberedTextParser<QueryRecord>;

fn parse_numbered_str<T: NumberedRecord>(content: &str) -> Vec<T> {
    let mut parser = NumberedTextParser::<T>::new();
    for line in content.lines() {
        parser.push(line);
    }
    parser.finish()
}

/// Parse an NPL document file (`npl.ALL`)
///
/// A missing file is logged and yields an empty list.
///
/// # Errors
///
/// Returns `ConversionError::ReadError` if the file exists but cannot be read.
#[must_use = "this function returns parsed documents that should be processed"]
pub fn parse_documents_file<P: AsRef<Path>>(path: P) -> Result<Vec<DocumentText>> {
    let path = path.as_ref();
    let docs = parse_file(path, DocumentTextParser::new())?.unwrap_or_default();
    log::debug!("Parsed {} documents from {}", docs.len(), path.display());
    Ok(docs)
}

/// Parse an NPL query file (`npl.QRY`)
///
/// A missing file is logged and yields an empty list.
///
/// # Errors
///
/// Returns `ConversionError::ReadError` if the file exists but cannot be read.
#[must_use = "this function returns parsed queries that should be processed"]
pub fn parse_queries_file<P: AsRef<Path>>(path: P) -> Result<Vec<QueryRecord>> {
    let path = path.as_ref();
    let queries = parse_file(path, NumberedQueryParser::new())?.unwrap_or_default();
    log::debug!("Parsed {} queries from {}", queries.len(), path.display());
    Ok(queries)
}

/// Parse NPL document content held in memory
///
/// Non-numeric lines are text, so this never fails.
#[must_use]
pub fn parse_documents_str(content: &str) -> Vec<DocumentText> {
    parse_numbered_str(content)
}

/// Parse NPL query content held in memory
#[must_use]
pub fn parse_queries_str(content: &str) -> Vec<QueryRecord> {
    parse_numbered_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn docs(content: &str) -> Vec<DocumentText> {
        parse_documents_str(content)
    }

    #[test]
    fn test_npl_documents() {
        let content = "\
1
compact memories have flexible capacities  a digital data storage
system with capacity up to bits and random and or sequential access
   /
2
an electronic analogue computer for solving systems of linear equations
   /
";
        let parsed = docs(content);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].doc_id, 1);
        assert_eq!(
            parsed[0].text,
            "compact memories have flexible capacities  a digital data storage system with capacity up to bits and random and or sequential access"
        );
        assert_eq!(parsed[1].doc_id, 2);
    }

    #[test]
    fn test_last_record_without_separator() {
        let parsed = docs("1\nfirst\n/\n2\nsecond\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].text, "second");
    }

    #[test]
    fn test_new_id_flushes_previous_record() {
        let parsed = docs("1\nfirst\n2\nsecond\n");
        let ids: Vec<_> = parsed.iter().map(|d| d.doc_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_record_without_text_is_dropped() {
        let parsed = docs("1\n/\n2\ntext\n/\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].doc_id, 2);
    }

    #[test]
    fn test_pending_id_survives_separator_without_text() {
        let parsed = docs("5\n/\nlate text\n/\n");
        assert_eq!(parsed, vec![DocumentText::from_parts(5, "late text".to_string())]);
    }

    #[test]
    fn test_group_without_id_or_text_is_empty() {
        assert!(docs("/\n\n/\n").is_empty());
        assert!(docs("").is_empty());
    }

    #[test]
    fn test_text_before_first_id_joins_first_record() {
        let parsed = docs("orphan\n3\nbody\n/\n");
        assert_eq!(parsed[0].text, "orphan body");
    }

    #[test]
    fn test_mixed_digit_line_is_text() {
        let parsed = docs("4\n12 bit words\n/\n");
        assert_eq!(parsed[0].text, "12 bit words");
    }

    #[test]
    fn test_oversized_digit_line_is_text() {
        let parsed = docs("4\n99999999999999999999999\n/\n");
        assert_eq!(parsed[0].doc_id, 4);
        assert_eq!(parsed[0].text, "99999999999999999999999");
    }

    #[test]
    fn test_npl_queries() {
        let content = "1\nmeasurement of dielectric constant of liquids by the use of microwave techniques\n   /\n2\nmathematical analysis and design details of waveguide fed microwave radiations\n   /\n";
        let queries = parse_queries_str(content);
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].query_id, 2);
        assert!(queries[0].text.starts_with("measurement of dielectric"));
    }

    #[test]
    fn test_parse_documents_file_crlf() {
        let file = create_temp_file("1\r\ncompact memories\r\nhave flexible capacities\r\n   /\r\n2\r\nthe methods\r\n   /\r\n");

        let parsed = parse_documents_file(file.path()).unwrap();
        assert_eq!(
            parsed,
            vec![
                DocumentText::from_parts(1, "compact memories have flexible capacities".to_string()),
                DocumentText::from_parts(2, "the methods".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_queries_file_crlf() {
        let file = create_temp_file("1\r\nmeasurement of dielectric constant\r\n   /\r\n");

        let queries = parse_queries_file(file.path()).unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].query_id, 1);
        assert_eq!(queries[0].text, "measurement of dielectric constant");
    }

    #[test]
    fn test_missing_files() {
        assert!(parse_documents_file("nonexistent/npl.ALL").unwrap().is_empty());
        assert!(parse_queries_file("nonexistent/npl.QRY").unwrap().is_empty());
    }
}
