//! `.ALL` document files

use crate::parser::{TaggedParser, TaggedRecord};
use ircsv_core::{parse_file, DocumentRecord, FieldKind, LineParser, ParseError, Result};
use std::path::Path;

/// Parser producing [`DocumentRecord`]s
#[derive(Debug, Clone)]
pub struct DocumentParser {
    inner: TaggedParser,
}

impl DocumentParser {
    /// Create a document parser
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: TaggedParser::documents(),
        }
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl From<TaggedRecord> for DocumentRecord {
    fn from(mut record: TaggedRecord) -> Self {
        Self {
            doc_id: record.id,
            title: record.fields.take(FieldKind::Title),
            author: record.fields.take(FieldKind::Author),
            source: record.fields.take(FieldKind::Source),
            text: record.fields.take(FieldKind::Text),
        }
    }
}

impl LineParser for DocumentParser {
    type Output = Vec<DocumentRecord>;

    #[inline]
    fn push_line(&mut self, line: &str) -> std::result::Result<(), ParseError> {
        self.inner.push_line(line)
    }

    fn finish(self) -> Vec<DocumentRecord> {
        self.inner.finish().into_iter().map(Into::into).collect()
    }
}

/// Parse a tagged `.ALL` file into documents
///
/// A missing file is logged and yields an empty list.
///
/// # Errors
///
/// Returns `ConversionError::Parse` if a `.I` line has no integer ID, and
/// `ConversionError::ReadError` if the file exists but cannot be read.
///
/// # Examples
///
/// ```no_run
/// use ircsv_tagged::parse_all_file;
///
/// let docs = parse_all_file("collections/cran/cran.ALL")?;
/// println!("{} documents", docs.len());
/// # Ok::<(), ircsv_core::ConversionError>(())
/// ```
#[must_use = "this function returns parsed documents that should be processed"]
pub fn parse_all_file<P: AsRef<Path>>(path: P) -> Result<Vec<DocumentRecord>> {
    let path = path.as_ref();
    let docs = parse_file(path, DocumentParser::new())?.unwrap_or_default();
    log::debug!("Parsed {} documents from {}", docs.len(), path.display());
    Ok(docs)
}

/// Parse tagged document content held in memory
///
/// # Errors
///
/// Returns `ParseError` if a `.I` line has no integer ID.
pub fn parse_all_str(content: &str) -> std::result::Result<Vec<DocumentRecord>, ParseError> {
    DocumentParser::new().parse_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ircsv_core::ConversionError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_document_row() {
        let docs = parse_all_str(
            ".I 1\n.T Title text\n.A Author name\n.W Body line one\nBody line two\n",
        )
        .unwrap();

        assert_eq!(
            docs,
            vec![DocumentRecord {
                doc_id: 1,
                title: " Title text".to_string(),
                author: " Author name".to_string(),
                source: String::new(),
                text: " Body line one Body line two".to_string(),
            }]
        );
    }

    #[test]
    fn test_cranfield_layout() {
        let content = "\
.I 1
.T
experimental investigation of the aerodynamics of a
wing in a slipstream .
.A
brenckman,m.
.B
j. ae. scs. 25, 1958, 324.
.W
experimental investigation of the aerodynamics of a
wing in a slipstream .
.I 2
.T
simple shear flow past a flat plate in an incompressible fluid of small
viscosity .
.A
ting-yili
.B
department of aeronautical engineering, rensselaer polytechnic
institute
.W
in the study of high-speed viscous flow past a two-dimensional body
";
        let docs = parse_all_str(content).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(
            docs[0].title,
            " experimental investigation of the aerodynamics of a wing in a slipstream ."
        );
        assert_eq!(docs[1].doc_id, 2);
        assert_eq!(docs[1].author, " ting-yili");
        assert_eq!(
            docs[1].source,
            " department of aeronautical engineering, rensselaer polytechnic institute"
        );
    }

    #[test]
    fn test_file_order_is_preserved() {
        let docs = parse_all_str(".I 30\n.W\nc\n.I 2\n.W\na\n.I 15\n.W\nb\n").unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.doc_id).collect();
        assert_eq!(ids, vec![30, 2, 15]);
    }

    #[test]
    fn test_parse_all_file() {
        let file = create_temp_file(".I 1\n.W\nalpha\n.I 2\n.W\nbeta\n");
        let docs = parse_all_file(file.path()).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].text, " beta");
    }

    #[test]
    fn test_parse_all_file_missing() {
        let docs = parse_all_file("nonexistent/cran.ALL").unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_parse_all_file_malformed_id() {
        let file = create_temp_file(".I 1\n.W\nalpha\n.I two\n");
        let err = parse_all_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::Parse {
                source: ParseError::InvalidId { line: 4, .. },
                ..
            }
        ));
    }
}
