//! Record types produced by the collection parsers
//!
//! Every record type serializes to a fixed set of CSV columns. Column names
//! follow the conventions of the classic IR collections (`DocID`, `QueryID`).

use serde::{Deserialize, Serialize};

/// Integer identifier of a document or query
pub type RecordId = i64;

/// Relevance grade used when a judgment does not carry one
pub const DEFAULT_RELEVANCE: i64 = 1;

/// A record with a fixed CSV column layout
pub trait CsvRecord: Serialize {
    /// Header row, in the order fields are serialized
    const COLUMNS: &'static [&'static str];
}

/// Document from a tagged `.ALL` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Document identifier from the `.I` line
    #[serde(rename = "DocID")]
    pub doc_id: RecordId,
    /// Accumulated `.T` text
    #[serde(rename = "Title")]
    pub title: String,
    /// Accumulated `.A` text
    #[serde(rename = "Author")]
    pub author: String,
    /// Accumulated `.B` text
    #[serde(rename = "Source")]
    pub source: String,
    /// Accumulated `.W` text
    #[serde(rename = "Text")]
    pub text: String,
}

impl CsvRecord for DocumentRecord {
    const COLUMNS: &'static [&'static str] = &["DocID", "Title", "Author", "Source", "Text"];
}

/// Document from a numeric-delimited (NPL) file: an ID and free text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentText {
    /// Document identifier
    #[serde(rename = "DocID")]
    pub doc_id: RecordId,
    /// Body lines joined by single spaces
    #[serde(rename = "Text")]
    pub text: String,
}

impl CsvRecord for DocumentText {
    const COLUMNS: &'static [&'static str] = &["DocID", "Text"];
}

/// Query from either format family
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Query identifier
    #[serde(rename = "QueryID")]
    pub query_id: RecordId,
    /// Query text
    #[serde(rename = "Text")]
    pub text: String,
}

impl CsvRecord for QueryRecord {
    const COLUMNS: &'static [&'static str] = &["QueryID", "Text"];
}

/// One (query, document) relevance judgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelevanceJudgment {
    /// Query identifier
    #[serde(rename = "QueryID")]
    pub query_id: RecordId,
    /// Judged document identifier
    #[serde(rename = "DocID")]
    pub doc_id: RecordId,
    /// Relevance grade ([`DEFAULT_RELEVANCE`] when the source has none)
    #[serde(rename = "Relevance")]
    pub relevance: i64,
}

impl RelevanceJudgment {
    /// Judgment with the default relevance grade
    #[inline]
    #[must_use]
    pub const fn relevant(query_id: RecordId, doc_id: RecordId) -> Self {
        Self {
            query_id,
            doc_id,
            relevance: DEFAULT_RELEVANCE,
        }
    }
}

impl CsvRecord for RelevanceJudgment {
    const COLUMNS: &'static [&'static str] = &["QueryID", "DocID", "Relevance"];
}
