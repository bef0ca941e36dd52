//! # ircsv-core
//!
//! Shared building blocks for converting legacy information-retrieval test
//! collections (CRAN, CISI, MED, NPL, ...) into CSV.
//!
//! ## Record Types
//!
//! | Type | Columns | Produced from |
//! |------|---------|---------------|
//! | [`DocumentRecord`] | `DocID, Title, Author, Source, Text` | tagged `.ALL` |
//! | [`DocumentText`] | `DocID, Text` | numeric-delimited documents |
//! | [`QueryRecord`] | `QueryID, Text` | `.QRY` (both families) |
//! | [`RelevanceJudgment`] | `QueryID, DocID, Relevance` | `.REL` (both families) |
//!
//! Columns are always present and always in this order; fields that never
//! received text are written as empty strings.
//!
//! ## Writing a Table
//!
//! ```no_run
//! use ircsv_core::{QueryRecord, Table};
//!
//! let table = Table::Queries(vec![QueryRecord {
//!     query_id: 1,
//!     text: " what similarity laws must be obeyed".to_string(),
//! }]);
//! table.write_csv("collections/cran_queries.csv")?;
//! # Ok::<(), ircsv_core::ConversionError>(())
//! ```
//!
//! ## Error Handling
//!
//! - A missing input file is logged and treated as an empty collection file
//!   (see [`input::open_input`]).
//! - A malformed tagged record aborts the conversion of that file with
//!   [`ConversionError::Parse`].
//! - An unknown file-type selector is rejected by [`FileType::from_str`] before
//!   any file is opened.
//!
//! [`FileType::from_str`]: std::str::FromStr::from_str

pub mod error;
pub mod field;
pub mod format;
pub mod input;
pub mod record;
pub mod table;

pub use error::{ConversionError, ParseError, Result};
pub use field::{FieldKind, FieldValues, RECORD_MARKER};
pub use format::{CollectionFormat, FileType};
pub use input::{open_input, parse_file, LineParser};
pub use record::{
    CsvRecord, DocumentRecord, DocumentText, QueryRecord, RecordId, RelevanceJudgment,
    DEFAULT_RELEVANCE,
};
pub use table::Table;
