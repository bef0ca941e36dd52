//! # ircsv-tagged
//!
//! Parsers for tagged-record IR test collections: the Cranfield family of
//! `.ALL`, `.QRY` and `.REL` files (CRAN, CISI, MED, CACM, ...).
//!
//! ## Format
//!
//! | Marker | Meaning |
//! |--------|---------|
//! | `.I <id>` | Start of a record; `<id>` must be an integer |
//! | `.T` | Title |
//! | `.A` | Author(s) |
//! | `.B` | Bibliographic source |
//! | `.W` | Body text |
//!
//! Lines following a field marker are appended to that field, each preceded by
//! a single space, until another marker is seen. Blank lines are skipped.
//! Query files only recognise `.W`.
//!
//! ```text
//! .I 1
//! .T
//! experimental investigation of the aerodynamics of a
//! wing in a slipstream .
//! .A
//! brenckman,m.
//! .W
//! experimental investigation of the aerodynamics of a
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use ircsv_tagged::{parse_all_file, parse_qry_file, parse_rel_file};
//!
//! let docs = parse_all_file("collections/cran/cran.ALL")?;
//! let queries = parse_qry_file("collections/cran/cran.QRY")?;
//! let qrels = parse_rel_file("collections/cran/cran.REL")?;
//!
//! println!("{} docs, {} queries, {} judgments", docs.len(), queries.len(), qrels.len());
//! # Ok::<(), ircsv_core::ConversionError>(())
//! ```
//!
//! ## Error Handling
//!
//! - Missing file: logged, empty result.
//! - `.I` line without an integer ID: the whole file is rejected with
//!   `ConversionError::Parse`. There is no skip-and-continue for tagged files.

pub mod documents;
pub mod judgments;
pub mod parser;
pub mod queries;

pub use documents::{parse_all_file, parse_all_str, DocumentParser};
pub use judgments::{parse_rel_file, parse_rel_str, JudgmentParser};
pub use parser::{TaggedParser, TaggedRecord};
pub use queries::{parse_qry_file, parse_qry_str, QueryParser};
