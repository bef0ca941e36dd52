//! # ircsv-backend
//!
//! Conversion of IR test-collection files to CSV.
//!
//! - [`convert_to_csv`] converts one file, given its format family and type.
//! - [`CollectionRunner`] converts every file of a list of
//!   [`DatasetDescriptor`]s laid out under a base directory.
//!
//! ```no_run
//! use ircsv_backend::{default_datasets, CollectionRunner};
//!
//! let reports = CollectionRunner::new("./collections").run(&default_datasets());
//! for report in &reports {
//!     println!("{}: {} written, {} failed", report.dataset.name, report.written(), report.failed());
//! }
//! ```

pub mod collection;
pub mod converter;

pub use collection::{
    default_datasets, CollectionRunner, DatasetDescriptor, DatasetReport, FileReport,
    DEFAULT_BASE_PATH,
};
pub use converter::{convert_to_csv, convert_to_csv_str, parse_table, ConversionOutcome};
