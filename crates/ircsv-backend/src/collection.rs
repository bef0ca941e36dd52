//! Collection driver: convert every file of a list of datasets
//!
//! ## Directory Layout
//!
//! ```text
//! <base>/
//!   cran/cran.ALL  cran/cran.QRY  cran/cran.REL
//!   NPL/npl.ALL    NPL/npl.QRY    NPL/npl.REL
//!   cran_docs.csv  cran_queries.csv  cran_qrels.csv   <- written
//!   npl_docs.csv   npl_queries.csv   npl_qrels.csv    <- written
//! ```

use crate::converter::{convert_to_csv, ConversionOutcome};
use ircsv_core::{CollectionFormat, FileType, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default root directory of the collections
pub const DEFAULT_BASE_PATH: &str = "./collections";

/// One test collection to convert
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    /// Directory name under the base path (e.g. `cran`, `NPL`)
    pub name: String,

    /// File name prefix of the input files and output CSVs; defaults to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem: Option<String>,

    /// Format family of the collection files
    #[serde(default)]
    pub format: CollectionFormat,
}

impl DatasetDescriptor {
    /// Tagged-record collection whose files are named after the directory
    #[must_use]
    pub fn tagged(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stem: None,
            format: CollectionFormat::Tagged,
        }
    }

    /// Numeric-delimited collection with its own file prefix
    #[must_use]
    pub fn numeric(name: impl Into<String>, stem: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stem: Some(stem.into()),
            format: CollectionFormat::Numeric,
        }
    }

    /// File name prefix
    #[inline]
    #[must_use]
    pub fn stem(&self) -> &str {
        self.stem.as_deref().unwrap_or(&self.name)
    }

    /// `<base>/<name>/<stem>.<EXT>`
    #[must_use]
    pub fn input_path(&self, base: &Path, file_type: FileType) -> PathBuf {
        base.join(&self.name)
            .join(format!("{}.{}", self.stem(), file_type.extension()))
    }

    /// `<base>/<stem>_<suffix>.csv`
    #[must_use]
    pub fn output_path(&self, base: &Path, file_type: FileType) -> PathBuf {
        base.join(format!("{}_{}.csv", self.stem(), file_type.output_suffix()))
    }
}

/// The classic collections: CRAN, CISI and MED (tagged) plus NPL (numeric)
#[must_use]
pub fn default_datasets() -> Vec<DatasetDescriptor> {
    vec![
        DatasetDescriptor::tagged("cran"),
        DatasetDescriptor::tagged("CISI"),
        DatasetDescriptor::tagged("MED"),
        DatasetDescriptor::numeric("NPL", "npl"),
    ]
}

/// Outcome of converting one file of a dataset
#[derive(Debug)]
pub struct FileReport {
    /// Which file of the dataset
    pub file_type: FileType,
    /// Input path
    pub input: PathBuf,
    /// Output path
    pub output: PathBuf,
    /// Conversion result; an error only affects this file
    pub result: Result<ConversionOutcome>,
}

impl FileReport {
    /// True when the file converted (whether or not anything was written)
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// True when a CSV file was written
    #[must_use]
    pub fn written(&self) -> bool {
        self.result.as_ref().is_ok_and(|outcome| outcome.written)
    }
}

/// Outcome of converting every file of one dataset
#[derive(Debug)]
pub struct DatasetReport {
    /// The dataset converted
    pub dataset: DatasetDescriptor,
    /// One report per file type
    pub files: Vec<FileReport>,
}

impl DatasetReport {
    /// Number of files that failed to convert
    #[must_use]
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| !f.is_ok()).count()
    }

    /// Number of CSV files written
    #[must_use]
    pub fn written(&self) -> usize {
        self.files.iter().filter(|f| f.written()).count()
    }
}

/// Converts datasets laid out under a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRunner {
    base_path: PathBuf,
    parallel: bool,
}

impl CollectionRunner {
    /// Runner rooted at `base_path`, converting datasets one at a time
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            parallel: false,
        }
    }

    /// Convert datasets concurrently (files never overlap between datasets)
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Root directory of the collections
    #[inline]
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert the documents, judgments and queries of every dataset
    ///
    /// Reports are returned in the order of `datasets`. A failing file does not
    /// stop the remaining conversions.
    #[must_use]
    pub fn run(&self, datasets: &[DatasetDescriptor]) -> Vec<DatasetReport> {
        log::info!(
            "Converting {} dataset(s) under {}",
            datasets.len(),
            self.base_path.display()
        );

        if self.parallel {
            datasets
                .par_iter()
                .map(|dataset| self.convert_dataset(dataset))
                .collect()
        } else {
            datasets
                .iter()
                .map(|dataset| self.convert_dataset(dataset))
                .collect()
        }
    }

    /// Convert all files of one dataset
    #[must_use]
    pub fn convert_dataset(&self, dataset: &DatasetDescriptor) -> DatasetReport {
        let files = FileType::ALL_TYPES
            .into_iter()
            .map(|file_type| {
                let input = dataset.input_path(&self.base_path, file_type);
                let output = dataset.output_path(&self.base_path, file_type);
                let result = convert_to_csv(&input, &output, dataset.format, file_type);
                if let Err(e) = &result {
                    log::error!("{e}");
                }
                FileReport {
                    file_type,
                    input,
                    output,
                    result,
                }
            })
            .collect();

        DatasetReport {
            dataset: dataset.clone(),
            files,
        }
    }
}
