//! Single-file conversion: pick the parser, write the CSV

use ircsv_core::{CollectionFormat, FileType, Result, Table};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of converting one collection file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionOutcome {
    /// File that was read
    pub input: PathBuf,
    /// CSV file that was (or would have been) written
    pub output: PathBuf,
    /// Number of data rows produced
    pub rows: usize,
    /// False when there was nothing to write and no file was created
    pub written: bool,
}

/// Parse `input` with the parser selected by `format` and `file_type`
///
/// # Errors
///
/// Returns `ConversionError::Parse` for malformed tagged files and
/// `ConversionError::ReadError` for unreadable files. A missing file is not an
/// error: the returned table is empty.
pub fn parse_table<P: AsRef<Path>>(
    input: P,
    format: CollectionFormat,
    file_type: FileType,
) -> Result<Table> {
    let input = input.as_ref();
    let table = match (format, file_type) {
        (CollectionFormat::Tagged, FileType::All) => {
            Table::Documents(ircsv_tagged::parse_all_file(input)?)
        }
        (CollectionFormat::Tagged, FileType::Qry) => {
            Table::Queries(ircsv_tagged::parse_qry_file(input)?)
        }
        (CollectionFormat::Tagged, FileType::Rel) => {
            Table::Judgments(ircsv_tagged::parse_rel_file(input)?)
        }
        (CollectionFormat::Numeric, FileType::All) => {
            Table::DocumentTexts(ircsv_npl::parse_documents_file(input)?)
        }
        (CollectionFormat::Numeric, FileType::Qry) => {
            Table::Queries(ircsv_npl::parse_queries_file(input)?)
        }
        (CollectionFormat::Numeric, FileType::Rel) => {
            Table::Judgments(ircsv_npl::parse_judgments_file(input)?)
        }
    };
    Ok(table)
}

/// Convert one collection file to CSV
///
/// When the parsed table is empty (including a missing input file) nothing is
/// written and the outcome reports `written: false`.
///
/// # Errors
///
/// Returns the parse errors of [`parse_table`] and `ConversionError::WriteError`
/// or `ConversionError::Csv` if the output cannot be written.
///
/// # Examples
///
/// ```no_run
/// use ircsv_backend::convert_to_csv;
/// use ircsv_core::{CollectionFormat, FileType};
///
/// let outcome = convert_to_csv(
///     "collections/cran/cran.ALL",
///     "collections/cran_docs.csv",
///     CollectionFormat::Tagged,
///     FileType::All,
/// )?;
/// println!("{} rows", outcome.rows);
/// # Ok::<(), ircsv_core::ConversionError>(())
/// ```
pub fn convert_to_csv<P, Q>(
    input: P,
    output: Q,
    format: CollectionFormat,
    file_type: FileType,
) -> Result<ConversionOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let table = parse_table(input, format, file_type)?;
    let rows = table.len();

    let written = if table.is_empty() {
        log::info!("No data to save for {}", input.display());
        false
    } else {
        table.write_csv(output)?;
        log::info!(
            "Successfully converted {} to {}",
            input.display(),
            output.display()
        );
        true
    };

    Ok(ConversionOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rows,
        written,
    })
}

/// Convert one collection file, taking the file type as a string selector
///
/// The selector is validated before the filesystem is touched.
///
/// # Errors
///
/// Returns `ConversionError::UnknownFileType` for a selector other than
/// `ALL`, `QRY` or `REL`, otherwise the errors of [`convert_to_csv`].
pub fn convert_to_csv_str<P, Q>(
    input: P,
    output: Q,
    format: CollectionFormat,
    file_type: &str,
) -> Result<ConversionOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let file_type: FileType = file_type.parse()?;
    convert_to_csv(input, output, format, file_type)
}
