//! Line-oriented reading of collection files
//!
//! A missing input file is not an error for the converters: it is reported on
//! the console and the file is treated as containing no records.

use crate::error::{ConversionError, ParseError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A parser that consumes one line at a time
///
/// Lines are handed over with their trailing newline removed but otherwise
/// untouched; trimming is the parser's business.
pub trait LineParser {
    /// Parsed output
    type Output;

    /// Consume the next line of input
    ///
    /// # Errors
    ///
    /// Returns `ParseError` when the line makes the whole file unusable.
    fn push_line(&mut self, line: &str) -> std::result::Result<(), ParseError>;

    /// Flush pending state and return the records in input order
    fn finish(self) -> Self::Output;

    /// Feed every line of `content` and finish
    ///
    /// # Errors
    ///
    /// Returns the first `ParseError` raised by [`LineParser::push_line`].
    fn parse_str(mut self, content: &str) -> std::result::Result<Self::Output, ParseError>
    where
        Self: Sized,
    {
        for line in content.lines() {
            self.push_line(line)?;
        }
        Ok(self.finish())
    }
}

/// Open `path` for buffered reading
///
/// Returns `Ok(None)` (after logging) when the file does not exist.
///
/// # Errors
///
/// Returns `ConversionError::ReadError` for any other I/O failure.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Option<BufReader<File>>> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => Ok(Some(BufReader::new(file))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Error: File {} not found.", path.display());
            Ok(None)
        }
        Err(e) => Err(ConversionError::read_error(path, e)),
    }
}

/// Run `parser` over every line of the file at `path`
///
/// A missing file yields `Ok(None)`; the parser is dropped without output.
///
/// # Errors
///
/// Returns `ConversionError::ReadError` if the file cannot be read (including
/// invalid UTF-8), and `ConversionError::Parse` if the parser rejects a line.
pub fn parse_file<P, L>(path: P, mut parser: L) -> Result<Option<L::Output>>
where
    P: AsRef<Path>,
    L: LineParser,
{
    let path = path.as_ref();
    let Some(reader) = open_input(path)? else {
        return Ok(None);
    };

    for line in reader.lines() {
        let line = line.map_err(|e| ConversionError::read_error(path, e))?;
        parser
            .push_line(&line)
            .map_err(|e| ConversionError::parse(path, e))?;
    }

    Ok(Some(parser.finish()))
}
