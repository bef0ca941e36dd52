//! NPL relevance-judgment file (`npl.REL`)
//!
//! Each group lists a query ID followed by the IDs of its relevant documents,
//! spread over any number of lines and closed by `/`:
//!
//! ```text
//! 1
//! 1239 1502 4462 4569 5472 5473 5474 5475 5476 6068 6069 6070 6071
//!    /
//! ```
//!
//! Every document ID yields one row with relevance 1; the format carries no
//! grades.

use crate::{is_separator, parse_digits};
use ircsv_core::{parse_file, LineParser, ParseError, RecordId, RelevanceJudgment, Result};
use std::path::Path;

/// Parser expanding NPL judgment groups into one row per document
#[derive(Debug, Clone, Default)]
pub struct GroupedJudgmentParser {
    judgments: Vec<RelevanceJudgment>,
    current_query_id: Option<RecordId>,
    current_doc_ids: Vec<RecordId>,
}

impl GroupedJudgmentParser {
    /// Create an empty parser
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            judgments: Vec::new(),
            current_query_id: None,
            current_doc_ids: Vec::new(),
        }
    }

    /// Emit the pending group if it has a query ID and at least one document
    fn flush(&mut self) -> bool {
        match self.current_query_id {
            Some(query_id) if !self.current_doc_ids.is_empty() => {
                self.judgments.extend(
                    self.current_doc_ids
                        .drain(..)
                        .map(|doc_id| RelevanceJudgment::relevant(query_id, doc_id)),
                );
                true
            }
            _ => false,
        }
    }

    fn push(&mut self, line: &str) {
        let line = line.trim();

        if is_separator(line) {
            if self.flush() {
                self.current_query_id = None;
            }
            return;
        }

        let mut tokens = line.split_whitespace().peekable();
        let Some(first) = tokens.peek().copied() else {
            return;
        };

        if self.current_query_id.is_none() {
            // Only a line opening with a numeric token can start a group.
            let Some(query_id) = parse_digits(first) else {
                return;
            };
            self.current_query_id = Some(query_id);
            tokens.next();
        }

        self.current_doc_ids.extend(tokens.filter_map(parse_digits));
    }
}

impl LineParser for GroupedJudgmentParser {
    type Output = Vec<RelevanceJudgment>;

    fn push_line(&mut self, line: &str) -> std::result::Result<(), ParseError> {
        self.push(line);
        Ok(())
    }

    fn finish(mut self) -> Vec<RelevanceJudgment> {
        self.flush();
        self.judgments
    }
}

/// Parse an NPL judgment file (`npl.REL`)
///
/// Non-numeric tokens are skipped. A missing file is logged and yields an
/// empty list.
///
/// # Errors
///
/// Returns `ConversionError::ReadError` if the file exists but cannot be read.
#[must_use = "this function returns parsed judgments that should be processed"]
pub fn parse_judgments_file<P: AsRef<Path>>(path: P) -> Result<Vec<RelevanceJudgment>> {
    let path = path.as_ref();
    let judgments = parse_file(path, GroupedJudgmentParser::new())?.unwrap_or_default();
    log::debug!(
        "Parsed {} relevance judgments from {}",
        judgments.len(),
        path.display()
    );
    Ok(judgments)
}

/// Parse NPL judgment content held in memory
#[must_use]
pub fn parse_judgments_str(content: &str) -> Vec<RelevanceJudgment> {
    let mut parser = GroupedJudgmentParser::new();
    for line in content.lines() {
        parser.push(line);
    }
    parser.finish()
}
