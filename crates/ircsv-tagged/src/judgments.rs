//! `.REL` relevance-judgment files
//!
//! One judgment per line: `<query id> <doc id> [<relevance>] [ignored...]`.
//! Lines with fewer than two tokens are skipped; a missing grade defaults to
//! [`DEFAULT_RELEVANCE`].

use ircsv_core::{
    parse_file, LineParser, ParseError, RecordId, RelevanceJudgment, Result, DEFAULT_RELEVANCE,
};
use std::path::Path;

/// Parser producing one [`RelevanceJudgment`] per line
#[derive(Debug, Clone, Default)]
pub struct JudgmentParser {
    judgments: Vec<RelevanceJudgment>,
    line_no: usize,
}

impl JudgmentParser {
    /// Create a judgment parser
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            judgments: Vec::new(),
            line_no: 0,
        }
    }

    fn parse_int(&self, token: &str) -> std::result::Result<RecordId, ParseError> {
        token.parse().map_err(|_| ParseError::InvalidJudgment {
            line: self.line_no,
            token: token.to_string(),
        })
    }
}

impl LineParser for JudgmentParser {
    type Output = Vec<RelevanceJudgment>;

    fn push_line(&mut self, line: &str) -> std::result::Result<(), ParseError> {
        self.line_no += 1;

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            return Ok(());
        }

        let query_id = self.parse_int(parts[0])?;
        let doc_id = self.parse_int(parts[1])?;
        let relevance = match parts.get(2) {
            Some(token) => self.parse_int(token)?,
            None => DEFAULT_RELEVANCE,
        };

        self.judgments.push(RelevanceJudgment {
            query_id,
            doc_id,
            relevance,
        });
        Ok(())
    }

    fn finish(self) -> Vec<RelevanceJudgment> {
        self.judgments
    }
}

/// Parse a tagged-collection `.REL` file into judgments
///
/// A missing file is logged and yields an empty list.
///
/// # Errors
///
/// Returns `ConversionError::Parse` if one of the first three tokens of a
/// judgment line is not an integer, and `ConversionError::ReadError` if the
/// file exists but cannot be read.
#[must_use = "this function returns parsed judgments that should be processed"]
pub fn parse_rel_file<P: AsRef<Path>>(path: P) -> Result<Vec<RelevanceJudgment>> {
    let path = path.as_ref();
    let judgments = parse_file(path, JudgmentParser::new())?.unwrap_or_default();
    log::debug!(
        "Parsed {} relevance judgments from {}",
        judgments.len(),
        path.display()
    );
    Ok(judgments)
}

/// Parse judgment content held in memory
///
/// # Errors
///
/// Returns `ParseError` if a judgment value is not an integer.
pub fn parse_rel_str(content: &str) -> std::result::Result<Vec<RelevanceJudgment>, ParseError> {
    JudgmentParser::new().parse_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graded_and_default_relevance() {
        let judgments = parse_rel_str("1 184 2\n1 29\n").unwrap();
        assert_eq!(
            judgments,
            vec![
                RelevanceJudgment {
                    query_id: 1,
                    doc_id: 184,
                    relevance: 2
                },
                RelevanceJudgment::relevant(1, 29),
            ]
        );
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        // CISI layout: query, doc, grade, score
        let judgments = parse_rel_str("    1     28\t0\t0.000000\n").unwrap();
        assert_eq!(judgments[0].query_id, 1);
        assert_eq!(judgments[0].doc_id, 28);
        assert_eq!(judgments[0].relevance, 0);
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let judgments = parse_rel_str("\n7\n  \n2 5\n").unwrap();
        assert_eq!(judgments, vec![RelevanceJudgment::relevant(2, 5)]);
    }

    #[test]
    fn test_invalid_value() {
        let err = parse_rel_str("1 2 3\n1 x\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidJudgment {
                line: 2,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_fractional_grade_is_rejected() {
        assert!(parse_rel_str("1 2 0.5\n").is_err());
    }

    #[test]
    fn test_parse_rel_file_missing() {
        assert!(parse_rel_file("nonexistent/cran.REL").unwrap().is_empty());
    }
}
