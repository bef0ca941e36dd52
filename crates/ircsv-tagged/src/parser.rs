//! Tagged-record state machine
//!
//! A record starts at a `.I <id>` line. Field markers (`.T`, `.A`, `.B`, `.W`)
//! select the field that following content lines are appended to. The active
//! field survives a new `.I` line, so content that precedes the first marker of
//! a record lands in whatever field was active before it.

use ircsv_core::{FieldKind, FieldValues, LineParser, ParseError, RecordId, RECORD_MARKER};

/// One record as accumulated by [`TaggedParser`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRecord {
    /// ID from the record-start line
    pub id: RecordId,
    /// Accumulated field text; every appended line is preceded by a space
    pub fields: FieldValues,
}

impl TaggedRecord {
    fn new(id: RecordId) -> Self {
        Self {
            id,
            fields: FieldValues::new(),
        }
    }
}

/// Line-by-line parser for the tagged-record format
///
/// Only markers listed in `vocabulary` switch fields; any other line
/// (including markers outside the vocabulary) is content.
#[derive(Debug, Clone)]
pub struct TaggedParser {
    vocabulary: &'static [FieldKind],
    records: Vec<TaggedRecord>,
    current: Option<TaggedRecord>,
    current_field: Option<FieldKind>,
    line_no: usize,
}

impl TaggedParser {
    /// Parser recognising the given field markers
    #[must_use]
    pub const fn new(vocabulary: &'static [FieldKind]) -> Self {
        Self {
            vocabulary,
            records: Vec::new(),
            current: None,
            current_field: None,
            line_no: 0,
        }
    }

    /// Parser for document files (`.T`, `.A`, `.B`, `.W`)
    #[must_use]
    pub const fn documents() -> Self {
        Self::new(&FieldKind::ALL)
    }

    /// Parser for query files (`.W` only)
    #[must_use]
    pub const fn queries() -> Self {
        Self::new(&FieldKind::QUERY)
    }

    fn field_marker(&self, line: &str) -> Option<FieldKind> {
        FieldKind::from_marker(line).filter(|kind| self.vocabulary.contains(kind))
    }

    fn flush(&mut self) {
        if let Some(record) = self.current.take() {
            self.records.push(record);
        }
    }

    fn append(&mut self, kind: FieldKind, text: &str) {
        // Text seen before the first record marker has no record to go to.
        if let Some(record) = self.current.as_mut() {
            record.fields.append_line(kind, text);
        }
    }

    fn start_record(&mut self, line: &str) -> Result<(), ParseError> {
        self.flush();

        let token = line
            .split_whitespace()
            .nth(1)
            .ok_or(ParseError::MissingId { line: self.line_no })?;
        let id = token.parse::<RecordId>().map_err(|_| ParseError::InvalidId {
            line: self.line_no,
            token: token.to_string(),
        })?;

        self.current = Some(TaggedRecord::new(id));
        Ok(())
    }
}

impl LineParser for TaggedParser {
    type Output = Vec<TaggedRecord>;

    fn push_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.line_no += 1;
        let line = line.trim();

        if line.starts_with(RECORD_MARKER) {
            self.start_record(line)?;
        } else if let Some(kind) = self.field_marker(line) {
            self.current_field = Some(kind);
            // `.Title` selects the field but carries no inline text.
            let rest = &line[kind.marker().len()..];
            if rest.starts_with(char::is_whitespace) {
                let inline = rest.trim();
                if !inline.is_empty() {
                    self.append(kind, inline);
                }
            }
        } else if let Some(kind) = self.current_field {
            if !line.is_empty() {
                self.append(kind, line);
            }
        }

        Ok(())
    }

    fn finish(mut self) -> Vec<TaggedRecord> {
        self.flush();
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<TaggedRecord> {
        TaggedParser::documents().parse_str(content).unwrap()
    }

    #[test]
    fn test_single_record_fields() {
        let records = parse(".I 1\n.T\nexperimental investigation\n.A\nbrenckman,m.\n.B\nj. ae. scs. 25, 1958\n.W\nan experimental study\nof a wing\n");
        assert_eq!(records.len(), 1);

        let fields = &records[0].fields;
        assert_eq!(records[0].id, 1);
        assert_eq!(fields.get(FieldKind::Title), " experimental investigation");
        assert_eq!(fields.get(FieldKind::Author), " brenckman,m.");
        assert_eq!(fields.get(FieldKind::Source), " j. ae. scs. 25, 1958");
        assert_eq!(fields.get(FieldKind::Text), " an experimental study of a wing");
    }

    #[test]
    fn test_blank_lines_and_leading_whitespace() {
        let records = parse(".I 7\n.W\n   indented line   \n\n\t\nnext\n");
        assert_eq!(records[0].fields.get(FieldKind::Text), " indented line next");
    }

    #[test]
    fn test_lines_before_any_marker_are_ignored() {
        let records = parse("preamble\n\n.I 3\nstray\n.W\nbody\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields.get(FieldKind::Text), " body");
        assert_eq!(records[0].fields.get(FieldKind::Title), "");
    }

    #[test]
    fn test_active_field_carries_into_next_record() {
        let records = parse(".I 1\n.W\nfirst\n.I 2\ncarried\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].fields.get(FieldKind::Text), " carried");
    }

    #[test]
    fn test_inline_marker_text() {
        let records = parse(".I 1\n.T Title text\n.W Body line one\nBody line two\n");
        assert_eq!(records[0].fields.get(FieldKind::Title), " Title text");
        assert_eq!(
            records[0].fields.get(FieldKind::Text),
            " Body line one Body line two"
        );
    }

    #[test]
    fn test_marker_prefix_selects_field_without_inline_text() {
        let records = parse(".I 1\n.Title foo\nreal title\n.Wx\nbody\n");
        assert_eq!(records[0].fields.get(FieldKind::Title), " real title");
        assert_eq!(records[0].fields.get(FieldKind::Text), " body");
    }

    #[test]
    fn test_unknown_marker_is_content() {
        let records = parse(".I 1\n.W\nbody\n.X\n12 5 1\n");
        assert_eq!(records[0].fields.get(FieldKind::Text), " body .X 12 5 1");
    }

    #[test]
    fn test_query_vocabulary_treats_title_as_content() {
        let records = TaggedParser::queries()
            .parse_str(".I 1\n.W\nfirst query\n.I 2\n.T\nsecond title\n.W\nsecond text\n")
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields.get(FieldKind::Text), " first query");
        assert_eq!(
            records[1].fields.get(FieldKind::Text),
            " .T second title second text"
        );
        assert_eq!(records[1].fields.get(FieldKind::Title), "");
    }

    #[test]
    fn test_zero_and_signed_ids() {
        let records = parse(".I 0\n.W\nzero\n.I -4\n.W\nneg\n.I +9\n");
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, -4, 9]);
    }

    #[test]
    fn test_extra_tokens_after_id_are_ignored() {
        let records = parse(".I 12 extra tokens\n");
        assert_eq!(records[0].id, 12);
        assert!(records[0].fields.is_empty());
    }

    #[test]
    fn test_missing_id() {
        let err = TaggedParser::documents()
            .parse_str(".I 1\n.W\ntext\n.I\n")
            .unwrap_err();
        assert_eq!(err, ParseError::MissingId { line: 4 });
    }

    #[test]
    fn test_invalid_id() {
        let err = TaggedParser::documents()
            .parse_str("\n.I abc\n")
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidId {
                line: 2,
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n.W\ntext without a record\n").is_empty());
    }
}
