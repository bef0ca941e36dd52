//! Field kinds of the tagged-record format
//!
//! Tagged collections (`cran.ALL`, `CISI.QRY`, ...) mark each field with a
//! two-character marker at the start of a line. The marker vocabulary is a
//! closed set: every recognised marker maps to exactly one output column.

use serde::{Deserialize, Serialize};

/// Marker that starts a new record; its second token is the integer ID
pub const RECORD_MARKER: &str = ".I";

/// Kind of a text field in a tagged record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// `.T` - title
    Title,
    /// `.A` - author(s)
    Author,
    /// `.B` - bibliographic source
    Source,
    /// `.W` - body text (abstract for documents, query text for queries)
    Text,
}

impl FieldKind {
    /// All field kinds in output column order
    pub const ALL: [Self; 4] = [Self::Title, Self::Author, Self::Source, Self::Text];

    /// Field kinds recognised in query files
    pub const QUERY: [Self; 1] = [Self::Text];

    /// Line marker introducing this field
    #[inline]
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Title => ".T",
            Self::Author => ".A",
            Self::Source => ".B",
            Self::Text => ".W",
        }
    }

    /// Output column this field is written to
    #[inline]
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Source => "Source",
            Self::Text => "Text",
        }
    }

    /// Field kind whose marker starts `line`, if any
    ///
    /// Matching is a plain prefix test, so `.Title` also selects [`FieldKind::Title`].
    #[must_use]
    pub fn from_marker(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| line.starts_with(kind.marker()))
    }

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Author => 1,
            Self::Source => 2,
            Self::Text => 3,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Accumulated text of every field of one record
///
/// Unset fields read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: [String; 4],
}

impl FieldValues {
    /// Create an empty set of fields
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of `kind` (empty when never populated)
    #[inline]
    #[must_use]
    pub fn get(&self, kind: FieldKind) -> &str {
        &self.values[kind.index()]
    }

    /// Append `line` to `kind`, preceded by a single space
    pub fn append_line(&mut self, kind: FieldKind, line: &str) {
        let value = &mut self.values[kind.index()];
        value.push(' ');
        value.push_str(line);
    }

    /// Move the text of `kind` out, leaving it empty
    #[inline]
    pub fn take(&mut self, kind: FieldKind) -> String {
        std::mem::take(&mut self.values[kind.index()])
    }

    /// True when no field has received any text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_marker() {
        assert_eq!(FieldKind::from_marker(".T"), Some(FieldKind::Title));
        assert_eq!(FieldKind::from_marker(".A"), Some(FieldKind::Author));
        assert_eq!(FieldKind::from_marker(".B"), Some(FieldKind::Source));
        assert_eq!(FieldKind::from_marker(".W extra"), Some(FieldKind::Text));
        assert_eq!(FieldKind::from_marker(".I 1"), None);
        assert_eq!(FieldKind::from_marker(".X"), None);
        assert_eq!(FieldKind::from_marker("plain text"), None);
        assert_eq!(FieldKind::from_marker(""), None);
    }

    #[test]
    fn test_marker_column_mapping() {
        for kind in FieldKind::ALL {
            assert_eq!(FieldKind::from_marker(kind.marker()), Some(kind));
        }
        assert_eq!(FieldKind::Source.column(), "Source");
        assert_eq!(FieldKind::Text.to_string(), "Text");
    }

    #[test]
    fn test_field_values_default_empty() {
        let fields = FieldValues::new();
        for kind in FieldKind::ALL {
            assert_eq!(fields.get(kind), "");
        }
        assert!(fields.is_empty());
    }

    #[test]
    fn test_field_values_append() {
        let mut fields = FieldValues::new();
        fields.append_line(FieldKind::Text, "first");
        fields.append_line(FieldKind::Text, "second");
        assert_eq!(fields.get(FieldKind::Text), " first second");
        assert_eq!(fields.get(FieldKind::Title), "");
        assert!(!fields.is_empty());

        assert_eq!(fields.take(FieldKind::Text), " first second");
        assert_eq!(fields.get(FieldKind::Text), "");
    }
}
