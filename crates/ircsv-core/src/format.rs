//! Selectors for the collection file being converted
//!
//! A conversion is identified by two selectors: the format family of the
//! collection and the kind of file within it (documents, queries, judgments).

use crate::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of file within a test collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    /// Documents (`.ALL`)
    All,
    /// Queries (`.QRY`)
    Qry,
    /// Relevance judgments (`.REL`)
    Rel,
}

impl FileType {
    /// Every file type, in the order a collection is converted
    pub const ALL_TYPES: [Self; 3] = [Self::All, Self::Rel, Self::Qry];

    /// Extension of the input file (without the dot)
    #[inline]
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Qry => "QRY",
            Self::Rel => "REL",
        }
    }

    /// Suffix of the CSV file written for this type (`<stem>_<suffix>.csv`)
    #[inline]
    #[must_use]
    pub const fn output_suffix(self) -> &'static str {
        match self {
            Self::All => "docs",
            Self::Qry => "queries",
            Self::Rel => "qrels",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FileType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "QRY" => Ok(Self::Qry),
            "REL" => Ok(Self::Rel),
            _ => Err(ConversionError::UnknownFileType(s.to_string())),
        }
    }
}

/// Format family of a test collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionFormat {
    /// Marker-tagged records (`.I`, `.T`, `.A`, `.B`, `.W`): CRAN, CISI, MED, ...
    #[default]
    Tagged,
    /// Slash-separated records with bare-digit IDs: NPL
    #[serde(alias = "npl")]
    Numeric,
}

impl fmt::Display for CollectionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tagged => "tagged",
            Self::Numeric => "numeric",
        })
    }
}

impl FromStr for CollectionFormat {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tagged" => Ok(Self::Tagged),
            "numeric" | "npl" => Ok(Self::Numeric),
            _ => Err(ConversionError::UnknownFormat(s.to_string())),
        }
    }
}
