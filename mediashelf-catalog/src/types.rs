//! Data model types for the media catalog.

use serde::{Deserialize, Serialize};

/// One catalog entry: a movie or series record.
///
/// A `Title` is immutable once constructed. Free-text fields hold the
/// empty string rather than an option when the source row had no value;
/// relationships between titles are computed on demand by the analyzer,
/// never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Catalog identifier: lowercase `s` followed by digits (e.g. `"s1"`).
    /// Uniqueness is not enforced by the loader.
    pub id: String,
    pub kind: TitleKind,
    pub title: String,
    pub director: String,
    pub cast: String,
    /// Production country. Empty when the source row had none.
    pub country: String,
    /// Date the entry was added to the catalog, kept in the source's
    /// literal `"Month D, YYYY"` form. May not parse; see
    /// [`crate::analyzer::parse_date_added`].
    pub date_added: String,
    /// Release year; 0 means unknown/unset.
    pub release_year: u32,
    /// Classification code (e.g. `"PG-13"`, `"TV-MA"`).
    pub rating: String,
    /// Running time or season count. `"N/A"` when the source field was empty.
    pub duration: String,
    pub genres: String,
    pub description: String,
}

/// Kind of catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    Movie,
    Series,
}

impl Default for TitleKind {
    fn default() -> Self {
        Self::Movie
    }
}

impl TitleKind {
    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "Series",
        }
    }

    /// Loose matching for source values: trimmed, case-insensitive, with
    /// embedded spaces joining like underscores (so `"TV Show"` reads as
    /// a series). Unrecognized values fall back to `Movie`.
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "series" | "tv_show" => Self::Series,
            _ => Self::Movie,
        }
    }
}
