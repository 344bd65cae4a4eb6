//! Tabular browse view: title search and column selection.

use crate::types::TitleRecord;

/// Case-insensitive substring match over `title`.
///
/// An empty (or all-whitespace) query matches every record. Records whose
/// title normalized to the empty string can only match the empty query.
pub fn search_titles<'a>(records: &'a [TitleRecord], query: &str) -> Vec<&'a TitleRecord> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.title.to_lowercase().contains(&needle))
        .collect()
}

/// Columns available to the browse table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseColumn {
    Title,
    Kind,
    ReleaseYear,
    Rating,
    Duration,
    Country,
    ListedIn,
}

impl BrowseColumn {
    /// Default column order of the browse table.
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::Kind,
        Self::ReleaseYear,
        Self::Rating,
        Self::Duration,
        Self::Country,
        Self::ListedIn,
    ];

    /// CSV-facing header label.
    pub fn header(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Kind => "type",
            Self::ReleaseYear => "release_year",
            Self::Rating => "rating",
            Self::Duration => "duration",
            Self::Country => "country",
            Self::ListedIn => "listed_in",
        }
    }

    fn cell(self, record: &TitleRecord) -> String {
        match self {
            Self::Title => record.title.clone(),
            Self::Kind => record.kind.clone(),
            Self::ReleaseYear => record.release_year.to_string(),
            Self::Rating => record.rating.clone(),
            Self::Duration => record.duration.clone(),
            Self::Country => record.country.clone(),
            Self::ListedIn => record.listed_in.clone(),
        }
    }
}

/// Render records as display rows for the selected columns.
pub fn browse_rows(records: &[&TitleRecord], columns: &[BrowseColumn]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| columns.iter().map(|c| c.cell(r)).collect())
        .collect()
}
