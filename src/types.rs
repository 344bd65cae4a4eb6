//! Core record and table types.
//!
//! The pipeline moves through three table shapes, each produced from the
//! previous one and never mutated afterwards:
//!
//! - [`RawTable`]: rows as loaded from a source, every field optional
//! - [`CleanedTable`]: rows surviving [`crate::clean::clean`], required
//!   fields guaranteed present, `duration_min` derived
//! - [`crate::filter::FilteredView`]: the subset matching the current
//!   predicates

use std::collections::HashSet;
use std::ops::RangeInclusive;

/// One raw row of the catalog CSV.
///
/// Every field is optional because the source data has holes; the cleaner
/// decides which rows survive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTitleRecord {
    /// Display title.
    pub title: Option<String>,
    /// CSV column `type` ("Movie", "TV Show", ...). Named `kind` here because
    /// `type` is reserved.
    pub kind: Option<String>,
    /// Release year.
    pub release_year: Option<i64>,
    /// Content-rating code (open set: "PG-13", "TV-MA", ...).
    pub rating: Option<String>,
    /// Country cell; may hold a comma-separated list.
    pub country: Option<String>,
    /// Free-form duration cell ("90 min", "2 Seasons").
    pub duration: Option<String>,
    /// Genre list cell, comma-separated.
    pub listed_in: Option<String>,
}

/// A cleaned catalog row.
///
/// `kind`, `release_year`, `rating`, `country` and `duration` are guaranteed
/// present. `title` and `listed_in` are normalized to the empty string when
/// the source cell was blank; an empty cell contributes no search hits and no
/// tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleRecord {
    /// Display title, used for search/browse only.
    pub title: String,
    /// Category value from the CSV `type` column.
    pub kind: String,
    /// Release year.
    pub release_year: i64,
    /// Content-rating code.
    pub rating: String,
    /// Raw country cell; split into tokens by the aggregator.
    pub country: String,
    /// Raw duration cell.
    pub duration: String,
    /// Raw genre list cell.
    pub listed_in: String,
    /// Minutes parsed from `duration`. Defined iff `kind` is the
    /// single-release kind; non-negative.
    pub duration_min: Option<f64>,
}

/// Table of raw rows as loaded from a source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    /// Rows in source order.
    pub rows: Vec<RawTitleRecord>,
}

impl RawTable {
    /// Create a raw table from rows.
    pub fn new(rows: Vec<RawTitleRecord>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Table of cleaned rows. Read-only for the rest of the session; filtering
/// and aggregation derive new views from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CleanedTable {
    records: Vec<TitleRecord>,
}

impl CleanedTable {
    /// Create a cleaned table from records.
    pub fn new(records: Vec<TitleRecord>) -> Self {
        Self { records }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// All records, in source order.
    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    /// Distinct `kind` values in first-encountered order. Feeds the content
    /// type selector.
    pub fn distinct_kinds(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.kind.as_str()))
            .map(|r| r.kind.clone())
            .collect()
    }

    /// Distinct `rating` values, sorted. Feeds the ratings selector.
    pub fn distinct_ratings(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .records
            .iter()
            .map(|r| r.rating.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        out.sort();
        out
    }

    /// Observed `release_year` span, or `None` for an empty table. Feeds the
    /// year range slider.
    pub fn year_span(&self) -> Option<RangeInclusive<i64>> {
        let min = self.records.iter().map(|r| r.release_year).min()?;
        let max = self.records.iter().map(|r| r.release_year).max()?;
        Some(min..=max)
    }
}
