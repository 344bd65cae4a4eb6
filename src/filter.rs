//! Predicate filtering over a cleaned table.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::types::{CleanedTable, TitleRecord};

/// The dashboard's three predicates: kind membership, inclusive release-year
/// range, rating membership. A record must satisfy all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFilter {
    /// Allowed `kind` values.
    pub kinds: HashSet<String>,
    /// Inclusive release-year range.
    pub years: RangeInclusive<i64>,
    /// Allowed `rating` values.
    pub ratings: HashSet<String>,
}

impl TitleFilter {
    /// The pass-through filter for `table`: every observed kind and rating,
    /// the full observed year span. This is the UI's initial state; applying
    /// it returns the table unchanged.
    pub fn allowing_all(table: &CleanedTable) -> Self {
        Self {
            kinds: table.distinct_kinds().into_iter().collect(),
            years: table.year_span().unwrap_or(0..=0),
            ratings: table.distinct_ratings().into_iter().collect(),
        }
    }

    /// Whether a single record passes all three criteria.
    pub fn matches(&self, record: &TitleRecord) -> bool {
        self.kinds.contains(&record.kind)
            && self.years.contains(&record.release_year)
            && self.ratings.contains(&record.rating)
    }

    /// Filter `table` into a new view, reporting an empty result explicitly.
    pub fn apply(&self, table: &CleanedTable) -> FilterOutcome {
        let records: Vec<TitleRecord> = table
            .records()
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        if records.is_empty() {
            FilterOutcome::Empty
        } else {
            FilterOutcome::View(FilteredView { records })
        }
    }
}

/// Result of applying a [`TitleFilter`].
///
/// An empty match is a distinct signal, not an error: downstream aggregation
/// short-circuits and the presentation layer shows a neutral notice instead
/// of charts.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// At least one record matched.
    View(FilteredView),
    /// No record matched the current predicates.
    Empty,
}

impl FilterOutcome {
    /// The matching view, if any record matched.
    pub fn view(&self) -> Option<&FilteredView> {
        match self {
            Self::View(view) => Some(view),
            Self::Empty => None,
        }
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Subset of a cleaned table matching the current predicates. Held only for
/// the duration of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    records: Vec<TitleRecord>,
}

impl FilteredView {
    /// Number of matching rows.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// The matching records, in source order.
    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }
}
