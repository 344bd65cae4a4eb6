//! The KPI row shown above the charts.

use serde::Serialize;

use crate::types::TitleRecord;

use super::counts::{distinct_country_count, kind_counts, LabelCount};

/// Mean `duration_min` over rows where it is defined.
///
/// `None` when no row qualifies — distinct from zero, so the dashboard can
/// show a dash instead of a misleading "0 min".
pub fn average_single_release_minutes(records: &[TitleRecord]) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0u64;
    for minutes in records.iter().filter_map(|r| r.duration_min) {
        sum += minutes;
        n += 1;
    }
    (n > 0).then(|| sum / n as f64)
}

/// Headline metrics for the scope the records were taken from (whole table or
/// filtered view).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    /// Total titles in scope.
    pub total_titles: u64,
    /// Per-kind totals, first-encountered order.
    pub titles_by_kind: Vec<LabelCount>,
    /// Distinct raw country cells (a multi-country cell counts once).
    pub distinct_countries: u64,
    /// Mean single-release runtime in minutes; `None` when the scope has no
    /// single-release rows.
    pub average_minutes: Option<f64>,
}

impl CatalogSummary {
    /// Compute the summary for `records`.
    pub fn compute(records: &[TitleRecord]) -> Self {
        Self {
            total_titles: records.len() as u64,
            titles_by_kind: kind_counts(records),
            distinct_countries: distinct_country_count(records) as u64,
            average_minutes: average_single_release_minutes(records),
        }
    }
}
