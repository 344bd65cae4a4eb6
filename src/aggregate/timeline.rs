//! Per-year release counts, one zero-filled series per kind.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::types::TitleRecord;

/// Counts for one kind across the shared year axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindSeries {
    /// The `kind` this series counts.
    pub kind: String,
    /// One count per entry of [`YearlyKindCounts::years`]; zero where this
    /// kind released nothing that year.
    pub counts: Vec<u64>,
}

/// Year-by-kind release counts on a common sorted year axis.
///
/// Every series has one entry per year of `years`, so per-kind lines plot
/// against the same x values without gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct YearlyKindCounts {
    /// All observed release years, ascending.
    pub years: Vec<i64>,
    /// One series per distinct kind, in first-encountered order.
    pub series: Vec<KindSeries>,
}

/// Group records by (release year, kind), zero-filling missing combinations.
pub fn yearly_kind_counts(records: &[TitleRecord]) -> YearlyKindCounts {
    let years: Vec<i64> = records
        .iter()
        .map(|r| r.release_year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let year_index: HashMap<i64, usize> =
        years.iter().enumerate().map(|(i, &y)| (y, i)).collect();

    let mut series: Vec<KindSeries> = Vec::new();
    let mut kind_index: HashMap<String, usize> = HashMap::new();
    for record in records {
        let si = match kind_index.get(record.kind.as_str()) {
            Some(&i) => i,
            None => {
                kind_index.insert(record.kind.clone(), series.len());
                series.push(KindSeries {
                    kind: record.kind.clone(),
                    counts: vec![0; years.len()],
                });
                series.len() - 1
            }
        };
        series[si].counts[year_index[&record.release_year]] += 1;
    }

    YearlyKindCounts { years, series }
}
