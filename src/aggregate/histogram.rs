//! Equal-width histogram over single-release durations.

use serde::Serialize;

use crate::types::TitleRecord;

/// Default bin count for the duration histogram chart.
pub const DEFAULT_DURATION_BINS: usize = 40;

/// One histogram bin over `[lower, upper)`; the last bin is closed on the
/// right so the observed maximum lands inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge, in minutes.
    pub lower: f64,
    /// Upper edge, in minutes.
    pub upper: f64,
    /// Number of durations falling in the bin.
    pub count: u64,
}

/// Bucket defined `duration_min` values into `bins` equal-width bins spanning
/// the observed minimum to maximum.
///
/// Rows without a duration (multi-season works) are skipped. When no row has
/// a duration the histogram is empty — that is a valid result, not an error.
/// When all durations are equal, a single degenerate bin holds everything.
///
/// # Panics
///
/// Panics if `bins` is zero.
pub fn duration_histogram(records: &[TitleRecord], bins: usize) -> Vec<HistogramBin> {
    assert!(bins > 0, "bins must be > 0");

    let durations: Vec<f64> = records.iter().filter_map(|r| r.duration_min).collect();
    if durations.is_empty() {
        return Vec::new();
    }

    let min = durations.iter().copied().fold(f64::INFINITY, f64::min);
    let max = durations.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: durations.len() as u64,
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for d in durations {
        let idx = (((d - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{duration_histogram, HistogramBin};
    use crate::types::TitleRecord;

    fn movie(minutes: f64) -> TitleRecord {
        TitleRecord {
            title: String::new(),
            kind: "Movie".to_owned(),
            release_year: 2020,
            rating: "PG".to_owned(),
            country: "Spain".to_owned(),
            duration: format!("{minutes} min"),
            listed_in: String::new(),
            duration_min: Some(minutes),
        }
    }

    fn show() -> TitleRecord {
        TitleRecord {
            title: String::new(),
            kind: "TV Show".to_owned(),
            release_year: 2020,
            rating: "TV-MA".to_owned(),
            country: "Spain".to_owned(),
            duration: "2 Seasons".to_owned(),
            listed_in: String::new(),
            duration_min: None,
        }
    }

    #[test]
    fn no_durations_yields_an_empty_histogram() {
        assert!(duration_histogram(&[show(), show()], 40).is_empty());
        assert!(duration_histogram(&[], 40).is_empty());
    }

    #[test]
    fn counts_sum_to_the_number_of_durations() {
        let records = vec![movie(60.0), movie(90.0), movie(120.0), show()];
        let bins = duration_histogram(&records, 4);
        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 3);
    }

    #[test]
    fn bins_span_min_to_max_and_the_maximum_lands_in_the_last_bin() {
        let records = vec![movie(60.0), movie(100.0)];
        let bins = duration_histogram(&records, 2);
        assert_eq!(bins[0].lower, 60.0);
        assert_eq!(bins[1].upper, 100.0);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[1].count, 1);
    }

    #[test]
    fn identical_durations_collapse_to_one_bin() {
        let records = vec![movie(90.0), movie(90.0), movie(90.0)];
        assert_eq!(
            duration_histogram(&records, 40),
            vec![HistogramBin { lower: 90.0, upper: 90.0, count: 3 }]
        );
    }
}
