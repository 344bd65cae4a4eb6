//! Label counting: per-kind, per-rating, and top-N token counts.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::TitleRecord;

use super::tokens::split_list_field;

/// Default N for the top producing-countries chart.
pub const DEFAULT_TOP_COUNTRIES: usize = 10;

/// Default N for the top genres chart.
pub const DEFAULT_TOP_GENRES: usize = 15;

/// One (label, count) pair of an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    /// Distinct label value.
    pub label: String,
    /// Number of rows (or tokens) carrying the label.
    pub count: u64,
}

impl LabelCount {
    /// This label's share of `total`, where `total` is the row count of the
    /// aggregate's own scope. Shares within one filtered view sum to 1.
    pub fn share(&self, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}

/// Count rows per distinct `kind`, labels in first-encountered order.
///
/// Counts sum to the number of input rows.
pub fn kind_counts(records: &[TitleRecord]) -> Vec<LabelCount> {
    count_labels(records.iter().map(|r| r.kind.as_str()))
}

/// Count rows per distinct `rating`, labels in first-encountered order.
///
/// Counts sum to the number of input rows.
pub fn rating_counts(records: &[TitleRecord]) -> Vec<LabelCount> {
    count_labels(records.iter().map(|r| r.rating.as_str()))
}

/// Top-`n` producing countries by exploded token count.
///
/// Each row's `country` cell is split into tokens and every token counted
/// once, so a row listing k countries credits k counters. Ordered by count
/// descending; ties keep first-encountered order (stable sort).
pub fn top_countries(records: &[TitleRecord], n: usize) -> Vec<LabelCount> {
    top_tokens(records.iter().map(|r| r.country.as_str()), n)
}

/// Top-`n` genres by exploded `listed_in` token count.
///
/// Same algorithm as [`top_countries`], applied to the genre list cell.
pub fn top_genres(records: &[TitleRecord], n: usize) -> Vec<LabelCount> {
    top_tokens(records.iter().map(|r| r.listed_in.as_str()), n)
}

/// Number of distinct non-empty raw `country` cells.
///
/// Summary metric only: a multi-country cell counts as one unit here, not one
/// per token.
pub fn distinct_country_count(records: &[TitleRecord]) -> usize {
    records
        .iter()
        .map(|r| r.country.as_str())
        .filter(|c| !c.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

fn count_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut out: Vec<LabelCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for label in labels {
        match index.get(label) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(label.to_owned(), out.len());
                out.push(LabelCount {
                    label: label.to_owned(),
                    count: 1,
                });
            }
        }
    }
    out
}

fn top_tokens<'a>(cells: impl Iterator<Item = &'a str>, n: usize) -> Vec<LabelCount> {
    let mut counts = count_labels(cells.flat_map(split_list_field));
    // Stable sort: equal counts keep first-encountered order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

#[cfg(test)]
mod tests {
    use super::{
        distinct_country_count, kind_counts, rating_counts, top_countries, top_genres, LabelCount,
    };
    use crate::types::TitleRecord;

    fn record(kind: &str, rating: &str, country: &str, listed_in: &str) -> TitleRecord {
        TitleRecord {
            title: String::new(),
            kind: kind.to_owned(),
            release_year: 2020,
            rating: rating.to_owned(),
            country: country.to_owned(),
            duration: "1 Season".to_owned(),
            listed_in: listed_in.to_owned(),
            duration_min: None,
        }
    }

    #[test]
    fn kind_counts_sum_to_row_count_in_first_encountered_order() {
        let records = vec![
            record("TV Show", "TV-MA", "Japan", "Anime Series"),
            record("Movie", "PG", "Spain", "Comedies"),
            record("TV Show", "TV-14", "Japan", "Thrillers"),
        ];
        let counts = kind_counts(&records);
        assert_eq!(
            counts,
            vec![
                LabelCount { label: "TV Show".to_owned(), count: 2 },
                LabelCount { label: "Movie".to_owned(), count: 1 },
            ]
        );
        assert_eq!(counts.iter().map(|c| c.count).sum::<u64>(), records.len() as u64);
    }

    #[test]
    fn rating_counts_sum_to_row_count() {
        let records = vec![
            record("Movie", "PG", "Spain", ""),
            record("Movie", "R", "Spain", ""),
            record("Movie", "PG", "Spain", ""),
        ];
        let counts = rating_counts(&records);
        assert_eq!(counts.iter().map(|c| c.count).sum::<u64>(), 3);
    }

    #[test]
    fn one_row_credits_every_listed_country() {
        let records = vec![record("Movie", "PG", "USA, Canada, USA", "")];
        let counts = top_countries(&records, 10);
        assert_eq!(
            counts,
            vec![
                LabelCount { label: "USA".to_owned(), count: 2 },
                LabelCount { label: "Canada".to_owned(), count: 1 },
            ]
        );
    }

    #[test]
    fn top_n_truncates_and_keeps_ties_stable() {
        let records = vec![
            record("Movie", "PG", "France", "Dramas, Comedies"),
            record("Movie", "PG", "France", "Dramas"),
            record("Movie", "PG", "Italy", "Thrillers"),
        ];
        // Comedies and Thrillers tie at 1; Comedies was seen first.
        let genres = top_genres(&records, 2);
        assert_eq!(genres[0].label, "Dramas");
        assert_eq!(genres[0].count, 2);
        assert_eq!(genres[1].label, "Comedies");

        let countries = top_countries(&records, 1);
        assert_eq!(
            countries,
            vec![LabelCount { label: "France".to_owned(), count: 2 }]
        );
    }

    #[test]
    fn empty_genre_cells_contribute_no_tokens() {
        let records = vec![
            record("Movie", "PG", "Spain", ""),
            record("Movie", "PG", "Spain", "Dramas"),
        ];
        let genres = top_genres(&records, 15);
        assert_eq!(genres, vec![LabelCount { label: "Dramas".to_owned(), count: 1 }]);
    }

    #[test]
    fn distinct_countries_count_raw_cells_not_tokens() {
        let records = vec![
            record("Movie", "PG", "United States, Canada", ""),
            record("Movie", "PG", "United States, Canada", ""),
            record("Movie", "PG", "United States", ""),
        ];
        assert_eq!(distinct_country_count(&records), 2);
    }

    #[test]
    fn shares_sum_to_one_within_scope() {
        let records = vec![
            record("Movie", "PG", "Spain", ""),
            record("Movie", "R", "Spain", ""),
            record("TV Show", "TV-MA", "Spain", ""),
            record("TV Show", "TV-MA", "Spain", ""),
        ];
        let total = records.len() as u64;
        let sum: f64 = kind_counts(&records).iter().map(|c| c.share(total)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}
