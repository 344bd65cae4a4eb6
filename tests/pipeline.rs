//! End-to-end pipeline over the fixture catalog:
//! load -> clean -> filter -> aggregate.

use std::path::PathBuf;

use catalog_analytics::aggregate::{
    average_single_release_minutes, duration_histogram, kind_counts, rating_counts, top_countries,
    top_genres, yearly_kind_counts, CatalogSummary, DEFAULT_TOP_COUNTRIES, DEFAULT_TOP_GENRES,
};
use catalog_analytics::browse::{browse_rows, search_titles, BrowseColumn};
use catalog_analytics::cache::CleanCache;
use catalog_analytics::clean::{clean, CleanOptions};
use catalog_analytics::filter::{FilterOutcome, TitleFilter};
use catalog_analytics::ingest::{load_cleaned, load_source, DataSource, LoadOptions};
use catalog_analytics::types::CleanedTable;

fn fixture_source() -> DataSource {
    DataSource::File(PathBuf::from("tests/fixtures/titles.csv"))
}

fn fixture_table() -> CleanedTable {
    let raw = load_source(&fixture_source(), &LoadOptions::default()).unwrap();
    clean(&raw, &CleanOptions::default()).unwrap()
}

#[test]
fn cleaning_drops_the_row_with_a_missing_rating() {
    let raw = load_source(&fixture_source(), &LoadOptions::default()).unwrap();
    assert_eq!(raw.row_count(), 7);

    let table = clean(&raw, &CleanOptions::default()).unwrap();
    assert_eq!(table.row_count(), 6);
    assert!(table.records().iter().all(|r| r.title != "Half Remembered"));
}

#[test]
fn movie_durations_are_derived_and_tv_durations_are_not() {
    let table = fixture_table();
    let dust = table.records().iter().find(|r| r.title == "Dust & Echoes").unwrap();
    assert_eq!(dust.duration_min, Some(110.0));

    let garden = table.records().iter().find(|r| r.title == "Night Garden").unwrap();
    assert_eq!(garden.duration, "2 Seasons");
    assert_eq!(garden.duration_min, None);
}

#[test]
fn pass_through_filter_preserves_the_cleaned_table() {
    let table = fixture_table();
    let outcome = TitleFilter::allowing_all(&table).apply(&table);
    let view = outcome.view().expect("fixture table is non-empty");
    assert_eq!(view.records(), table.records());
    assert!(view.row_count() <= table.row_count());
}

#[test]
fn unmatched_predicates_yield_the_empty_signal_not_an_error() {
    let table = fixture_table();
    let filter = TitleFilter {
        kinds: ["Movie".to_owned()].into(),
        years: 1900..=1950,
        ratings: ["PG".to_owned()].into(),
    };
    assert_eq!(filter.apply(&table), FilterOutcome::Empty);
}

#[test]
fn count_aggregates_sum_to_the_view_row_count() {
    let table = fixture_table();
    let view = TitleFilter::allowing_all(&table).apply(&table);
    let view = view.view().unwrap();

    let total: u64 = view.row_count() as u64;
    assert_eq!(kind_counts(view.records()).iter().map(|c| c.count).sum::<u64>(), total);
    assert_eq!(rating_counts(view.records()).iter().map(|c| c.count).sum::<u64>(), total);
}

#[test]
fn country_tokens_are_exploded_per_row() {
    let table = fixture_table();
    let countries = top_countries(table.records(), DEFAULT_TOP_COUNTRIES);

    // "United States" appears in s1 (multi-country cell), s3, s7.
    let us = countries.iter().find(|c| c.label == "United States").unwrap();
    assert_eq!(us.count, 3);
    let canada = countries.iter().find(|c| c.label == "Canada").unwrap();
    assert_eq!(canada.count, 1);
}

#[test]
fn genre_tokens_follow_the_same_algorithm_with_a_wider_default() {
    let table = fixture_table();
    let genres = top_genres(table.records(), DEFAULT_TOP_GENRES);

    let dramas = genres.iter().find(|g| g.label == "Dramas").unwrap();
    assert_eq!(dramas.count, 2); // s1 and s3
    assert!(DEFAULT_TOP_GENRES > DEFAULT_TOP_COUNTRIES);
}

#[test]
fn yearly_series_share_a_zero_filled_axis() {
    let table = fixture_table();
    let timeline = yearly_kind_counts(table.records());

    assert_eq!(timeline.years, vec![2019, 2020, 2021]);
    for series in &timeline.series {
        assert_eq!(series.counts.len(), timeline.years.len());
    }
    // No TV Show released in 2019 -> explicit zero, not a gap.
    let shows = timeline.series.iter().find(|s| s.kind == "TV Show").unwrap();
    assert_eq!(shows.counts[0], 0);
}

#[test]
fn tv_only_view_has_an_undefined_average_not_zero() {
    let table = fixture_table();
    let filter = TitleFilter {
        kinds: ["TV Show".to_owned()].into(),
        years: 2000..=2030,
        ratings: table.distinct_ratings().into_iter().collect(),
    };
    let view = filter.apply(&table);
    let view = view.view().unwrap();

    assert_eq!(average_single_release_minutes(view.records()), None);
    assert!(duration_histogram(view.records(), 40).is_empty());

    let summary = CatalogSummary::compute(view.records());
    assert_eq!(summary.average_minutes, None);
}

#[test]
fn summary_matches_the_fixture_catalog() {
    let table = fixture_table();
    let summary = CatalogSummary::compute(table.records());

    assert_eq!(summary.total_titles, 6);
    // Distinct raw country cells: "United States, Canada", "Japan",
    // "United States", "South Korea", "Spain".
    assert_eq!(summary.distinct_countries, 5);
    // (110 + 95 + 88) / 3
    let avg = summary.average_minutes.unwrap();
    assert!((avg - 97.666_666_666_666_67).abs() < 1e-9);
}

#[test]
fn aggregates_serialize_for_the_presentation_layer() {
    let table = fixture_table();
    let summary = CatalogSummary::compute(table.records());

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_titles"], 6);
    assert!(json["titles_by_kind"].is_array());
    assert!(json["average_minutes"].is_number());
}

#[test]
fn browse_search_narrows_the_filtered_view() {
    let table = fixture_table();
    let hits = search_titles(table.records(), "sTaTiC");
    assert_eq!(hits.len(), 1);

    let rows = browse_rows(&hits, &BrowseColumn::ALL);
    assert_eq!(rows[0][0], "Static");
    assert_eq!(rows[0][1], "TV Show");
}

#[test]
fn load_cleaned_memoizes_per_source_identity() {
    let mut cache = CleanCache::new();
    let source = fixture_source();
    let options = LoadOptions::default();
    let clean_options = CleanOptions::default();

    let rows_first = load_cleaned(&source, &options, &clean_options, &mut cache)
        .unwrap()
        .row_count();
    let rows_again = load_cleaned(&source, &options, &clean_options, &mut cache)
        .unwrap()
        .row_count();

    assert_eq!(rows_first, 6);
    assert_eq!(rows_again, 6);
    assert_eq!(cache.len(), 1);

    cache.invalidate(&source.source_id());
    assert!(cache.is_empty());
}
