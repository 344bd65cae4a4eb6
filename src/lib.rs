//! `catalog-analytics` is a small library that turns a CSV catalog of titles
//! (movies / TV shows with metadata) into the summary aggregates behind a
//! dashboard: grouped counts, top-N country/genre tokens, a duration
//! histogram, per-year release series, and a KPI summary.
//!
//! The pipeline is one-way; each stage produces a new derived view and never
//! mutates its input:
//!
//! ```text
//! load (ingest) -> clean -> filter -> aggregate
//! ```
//!
//! ## Required input shape
//!
//! A headered CSV with at least the columns `title`, `type`, `release_year`,
//! `rating`, `country`, `duration`, `listed_in` (order free, extra columns
//! ignored). Cleaning drops rows missing `type`, `release_year`, `rating`,
//! `country` or `duration`, and derives numeric minutes from the duration
//! cell of single-release rows ("90 min" -> 90.0).
//!
//! ## Quick example: CSV to dashboard aggregates
//!
//! ```rust
//! use catalog_analytics::aggregate::{
//!     duration_histogram, top_genres, CatalogSummary, DEFAULT_DURATION_BINS, DEFAULT_TOP_GENRES,
//! };
//! use catalog_analytics::clean::{clean, CleanOptions};
//! use catalog_analytics::filter::{FilterOutcome, TitleFilter};
//! use catalog_analytics::ingest::csv::load_csv_from_reader;
//!
//! # fn main() -> Result<(), catalog_analytics::CatalogError> {
//! let data = "\
//! title,type,release_year,rating,country,duration,listed_in
//! Dust & Echoes,Movie,2020,PG-13,\"United States, Canada\",110 min,Dramas
//! Night Garden,TV Show,2021,TV-MA,Japan,2 Seasons,\"Anime Series, Thrillers\"
//! ";
//! let mut rdr = csv::ReaderBuilder::new()
//!     .has_headers(true)
//!     .from_reader(data.as_bytes());
//! let table = clean(&load_csv_from_reader(&mut rdr)?, &CleanOptions::default())?;
//!
//! // The pass-through filter is the dashboard's initial state.
//! let outcome = TitleFilter::allowing_all(&table).apply(&table);
//! let FilterOutcome::View(view) = outcome else {
//!     unreachable!("pass-through filter over a non-empty table");
//! };
//!
//! let summary = CatalogSummary::compute(view.records());
//! assert_eq!(summary.total_titles, 2);
//! assert_eq!(summary.average_minutes, Some(110.0));
//!
//! let genres = top_genres(view.records(), DEFAULT_TOP_GENRES);
//! assert_eq!(genres.len(), 3); // Dramas, Anime Series, Thrillers
//!
//! let histogram = duration_histogram(view.records(), DEFAULT_DURATION_BINS);
//! assert_eq!(histogram.iter().map(|b| b.count).sum::<u64>(), 1);
//!
//! // Every aggregate serializes for the presentation layer.
//! println!("{}", serde_json::to_string_pretty(&summary).unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! ## Sources and caching
//!
//! [`ingest::load_source`] resolves a [`ingest::DataSource`] (default file,
//! explicit path, or uploaded bytes) and reports the outcome to an optional
//! [`ingest::LoadObserver`]; a missing default file is the fatal
//! [`CatalogError::MissingSource`]. [`ingest::load_cleaned`] memoizes the
//! cleaned table per source identity in a [`cache::CleanCache`]:
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! use catalog_analytics::cache::CleanCache;
//! use catalog_analytics::clean::CleanOptions;
//! use catalog_analytics::ingest::{load_cleaned, DataSource, LoadOptions, StdErrObserver};
//!
//! # fn main() -> Result<(), catalog_analytics::CatalogError> {
//! let source = DataSource::DefaultFile(PathBuf::from("data/catalog_titles.csv"));
//! let options = LoadOptions {
//!     observer: Some(Arc::new(StdErrObserver)),
//!     ..Default::default()
//! };
//!
//! let mut cache = CleanCache::new();
//! // First call loads and cleans; later calls for the same source hit the cache.
//! let table = load_cleaned(&source, &options, &CleanOptions::default(), &mut cache)?;
//! println!("rows={}", table.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error semantics
//!
//! All core functions are pure and return [`CatalogResult`]; none logs or
//! prints internally. Two non-error conditions are modeled as values: an
//! empty filter result is [`filter::FilterOutcome::Empty`] (the presentation
//! layer shows a notice instead of charts), and an average over zero
//! single-release rows is `None` (never zero).
//!
//! ## Modules
//!
//! - [`ingest`]: data sources, CSV loading, load observability
//! - [`clean`]: required-field cleaning and duration derivation
//! - [`filter`]: the dashboard's predicate filter
//! - [`aggregate`]: pure aggregations (counts, histogram, timeline, summary)
//! - [`browse`]: title search and column selection for the tabular view
//! - [`cache`]: per-source memoization of cleaned tables
//! - [`types`]: record and table types
//! - [`error`]: error types shared across the pipeline

pub mod aggregate;
pub mod browse;
pub mod cache;
pub mod clean;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod types;

pub use error::{CatalogError, CatalogResult};
