//! Pure aggregations over catalog records.
//!
//! Every function here takes a slice of [`crate::types::TitleRecord`]s (a
//! whole cleaned table or a filtered view) and returns a derived summary; no
//! function has side effects. All output types are [`serde::Serialize`] so
//! the presentation adapter can hand them straight to its charting layer.
//!
//! Currently implemented:
//!
//! - [`counts`]: per-kind and per-rating counts, top-N country/genre token
//!   counts, distinct-country metric
//! - [`histogram`]: equal-width duration histogram
//! - [`timeline`]: per-year release counts, one zero-filled series per kind
//! - [`summary`]: the KPI row (totals, distinct countries, average runtime)
//! - [`tokens`]: the list-cell tokenizer the top-N counts are built on
//!
//! ## Example: filter → aggregate
//!
//! ```rust
//! use catalog_analytics::aggregate::{kind_counts, top_countries, CatalogSummary};
//! use catalog_analytics::types::TitleRecord;
//!
//! let records = vec![
//!     TitleRecord {
//!         title: "Dust & Echoes".to_owned(),
//!         kind: "Movie".to_owned(),
//!         release_year: 2020,
//!         rating: "PG-13".to_owned(),
//!         country: "United States, Canada".to_owned(),
//!         duration: "110 min".to_owned(),
//!         listed_in: "Dramas".to_owned(),
//!         duration_min: Some(110.0),
//!     },
//!     TitleRecord {
//!         title: "Night Garden".to_owned(),
//!         kind: "TV Show".to_owned(),
//!         release_year: 2021,
//!         rating: "TV-MA".to_owned(),
//!         country: "Japan".to_owned(),
//!         duration: "2 Seasons".to_owned(),
//!         listed_in: "Anime Series, Thrillers".to_owned(),
//!         duration_min: None,
//!     },
//! ];
//!
//! let kinds = kind_counts(&records);
//! assert_eq!(kinds.len(), 2);
//! assert_eq!(kinds.iter().map(|c| c.count).sum::<u64>(), 2);
//!
//! let countries = top_countries(&records, 10);
//! assert_eq!(countries.len(), 3); // United States, Canada, Japan
//!
//! let summary = CatalogSummary::compute(&records);
//! assert_eq!(summary.average_minutes, Some(110.0));
//! ```

pub mod counts;
pub mod histogram;
pub mod summary;
pub mod timeline;
pub mod tokens;

pub use counts::{
    distinct_country_count, kind_counts, rating_counts, top_countries, top_genres, LabelCount,
    DEFAULT_TOP_COUNTRIES, DEFAULT_TOP_GENRES,
};
pub use histogram::{duration_histogram, HistogramBin, DEFAULT_DURATION_BINS};
pub use summary::{average_single_release_minutes, CatalogSummary};
pub use timeline::{yearly_kind_counts, KindSeries, YearlyKindCounts};
pub use tokens::split_list_field;
