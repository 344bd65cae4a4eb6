//! CSV loading implementation.

use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{RawTable, RawTitleRecord};

/// Catalog columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "title",
    "type",
    "release_year",
    "rating",
    "country",
    "duration",
    "listed_in",
];

/// Load a catalog CSV file into a [`RawTable`].
///
/// Rules:
///
/// - The CSV must have headers.
/// - Headers must contain all of [`REQUIRED_COLUMNS`] (order can differ;
///   extra columns are ignored).
/// - Blank cells become `None`; a non-blank `release_year` must parse as an
///   integer.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> CatalogResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load catalog CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> CatalogResult<RawTable> {
    let headers = rdr.headers()?.clone();

    // Map catalog columns -> CSV column indexes (allows re-ordered columns).
    let mut col_idxs = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing: Vec<&str> = Vec::new();
    for (slot, name) in col_idxs.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|h| h == name) {
            Some(idx) => *slot = idx,
            None => missing.push(name),
        }
    }
    if !missing.is_empty() {
        return Err(CatalogError::SchemaMismatch {
            message: format!(
                "missing required column(s) {missing:?}. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        });
    }
    let [title_i, kind_i, year_i, rating_i, country_i, duration_i, listed_i] = col_idxs;

    let mut rows: Vec<RawTitleRecord> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row numbers for users; +1 again because the header
        // is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let cell = |idx: usize| -> Option<String> {
            let raw = record.get(idx).unwrap_or("").trim();
            (!raw.is_empty()).then(|| raw.to_owned())
        };

        let release_year = match cell(year_i) {
            Some(raw) => Some(parse_year(user_row, &raw)?),
            None => None,
        };

        rows.push(RawTitleRecord {
            title: cell(title_i),
            kind: cell(kind_i),
            release_year,
            rating: cell(rating_i),
            country: cell(country_i),
            duration: cell(duration_i),
            listed_in: cell(listed_i),
        });
    }

    Ok(RawTable::new(rows))
}

fn parse_year(row: usize, raw: &str) -> CatalogResult<i64> {
    raw.parse::<i64>().map_err(|e| CatalogError::Parse {
        row,
        column: "release_year".to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}
