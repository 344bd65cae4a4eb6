//! Row cleaning and duration derivation.

use crate::error::{CatalogError, CatalogResult};
use crate::types::{CleanedTable, RawTable, RawTitleRecord, TitleRecord};

/// Which `kind` carries a minutes-style duration, and the unit suffix its
/// duration cells end with.
///
/// The defaults ("Movie", " min") match the common catalog export format;
/// catalogs with different category labels can override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// The single-release category; only its rows get `duration_min`.
    pub single_release_kind: String,
    /// Unit suffix stripped from single-release duration cells.
    pub minutes_suffix: String,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            single_release_kind: "Movie".to_owned(),
            minutes_suffix: " min".to_owned(),
        }
    }
}

/// Drop rows with missing required fields and derive `duration_min`.
///
/// Required fields are `kind`, `release_year`, `rating`, `country` and
/// `duration`; a row missing any of them is dropped. `title` and `listed_in`
/// may be blank and normalize to the empty string.
///
/// For retained rows of the single-release kind, the duration cell must end
/// with the configured suffix and the remainder must parse as a non-negative
/// number; anything else fails the whole clean with
/// [`CatalogError::Parse`]. Cleaning is idempotent: re-cleaning an
/// already-clean table changes nothing.
pub fn clean(raw: &RawTable, options: &CleanOptions) -> CatalogResult<CleanedTable> {
    let mut records = Vec::with_capacity(raw.row_count());
    for (idx, row) in raw.rows.iter().enumerate() {
        // 1-based for users; +1 again because the header is row 1.
        let user_row = idx + 2;
        if let Some(record) = clean_row(user_row, row, options)? {
            records.push(record);
        }
    }
    Ok(CleanedTable::new(records))
}

fn clean_row(
    user_row: usize,
    row: &RawTitleRecord,
    options: &CleanOptions,
) -> CatalogResult<Option<TitleRecord>> {
    let (Some(kind), Some(release_year), Some(rating), Some(country), Some(duration)) = (
        row.kind.as_ref(),
        row.release_year,
        row.rating.as_ref(),
        row.country.as_ref(),
        row.duration.as_ref(),
    ) else {
        return Ok(None);
    };

    let duration_min = if *kind == options.single_release_kind {
        Some(parse_minutes(user_row, duration, &options.minutes_suffix)?)
    } else {
        None
    };

    Ok(Some(TitleRecord {
        title: row.title.clone().unwrap_or_default(),
        kind: kind.clone(),
        release_year,
        rating: rating.clone(),
        country: country.clone(),
        duration: duration.clone(),
        listed_in: row.listed_in.clone().unwrap_or_default(),
        duration_min,
    }))
}

fn parse_minutes(row: usize, duration: &str, suffix: &str) -> CatalogResult<f64> {
    let parse_err = |message: String| CatalogError::Parse {
        row,
        column: "duration".to_owned(),
        raw: duration.to_owned(),
        message,
    };

    let prefix = duration
        .strip_suffix(suffix)
        .ok_or_else(|| parse_err(format!("expected '{suffix}' suffix")))?;
    let minutes: f64 = prefix
        .trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| parse_err(e.to_string()))?;
    // `>= 0.0` is false for NaN too, so "NaN min" is rejected here as well.
    if !(minutes >= 0.0) {
        return Err(parse_err("duration must be non-negative".to_owned()));
    }
    Ok(minutes)
}
