use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type returned by loading and cleaning functions.
///
/// Two conditions are deliberately values rather than errors: an empty
/// filter result is [`crate::filter::FilterOutcome::Empty`], and an average
/// over zero eligible rows is `None`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O error (e.g. permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not have the required catalog columns.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed (non-numeric release year, malformed
    /// duration). The whole load fails rather than producing partially-wrong
    /// derived values.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    Parse {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// The default dataset file is absent and no alternative source was
    /// supplied. Fatal for the current session.
    #[error("default dataset not found at {}", path.display())]
    MissingSource { path: PathBuf },
}
