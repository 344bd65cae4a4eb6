//! Unified source loading.
//!
//! [`load_source`] resolves a [`DataSource`] to CSV input, loads it into a
//! [`crate::types::RawTable`], and reports the outcome to an optional
//! [`LoadObserver`]. [`load_cleaned`] additionally cleans the result and
//! memoizes it per source identity in a [`CleanCache`].

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::{CleanCache, SourceId};
use crate::clean::{clean, CleanOptions};
use crate::error::{CatalogError, CatalogResult};
use crate::types::{CleanedTable, RawTable};

use super::csv::{load_csv_from_path, load_csv_from_reader};
use super::observability::{LoadContext, LoadObserver, LoadStats, Severity};

/// Where the catalog CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The bundled default dataset. Absence is the fatal
    /// [`CatalogError::MissingSource`].
    DefaultFile(PathBuf),
    /// A user-supplied file path.
    File(PathBuf),
    /// An uploaded file held in memory.
    Bytes {
        /// Display name of the upload.
        name: String,
        /// Raw file content.
        bytes: Vec<u8>,
    },
}

impl DataSource {
    /// Cache key identifying this source: path identity for files, content
    /// fingerprint for uploads.
    pub fn source_id(&self) -> SourceId {
        match self {
            Self::DefaultFile(path) | Self::File(path) => SourceId::for_path(path),
            Self::Bytes { bytes, .. } => SourceId::for_bytes(bytes),
        }
    }

    /// Human-readable label for observer output.
    pub fn label(&self) -> String {
        match self {
            Self::DefaultFile(path) => format!("default dataset ({})", path.display()),
            Self::File(path) => path.display().to_string(),
            Self::Bytes { name, .. } => format!("upload '{name}'"),
        }
    }
}

/// Options controlling [`load_source`] behavior.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}

/// Load a catalog source into a raw table.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the raw row count
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
pub fn load_source(source: &DataSource, options: &LoadOptions) -> CatalogResult<RawTable> {
    let ctx = LoadContext {
        source: source.label(),
    };

    let result = match source {
        DataSource::DefaultFile(path) => {
            if path.exists() {
                load_csv_from_path(path)
            } else {
                Err(CatalogError::MissingSource { path: path.clone() })
            }
        }
        DataSource::File(path) => load_csv_from_path(path),
        DataSource::Bytes { bytes, .. } => {
            let mut rdr = csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(bytes.as_slice());
            load_csv_from_reader(&mut rdr)
        }
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(table) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: table.row_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Load and clean `source`, memoizing the cleaned table in `cache` keyed by
/// the source's identity.
///
/// One load-and-clean per source per session; subsequent calls for the same
/// source return the cached table without touching the file.
pub fn load_cleaned<'c>(
    source: &DataSource,
    options: &LoadOptions,
    clean_options: &CleanOptions,
    cache: &'c mut CleanCache,
) -> CatalogResult<&'c CleanedTable> {
    cache.get_or_insert_with(source.source_id(), || {
        let raw = load_source(source, options)?;
        clean(&raw, clean_options)
    })
}

fn severity_for_error(e: &CatalogError) -> Severity {
    match e {
        CatalogError::Io(_) | CatalogError::MissingSource { .. } => Severity::Critical,
        CatalogError::Csv(err) => match err.kind() {
            csv::ErrorKind::Io(_) => Severity::Critical,
            _ => Severity::Error,
        },
        CatalogError::SchemaMismatch { .. } | CatalogError::Parse { .. } => Severity::Error,
    }
}
