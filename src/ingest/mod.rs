//! Loading catalog CSVs into a [`crate::types::RawTable`].
//!
//! Most callers should use [`load_source`] (from [`source`]) which:
//!
//! - resolves a [`DataSource`] (default file, explicit path, or uploaded
//!   bytes) to CSV input
//! - maps an absent default file to the fatal
//!   [`crate::error::CatalogError::MissingSource`]
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The CSV-specific functions are also available under [`csv`].

pub mod csv;
pub mod observability;
pub mod source;

pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadStats, Severity,
    StdErrObserver,
};
pub use source::{load_cleaned, load_source, DataSource, LoadOptions};
