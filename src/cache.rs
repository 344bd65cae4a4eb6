//! Memoization of cleaned tables per data source.
//!
//! One clean per source per session: the cache replaces an implicit
//! session-global with an explicit map keyed by source identity. File sources
//! are keyed by path; in-memory uploads are keyed by a content fingerprint,
//! so re-uploading identical bytes hits the cache. Invalidation is explicit —
//! call [`CleanCache::invalidate`] when a source's content changes.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::error::CatalogResult;
use crate::types::CleanedTable;

/// Identity of a catalog source, used as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceId {
    /// File source, keyed by path.
    Path(PathBuf),
    /// In-memory source, keyed by content fingerprint.
    Content {
        /// Byte length of the content.
        len: u64,
        /// 64-bit hash of the content.
        hash: u64,
    },
}

impl SourceId {
    /// Identity of a file source.
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }

    /// Fingerprint of in-memory content (length plus 64-bit hash).
    pub fn for_bytes(bytes: &[u8]) -> Self {
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        Self::Content {
            len: bytes.len() as u64,
            hash: hasher.finish(),
        }
    }
}

/// Cache of cleaned tables keyed by [`SourceId`].
#[derive(Debug, Default)]
pub struct CleanCache {
    entries: HashMap<SourceId, CleanedTable>,
}

impl CleanCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the cleaned table for `id`, building it with `build` on a miss.
    ///
    /// A failed build caches nothing; the next call retries.
    pub fn get_or_insert_with<F>(&mut self, id: SourceId, build: F) -> CatalogResult<&CleanedTable>
    where
        F: FnOnce() -> CatalogResult<CleanedTable>,
    {
        match self.entries.entry(id) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => Ok(e.insert(build()?)),
        }
    }

    /// Drop the entry for `id`, if any. Returns whether an entry was removed.
    pub fn invalidate(&mut self, id: &SourceId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
