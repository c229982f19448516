//! Per-batch cache of candidate listings, keyed by directory.
//!
//! Matching re-lists the directory on every call; a batch over hundreds of
//! rows can share one listing instead. The cache is only valid while nothing
//! writes to the directory: call [`ListingCache::invalidate`] after mutating it.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::debug;
use lru::LruCache;

use super::walker::{self, CandidateFile};
use crate::types::errors::LinkResult;

/// Directories remembered per cache.
const DEFAULT_CAPACITY: usize = 16;

pub struct ListingCache {
    listings: Mutex<LruCache<PathBuf, Arc<Vec<CandidateFile>>>>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            listings: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Candidate listing for `dir`, scanning on a miss.
    ///
    /// Failed scans are not cached, so a directory that appears later is
    /// picked up by the next call.
    pub fn candidates(&self, dir: &Path) -> LinkResult<Arc<Vec<CandidateFile>>> {
        if let Some(hit) = self.lock().get(dir) {
            debug!("[ListingCache] hit for {}", dir.display());
            return Ok(Arc::clone(hit));
        }

        // Scan outside the lock; a concurrent miss on the same dir scans twice
        // and the last writer wins with an identical listing.
        let listing = Arc::new(walker::scan_candidate_files(dir)?);
        self.lock().put(dir.to_path_buf(), Arc::clone(&listing));
        Ok(listing)
    }

    /// Drop the cached listing for `dir`.
    pub fn invalidate(&self, dir: &Path) {
        self.lock().pop(dir);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<PathBuf, Arc<Vec<CandidateFile>>>> {
        self.listings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ListingCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/listing_cache_tests.rs"]
mod tests;
