//! Cache Statistics Module
//!
//! Tracks how often the snapshot is served, reloaded and written back.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of cache counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of reloads from the backing file
    pub loads: u64,
    /// Number of lookups answered by a fresh snapshot
    pub hits: u64,
    /// Number of successful rewrites of the backing file
    pub writes: u64,
    /// Number of updates that changed nothing and skipped the rewrite
    pub skipped_writes: u64,
    /// Records in the current snapshot (0 before the first load)
    pub total_records: usize,
    /// Version of the current snapshot (0 before the first load)
    pub version: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + loads), or 0.0 if nothing has been requested.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.loads;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Cache Counters ==
/// Lock-free counters shared by readers and writers.
#[derive(Debug, Default)]
pub(crate) struct CacheCounters {
    loads: AtomicU64,
    hits: AtomicU64,
    writes: AtomicU64,
    skipped_writes: AtomicU64,
}

impl CacheCounters {
    pub(crate) fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_skipped_write(&self) {
        self.skipped_writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Copies the counters into a `CacheStats`.
    pub(crate) fn read(&self, total_records: usize, version: u64) -> CacheStats {
        CacheStats {
            loads: self.loads.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            skipped_writes: self.skipped_writes.load(Ordering::Relaxed),
            total_records,
            version,
        }
    }
}
