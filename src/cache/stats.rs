//! Cache Statistics Module
//!
//! Counters describing how reads and evictions played out.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache counters.
///
/// `expired` is a subset of `misses`: reads that found an entry whose TTL had
/// run out. `total_entries` counts occupied slots, so stale entries that have
/// not been displaced yet are included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub expired: u64,
    pub evictions: u64,
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of reads.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of reads that hit, 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// A read that found an expired entry; also a miss.
    pub(crate) fn record_expired(&mut self) {
        self.expired += 1;
        self.record_miss();
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
