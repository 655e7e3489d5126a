//! Cache Store Module
//!
//! Unsynchronized cache engine combining a key index with the recency list
//! and TTL expiration. [`SharedCache`](crate::cache::SharedCache) wraps it in
//! a lock for concurrent use.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, NodeId, RecencyList};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Cache storage with LRU eviction and sliding TTL expiration.
///
/// Expired entries are hidden from reads but keep their slot until they are
/// overwritten, deleted or evicted. Nothing purges them eagerly, so a cache
/// full of stale entries still evicts by recency before reusing those slots.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key → node handle
    index: HashMap<String, NodeId>,
    /// Entries ordered by access recency
    entries: RecencyList<CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// TTL for entries set with `Duration::ZERO`; zero = never expire
    default_ttl: Duration,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and default TTL.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold
    /// * `default_ttl` - TTL for entries without their own, zero = never expire
    ///
    /// # Errors
    /// Returns [`CacheError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize, default_ttl: Duration) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }

        Ok(Self {
            index: HashMap::with_capacity(capacity),
            entries: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
            default_ttl,
        })
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// An existing entry (expired or not) is updated in place and moved to
    /// the front. A new key evicts the least recently used entry first when
    /// the cache is at capacity.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Entry TTL, `Duration::ZERO` inherits the default
    pub fn set(&mut self, key: String, value: V, ttl: Duration) {
        self.set_at(key, value, ttl, Instant::now());
    }

    pub(crate) fn set_at(&mut self, key: String, value: V, ttl: Duration, now: Instant) {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.entries.get_mut(id) {
                entry.value = value;
                entry.ttl = ttl;
                entry.refresh(self.default_ttl, now);
            }
            self.entries.move_to_front(id);
            return;
        }

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        let entry = CacheEntry::new(key.clone(), value, ttl, self.default_ttl, now);
        let id = self.entries.push_front(entry);
        self.index.insert(key, id);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns whether an entry was removed; an absent key is a no-op.
    pub fn delete(&mut self, key: &str) -> bool {
        let Some(id) = self.index.remove(key) else {
            return false;
        };
        self.entries.remove(id);
        self.stats.set_total_entries(self.entries.len());
        true
    }

    // == Contains Key ==
    /// Returns true if `key` is present and not expired.
    ///
    /// Does not touch recency, expiration or stats.
    pub fn contains_key(&self, key: &str) -> bool {
        self.live_entry(key, Instant::now()).is_some()
    }

    // == Clear ==
    /// Removes every entry. Statistics counters are kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Keys ==
    /// Returns keys from most to least recently used, expired entries included.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key.clone()).collect()
    }

    // == Length ==
    /// Returns the number of occupied slots, expired entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn live_entry(&self, key: &str, now: Instant) -> Option<&CacheEntry<V>> {
        let id = self.index.get(key)?;
        self.entries
            .get(*id)
            .filter(|entry| !entry.is_expired_at(now))
    }

    fn evict_oldest(&mut self) {
        if let Some(evicted) = self.entries.pop_back() {
            self.index.remove(&evicted.key);
            self.stats.record_eviction();
            debug!(key = %evicted.key, "Evicted least recently used entry");
        }
    }

    /// Verifies the index and the recency list describe the same entries.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.entries.len(), "index/list size mismatch");
        assert!(self.entries.len() <= self.capacity, "capacity exceeded");
        for entry in self.entries.iter() {
            let id = self.index.get(&entry.key).expect("list entry missing from index");
            let indexed = self.entries.get(*id).expect("index points at vacant slot");
            assert_eq!(indexed.key, entry.key, "index points at the wrong node");
        }
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A live entry has its expiration pushed back and becomes the most
    /// recently used. An expired entry is reported as absent and left in
    /// place, neither removed nor reordered.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    pub(crate) fn get_at(&mut self, key: &str, now: Instant) -> Option<V> {
        let Some(&id) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        let entry = self.entries.get_mut(id)?;
        if entry.is_expired_at(now) {
            trace!(key, "Read of expired entry");
            self.stats.record_expired();
            return None;
        }

        entry.refresh(self.default_ttl, now);
        let value = entry.value.clone();
        self.entries.move_to_front(id);
        self.stats.record_hit();
        Some(value)
    }
}
