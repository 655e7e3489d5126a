//! Shared Cache Module
//!
//! Thread-safe facade over [`CacheStore`] guarded by a single lock.

use std::time::Duration;

use parking_lot::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

// == Shared Cache ==
/// LRU cache with sliding TTL expiration, safe to share between threads.
///
/// `get` reorders the recency list and extends the entry's expiration, so
/// it takes the lock in write mode just like `set` and `delete`. Only the
/// pure observers (`len`, `stats`, `contains_key`, `keys`) share the lock.
/// Every mutating call is therefore serialized: one lock over the whole
/// structure cannot deadlock but limits throughput under contention.
///
/// Share it across threads with `Arc<SharedCache<V>>`.
#[derive(Debug)]
pub struct SharedCache<V> {
    inner: RwLock<CacheStore<V>>,
    capacity: usize,
    default_ttl: Duration,
}

impl<V> SharedCache<V> {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// `default_ttl` applies to entries set with [`DEFAULT_TTL`](crate::cache::DEFAULT_TTL);
    /// zero means such entries never expire.
    ///
    /// # Errors
    /// Returns [`CacheError::ZeroCapacity`](crate::error::CacheError::ZeroCapacity)
    /// when `capacity` is zero.
    pub fn new(capacity: usize, default_ttl: Duration) -> Result<Self> {
        let store = CacheStore::new(capacity, default_ttl)?;
        Ok(Self::from_store(store))
    }

    /// Wraps an existing store.
    pub fn from_store(store: CacheStore<V>) -> Self {
        Self {
            capacity: store.capacity(),
            default_ttl: store.default_ttl(),
            inner: RwLock::new(store),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, evicting the least recently used entry
    /// when a new key arrives at capacity.
    ///
    /// `ttl` of `Duration::ZERO` inherits the cache default.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.inner.write().set(key.into(), value, ttl);
    }

    // == Delete ==
    /// Removes `key` if present. Returns whether anything was removed.
    pub fn delete(&self, key: &str) -> bool {
        self.inner.write().delete(key)
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns true if `key` is present and not expired, without touching it.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().contains_key(key)
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.read().stats()
    }

    /// Keys from most to least recently used, expired entries included.
    pub fn keys(&self) -> Vec<String> {
        self.inner.read().keys()
    }

    /// Occupied slots, expired entries included.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        self.inner.read().assert_consistent();
    }
}

impl<V: Clone> SharedCache<V> {
    // == Get ==
    /// Returns a clone of the live value for `key`.
    ///
    /// A hit slides the entry's expiration forward and marks it most
    /// recently used. Expired entries read as `None` but stay in the cache
    /// until overwritten, deleted or evicted.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.write().get(key)
    }
}
