//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == TTL Precedence ==
/// Resolves the TTL an entry actually lives by.
///
/// A non-zero entry TTL wins; otherwise the cache default applies. `None`
/// means both are zero and the entry never expires.
pub fn effective_ttl(entry_ttl: Duration, default_ttl: Duration) -> Option<Duration> {
    let ttl = if entry_ttl.is_zero() {
        default_ttl
    } else {
        entry_ttl
    };
    (!ttl.is_zero()).then_some(ttl)
}

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// Key this entry is indexed under
    pub key: String,
    /// The stored value
    pub value: V,
    /// Configured TTL, `Duration::ZERO` = inherit the cache default
    pub ttl: Duration,
    /// Absolute expiration time, None = no expiration
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry whose expiration is computed from `now`.
    ///
    /// # Arguments
    /// * `key` - Key the entry is stored under
    /// * `value` - The value to store
    /// * `ttl` - Entry TTL (`Duration::ZERO` inherits `default_ttl`)
    /// * `default_ttl` - Cache-wide default TTL
    /// * `now` - Reference instant for the expiration
    pub fn new(key: String, value: V, ttl: Duration, default_ttl: Duration, now: Instant) -> Self {
        let mut entry = Self {
            key,
            value,
            ttl,
            expires_at: None,
        };
        entry.refresh(default_ttl, now);
        entry
    }

    // == Refresh ==
    /// Recomputes the expiration from `now` using the TTL precedence rule.
    ///
    /// Called on every write and every successful read, which is what makes
    /// expiration sliding. A TTL too large to represent as an `Instant`
    /// never expires.
    pub fn refresh(&mut self, default_ttl: Duration, now: Instant) {
        self.expires_at = effective_ttl(self.ttl, default_ttl).and_then(|ttl| now.checked_add(ttl));
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is expired once `now` reaches its
    /// expiration time.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}
