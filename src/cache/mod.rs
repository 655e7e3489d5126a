//! Cache Module
//!
//! Provides in-memory caching with LRU eviction and sliding TTL expiration.
//!
//! Expiration is evaluated lazily on access: there is no background sweep,
//! and an expired entry keeps its slot until it is overwritten, deleted or
//! evicted.

mod entry;
mod lru;
mod shared;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use entry::{effective_ttl, CacheEntry};
pub use lru::{NodeId, RecencyList};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Pass as an entry TTL to inherit the cache-wide default.
pub const DEFAULT_TTL: Duration = Duration::ZERO;

/// Maximum key length in bytes accepted by the HTTP front-end
pub const MAX_KEY_LENGTH: usize = 256;
