//! LRU TTL Cache - A thread-safe in-process key-value cache
//!
//! Bounded capacity with least-recently-used eviction and sliding TTL
//! expiration, plus a small HTTP front-end.
//!
//! ```
//! use std::time::Duration;
//! use lru_ttl_cache::{SharedCache, DEFAULT_TTL};
//!
//! let cache = SharedCache::new(2, Duration::from_secs(5)).unwrap();
//! cache.set("A", 1, DEFAULT_TTL);
//! cache.set("B", 2, Duration::from_secs(1));
//! cache.get("A");
//! cache.set("C", 3, DEFAULT_TTL); // evicts B, the least recently used
//!
//! assert_eq!(cache.get("A"), Some(1));
//! assert_eq!(cache.get("B"), None);
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{CacheStats, CacheStore, SharedCache, DEFAULT_TTL};
pub use config::Config;
pub use error::{CacheError, Result};
