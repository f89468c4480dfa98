//! LRU TTL Cache - A bounded in-memory cache with per-entry expiration
//!
//! Entries expire after their TTL and, when a capacity is set, the least used
//! entries are evicted once the cache is full. Concurrent computations of the
//! same missing key run the supplier once; different keys never wait on each
//! other.
//!
//! ```
//! use std::time::Duration;
//! use lru_ttl_cache::LruTtlCache;
//!
//! let cache: LruTtlCache<String> = LruTtlCache::with_capacity(100, Duration::from_secs(60));
//!
//! let value = cache
//!     .compute_if_absent("user:42", |key| Some(format!("loaded {key}")))
//!     .unwrap();
//!
//! assert_eq!(value.as_deref(), Some("loaded user:42"));
//! assert!(cache.contains_key("user:42"));
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod pool;
pub mod tasks;

pub use cache::{CacheBuilder, Computed, LruTtlCache};
pub use config::Config;
pub use error::{BoxError, CacheError, Result};
pub use pool::WorkerPool;
pub use tasks::spawn_reaper;
