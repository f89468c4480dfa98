//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, LRU eviction and
//! per-key serialized computation.

mod engine;
mod entry;
mod index;
mod locks;
mod store;


// Re-export public types
pub use engine::{CacheBuilder, Computed, LruTtlCache};

use std::time::Duration;

// == Public Constants ==
/// Longest lifetime an entry can be given; larger TTLs are clamped to it
pub const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);
