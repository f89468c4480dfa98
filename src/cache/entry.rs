//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::cache::MAX_TTL;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// The value and the deadline are fixed at creation. Reads never extend the
/// deadline; they only bump the access counter used for eviction ranking.
#[derive(Debug)]
pub(crate) struct CacheEntry<V> {
    /// The stored value, `None` when an absent result was cached
    pub value: Option<V>,
    /// Creation instant
    #[allow(dead_code)]
    pub created_at: Instant,
    /// Expiration instant, `created_at + ttl`
    pub expires_at: Instant,
    /// Reads observed since creation
    accesses: AtomicU64,
    /// Access count the recency ordering currently files this entry under
    pub ranked_accesses: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    #[allow(dead_code)]
    pub fn new(value: Option<V>, ttl: Duration) -> Self {
        Self::new_at(value, ttl, Instant::now())
    }

    /// Creates a new cache entry as if it had been created at `now`.
    pub fn new_at(value: Option<V>, ttl: Duration, now: Instant) -> Self {
        let expires_at = now.checked_add(ttl.min(MAX_TTL)).unwrap_or(now);

        Self {
            value,
            created_at: now,
            expires_at,
            accesses: AtomicU64::new(0),
            ranked_accesses: 0,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches the expiration
    /// instant, so an entry with TTL `T` is gone for every read at or after `T`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, zero once expired.
    #[allow(dead_code)]
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    // == Access Tracking ==
    /// Records one observed read. Safe to call under a shared lock.
    pub fn record_access(&self) {
        self.accesses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn accesses(&self) -> u64 {
        self.accesses.load(Ordering::Relaxed)
    }
}
