//! Eviction Index Module
//!
//! Keeps two orderings over the live keys so expiration and eviction
//! candidates are found at the head of a set instead of by scanning the store.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

// == Eviction Index ==
/// Orders keys by expiration instant and by access count.
///
/// Both orderings break ties on the key itself, giving a total order and
/// reproducible eviction when deadlines or counts collide:
/// - `by_expiry`: soonest deadline first
/// - `by_accesses`: least used first
#[derive(Debug, Default)]
pub(crate) struct EvictionIndex {
    by_expiry: BTreeSet<(Instant, Arc<str>)>,
    by_accesses: BTreeSet<(u64, Arc<str>)>,
}

impl EvictionIndex {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Files `key` in both orderings.
    pub fn insert(&mut self, key: &Arc<str>, expires_at: Instant, accesses: u64) {
        self.by_expiry.insert((expires_at, Arc::clone(key)));
        self.by_accesses.insert((accesses, Arc::clone(key)));
    }

    // == Remove ==
    /// Removes the slots `key` was filed under.
    ///
    /// Returns true only if both slots were present.
    pub fn remove(&mut self, key: &Arc<str>, expires_at: Instant, accesses: u64) -> bool {
        let expiry = self.by_expiry.remove(&(expires_at, Arc::clone(key)));
        let recency = self.by_accesses.remove(&(accesses, Arc::clone(key)));
        expiry && recency
    }

    // == Rerank ==
    /// Moves `key` within the recency ordering from one access count to another.
    pub fn rerank(&mut self, key: &Arc<str>, from: u64, to: u64) {
        if self.by_accesses.remove(&(from, Arc::clone(key))) {
            self.by_accesses.insert((to, Arc::clone(key)));
        }
    }

    // == Expiration Head ==
    /// Returns the soonest-expiring key if its deadline has passed at `now`.
    pub fn next_expired(&self, now: Instant) -> Option<Arc<str>> {
        self.by_expiry
            .first()
            .filter(|(expires_at, _)| *expires_at <= now)
            .map(|(_, key)| Arc::clone(key))
    }

    /// Counts keys whose deadline has passed at `now`.
    ///
    /// Walks only the expired prefix of the ordering.
    pub fn expired_count(&self, now: Instant) -> usize {
        self.by_expiry
            .iter()
            .take_while(|(expires_at, _)| *expires_at <= now)
            .count()
    }

    // == Recency Head ==
    /// Returns the least used key and the access count it is filed under.
    pub fn least_used(&self) -> Option<(u64, Arc<str>)> {
        self.by_accesses
            .first()
            .map(|(accesses, key)| (*accesses, Arc::clone(key)))
    }

    // == Length ==
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.by_expiry.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.by_expiry.is_empty()
    }

    /// True when both orderings hold the same number of slots.
    #[allow(dead_code)]
    pub fn is_balanced(&self) -> bool {
        self.by_expiry.len() == self.by_accesses.len()
    }

    // == Contains ==
    /// Checks that `key` is filed under exactly these slots.
    #[allow(dead_code)]
    pub fn contains(&self, key: &Arc<str>, expires_at: Instant, accesses: u64) -> bool {
        self.by_expiry.contains(&(expires_at, Arc::clone(key)))
            && self.by_accesses.contains(&(accesses, Arc::clone(key)))
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.by_expiry.clear();
        self.by_accesses.clear();
    }
}
