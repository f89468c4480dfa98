//! Cache Store Module
//!
//! The key to entry mapping and its eviction index, kept together so that one
//! exclusive borrow updates all three structures at once.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::cache::entry::CacheEntry;
use crate::cache::index::EvictionIndex;

pub(crate) type RandomState = ahash::RandomState;

// == Cache Store ==
/// Entries plus the orderings used to pick expiration and eviction candidates.
///
/// Every key in `entries` is filed in both orderings of `index` under the
/// entry's `expires_at` and `ranked_accesses`, and nothing else is.
#[derive(Debug)]
pub(crate) struct CacheStore<V> {
    entries: HashMap<Arc<str>, CacheEntry<V>, RandomState>,
    index: EvictionIndex,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(RandomState::new()),
            index: EvictionIndex::new(),
        }
    }

    // == Get ==
    /// Returns the entry for `key`, expired or not.
    pub fn get(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    // == Insert ==
    /// Installs `entry` for `key`, replacing any previous entry and its slots.
    pub fn insert(&mut self, key: &str, entry: CacheEntry<V>) -> Option<CacheEntry<V>> {
        let previous = self.remove(key);
        let key: Arc<str> = Arc::from(key);

        self.index.insert(&key, entry.expires_at, entry.ranked_accesses);
        self.entries.insert(key, entry);
        previous
    }

    // == Remove ==
    /// Removes `key` from the map and both orderings.
    pub fn remove(&mut self, key: &str) -> Option<CacheEntry<V>> {
        let (key, entry) = self.entries.remove_entry(key)?;
        let unfiled = self.index.remove(&key, entry.expires_at, entry.ranked_accesses);
        debug_assert!(unfiled, "entry for {key} was missing from the eviction index");
        Some(entry)
    }

    /// Removes `key` only if its current entry has expired at `now`.
    pub fn remove_if_expired(&mut self, key: &str, now: Instant) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired_at(now) => self.remove(key).is_some(),
            _ => false,
        }
    }

    // == Pop Expired ==
    /// Removes the soonest-expiring entry if it has expired at `now`.
    pub fn pop_expired(&mut self, now: Instant) -> Option<(Arc<str>, CacheEntry<V>)> {
        let key = self.index.next_expired(now)?;
        self.remove(&key).map(|entry| (key, entry))
    }

    /// Removes every entry expired at `now`, soonest first.
    ///
    /// Stops at the first live head, so the cost is proportional to the
    /// number of expired entries.
    pub fn purge_expired(&mut self, now: Instant) -> Vec<Arc<str>> {
        let mut removed = Vec::new();
        while let Some((key, _)) = self.pop_expired(now) {
            removed.push(key);
        }
        removed
    }

    // == Pop Least Used ==
    /// Removes the entry with the lowest access count.
    ///
    /// Reads bump counters under a shared lock without touching the ordering,
    /// so the head may be filed under a stale count. A stale head is refiled
    /// under its current count and the search continues; each key is refiled
    /// at most once per call because counters cannot move while `self` is
    /// borrowed mutably.
    pub fn pop_least_used(&mut self) -> Option<(Arc<str>, CacheEntry<V>)> {
        loop {
            let (ranked, key) = self.index.least_used()?;
            let entry = self.entries.get_mut(&key)?;
            let current = entry.accesses();

            if current != ranked {
                entry.ranked_accesses = current;
                self.index.rerank(&key, ranked, current);
                continue;
            }

            return self.remove(&key).map(|entry| (key, entry));
        }
    }

    // == Length ==
    /// Number of entries held, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries still live at `now`.
    pub fn live_len(&self, now: Instant) -> usize {
        self.entries.len() - self.index.expired_count(now)
    }

    // == Iteration ==
    /// Iterates over entries still live at `now`.
    pub fn iter_live(&self, now: Instant) -> impl Iterator<Item = (&str, &CacheEntry<V>)> {
        self.entries
            .iter()
            .filter(move |(_, entry)| !entry.is_expired_at(now))
            .map(|(key, entry)| (key.as_ref(), entry))
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// True when every entry is filed in both orderings and nothing else is.
    #[cfg(test)]
    pub fn is_consistent(&self) -> bool {
        self.index.is_balanced()
            && self.index.len() == self.entries.len()
            && self
                .entries
                .iter()
                .all(|(key, entry)| self.index.contains(key, entry.expires_at, entry.ranked_accesses))
    }
}
