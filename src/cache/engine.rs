//! Cache Engine Module
//!
//! Public cache contract combining the store, the eviction index and the
//! per-key locks into TTL expiration and capacity-bound LRU eviction.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::entry::CacheEntry;
use crate::cache::locks::KeyLocks;
use crate::cache::store::CacheStore;
use crate::error::{BoxError, CacheError, Result};

// == Computed ==
/// Result of a supplier: the value to cache and an optional TTL override.
///
/// A `None` value is the absence marker; whether it is cached depends on the
/// cache's null-caching setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computed<V> {
    pub value: Option<V>,
    pub ttl: Option<Duration>,
}

impl<V> Computed<V> {
    /// A present value cached for the default TTL.
    pub fn value(value: V) -> Self {
        Self {
            value: Some(value),
            ttl: None,
        }
    }

    /// The absence marker.
    pub fn absent() -> Self {
        Self {
            value: None,
            ttl: None,
        }
    }

    /// Overrides the TTL for this one entry.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

impl<V> From<Option<V>> for Computed<V> {
    fn from(value: Option<V>) -> Self {
        Self { value, ttl: None }
    }
}

// == Cache Builder ==
/// Construction settings for [`LruTtlCache`].
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: Option<usize>,
    ttl: Duration,
    cache_nulls: bool,
}

impl CacheBuilder {
    /// Starts an unbounded, null-caching configuration with the given default TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            capacity: None,
            ttl,
            cache_nulls: true,
        }
    }

    /// Bounds the number of live entries. A capacity of zero keeps each entry
    /// only until the next write sweeps it away.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets whether absent supplier results are cached (default) or recomputed
    /// on every call.
    pub fn cache_nulls(mut self, cache_nulls: bool) -> Self {
        self.cache_nulls = cache_nulls;
        self
    }

    pub fn build<V>(self) -> LruTtlCache<V> {
        LruTtlCache {
            store: RwLock::new(CacheStore::new()),
            locks: KeyLocks::new(),
            capacity: self.capacity,
            ttl: self.ttl,
            cache_nulls: self.cache_nulls,
        }
    }
}

// == LRU TTL Cache ==
/// Thread-safe key-value cache with per-entry TTL and least-used eviction.
///
/// Share it between threads with [`std::sync::Arc`]; every operation takes
/// `&self`.
///
/// Each write first sweeps expired entries, soonest deadline first, and then,
/// if the cache is still full, evicts the entries with the fewest observed
/// reads. Expired entries are always removed before a live one is evicted.
///
/// Computations are serialized per key: concurrent
/// [`compute_if_absent`](Self::compute_if_absent) calls for one key run the
/// supplier once while calls for other keys proceed in parallel.
///
/// Read counts are bumped under a shared lock and folded into the eviction
/// ordering lazily, when an eviction looks at the entry. Eviction order is
/// therefore exact for reads that completed before the eviction started and
/// best-effort for reads racing with it.
pub struct LruTtlCache<V> {
    store: RwLock<CacheStore<V>>,
    locks: KeyLocks,
    capacity: Option<usize>,
    ttl: Duration,
    cache_nulls: bool,
}

impl<V> LruTtlCache<V> {
    // == Constructors ==
    /// Creates an unbounded cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        CacheBuilder::new(ttl).build()
    }

    /// Creates a cache holding at most `capacity` live entries.
    pub fn with_capacity(capacity: usize, ttl: Duration) -> Self {
        CacheBuilder::new(ttl).capacity(capacity).build()
    }

    // == Settings ==
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn cache_nulls(&self) -> bool {
        self.cache_nulls
    }

    // == Contains Key ==
    /// Returns true if a live entry exists for `key`, including a cached
    /// absent value. An expired entry found here is removed.
    pub fn contains_key(&self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        let now = Instant::now();
        {
            let store = self.store.read();
            match store.get(key) {
                None => return false,
                Some(entry) if !entry.is_expired_at(now) => return true,
                Some(_) => {}
            }
        }
        self.remove_expired(key, now);
        false
    }

    // == Length ==
    /// Number of live entries. Expired entries awaiting a sweep are not counted.
    pub fn len(&self) -> usize {
        self.store.read().live_len(Instant::now())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Purge Expired ==
    /// Removes every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let removed = self.store.write().purge_expired(Instant::now());
        for key in &removed {
            debug!(key = %key, "expired entry removed");
        }
        removed.len()
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&self) {
        let mut store = self.store.write();
        let count = store.len();
        store.clear();
        debug!(count, "cache cleared");
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.store.read().is_consistent()
    }

    /// Drops the entry for `key` if it is still the expired one seen at `now`.
    fn remove_expired(&self, key: &str, now: Instant) {
        if self.store.write().remove_if_expired(key, now) {
            debug!(key, "expired entry removed on read");
        }
    }

    // == Sweep ==
    /// Expires what has expired, then evicts least used entries until
    /// `incoming` more entries fit under the capacity.
    fn sweep(&self, store: &mut CacheStore<V>, now: Instant, incoming: usize) {
        for key in store.purge_expired(now) {
            debug!(key = %key, "expired entry removed");
        }

        let Some(capacity) = self.capacity else {
            return;
        };

        while store.len() + incoming > capacity {
            match store.pop_least_used() {
                Some((key, entry)) => {
                    debug!(key = %key, accesses = entry.accesses(), "evicted least used entry");
                }
                None => break,
            }
        }
    }
}

impl<V: Clone> LruTtlCache<V> {
    // == Get ==
    /// Returns the live value for `key`.
    ///
    /// A miss, an expired entry and a cached absent value all return `None`;
    /// use [`contains_key`](Self::contains_key) to tell a cached absence apart.
    pub fn get(&self, key: &str) -> Option<V> {
        if key.is_empty() {
            return None;
        }
        let now = Instant::now();
        {
            let store = self.store.read();
            match store.get(key) {
                None => {
                    trace!(key, "cache miss");
                    return None;
                }
                Some(entry) if !entry.is_expired_at(now) => {
                    trace!(key, "cache hit");
                    entry.record_access();
                    return entry.value.clone();
                }
                Some(_) => {}
            }
        }
        self.remove_expired(key, now);
        None
    }

    /// Returns the live value for `key`, or `default` when there is none.
    pub fn get_or(&self, key: &str, default: V) -> V {
        self.get(key).unwrap_or(default)
    }

    // == Put ==
    /// Stores `value` under `key` for the default TTL, replacing any entry.
    ///
    /// Accepts either `V` or `Option<V>`. Storing `None` with null caching
    /// disabled stores nothing and clears the key.
    pub fn put(&self, key: &str, value: impl Into<Option<V>>) -> Result<()> {
        self.put_with_ttl(key, value, self.ttl)
    }

    /// Stores `value` under `key` for `ttl`, replacing any entry.
    pub fn put_with_ttl(&self, key: &str, value: impl Into<Option<V>>, ttl: Duration) -> Result<()> {
        validate_key(key)?;
        let _guard = self.locks.lock(key);
        self.install(key, value.into(), ttl);
        Ok(())
    }

    // == Remove ==
    /// Removes the entry for `key`, returning its value if it was live.
    pub fn remove(&self, key: &str) -> Result<Option<V>> {
        validate_key(key)?;
        let _guard = self.locks.lock(key);
        let now = Instant::now();
        let removed = self.store.write().remove(key);
        Ok(removed
            .filter(|entry| !entry.is_expired_at(now))
            .and_then(|entry| entry.value))
    }

    // == Compute If Absent ==
    /// Returns the live value for `key`, computing it with `supplier` on a miss.
    ///
    /// Among concurrent callers for the same key the supplier runs once; the
    /// others wait and receive the installed value. Callers for other keys
    /// are not blocked.
    pub fn compute_if_absent<F>(&self, key: &str, supplier: F) -> Result<Option<V>>
    where
        F: FnOnce(&str) -> Option<V>,
    {
        self.try_compute_if_absent(key, |key| Ok::<_, Infallible>(Computed::from(supplier(key))))
    }

    /// Fallible variant of [`compute_if_absent`](Self::compute_if_absent).
    ///
    /// The supplier may override the TTL of the entry it produces. If it
    /// fails, nothing is written: a previous expired entry stays in place
    /// until it is swept, the error is returned as [`CacheError::Supplier`],
    /// and callers waiting on the same key run the supplier themselves. A
    /// panicking supplier behaves the same way for the waiting callers.
    pub fn try_compute_if_absent<F, E>(&self, key: &str, supplier: F) -> Result<Option<V>>
    where
        F: FnOnce(&str) -> std::result::Result<Computed<V>, E>,
        E: Into<BoxError>,
    {
        validate_key(key)?;

        if let Some(value) = self.peek_live(key) {
            return Ok(value);
        }

        let _guard = self.locks.lock(key);

        // Another caller may have installed it while we waited
        if let Some(value) = self.peek_live(key) {
            return Ok(value);
        }

        trace!(key, "cache miss, computing");
        let computed = match supplier(key) {
            Ok(computed) => computed,
            Err(err) => {
                let err = err.into();
                debug!(key, error = %err, "supplier failed, nothing cached");
                return Err(CacheError::Supplier(err));
            }
        };

        let ttl = computed.ttl.unwrap_or(self.ttl);
        self.install(key, computed.value.clone(), ttl);
        Ok(computed.value)
    }

    // == As Map ==
    /// Returns a sorted snapshot of the live entries.
    ///
    /// The snapshot is detached: changing it does not affect the cache.
    pub fn as_map(&self) -> BTreeMap<String, Option<V>> {
        let now = Instant::now();
        self.store
            .read()
            .iter_live(now)
            .map(|(key, entry)| (key.to_owned(), entry.value.clone()))
            .collect()
    }

    /// Returns the live value without removing an expired one.
    fn peek_live(&self, key: &str) -> Option<Option<V>> {
        let store = self.store.read();
        let entry = store.get(key).filter(|entry| !entry.is_expired())?;
        trace!(key, "cache hit");
        entry.record_access();
        Some(entry.value.clone())
    }

    /// Writes a fresh entry for `key`. Must be called with the key's lock held.
    fn install(&self, key: &str, value: Option<V>, ttl: Duration) {
        let mut store = self.store.write();
        let now = Instant::now();

        // The entry being replaced never counts against the capacity
        store.remove(key);

        if value.is_none() && !self.cache_nulls {
            self.sweep(&mut store, now, 0);
            trace!(key, "absent value not cached");
            return;
        }

        self.sweep(&mut store, now, 1);
        store.insert(key, CacheEntry::new_at(value, ttl, now));
    }
}

impl<V> fmt::Debug for LruTtlCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruTtlCache")
            .field("capacity", &self.capacity)
            .field("ttl", &self.ttl)
            .field("cache_nulls", &self.cache_nulls)
            .field("len", &self.len())
            .finish()
    }
}

// == Key Validation ==
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread::{self, sleep};

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_put_and_get() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(HOUR);

        cache.put("key1", "value1").unwrap();

        assert_eq!(cache.get("key1"), Some("value1"));
        assert_eq!(cache.get("key2"), None);
        assert!(cache.contains_key("key1"));
        assert!(!cache.contains_key("key2"));
    }

    #[test]
    fn test_get_or_default() {
        let cache: LruTtlCache<i32> = LruTtlCache::new(HOUR);
        cache.put("key1", 1).unwrap();

        assert_eq!(cache.get_or("key1", 0), 1);
        assert_eq!(cache.get_or("missing", 0), 0);
    }

    #[test]
    fn test_put_overwrites() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(HOUR);

        cache.put("key1", "value1").unwrap();
        cache.put("key1", "value2").unwrap();

        assert_eq!(cache.get("key1"), Some("value2"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_with_ttl_overrides_default() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(HOUR);

        cache.put_with_ttl("short", "value", Duration::from_millis(30)).unwrap();
        cache.put("long", "value").unwrap();

        sleep(Duration::from_millis(50));

        assert!(!cache.contains_key("short"));
        assert!(cache.contains_key("long"));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let cache: LruTtlCache<i32> = LruTtlCache::new(HOUR);
        let calls = AtomicUsize::new(0);

        assert!(matches!(cache.put("", 1), Err(CacheError::InvalidKey(_))));
        assert!(matches!(cache.remove(""), Err(CacheError::InvalidKey(_))));
        let result = cache.compute_if_absent("", |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Some(1)
        });
        assert!(matches!(result, Err(CacheError::InvalidKey(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(!cache.contains_key(""));
        assert_eq!(cache.get(""), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_expired_entry_is_removed_on_read() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(Duration::from_millis(30));
        cache.put("key1", "value1").unwrap();

        sleep(Duration::from_millis(50));

        assert_eq!(cache.len(), 0, "expired entries do not count as live");
        assert_eq!(cache.store.read().len(), 1);

        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.store.read().len(), 0);
        assert!(cache.store.read().is_consistent());
    }

    #[test]
    fn test_reads_do_not_renew_ttl() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(Duration::from_millis(60));
        cache.put("key1", "value1").unwrap();

        sleep(Duration::from_millis(30));
        assert!(cache.contains_key("key1"));

        sleep(Duration::from_millis(40));
        assert!(!cache.contains_key("key1"));
    }

    #[test]
    fn test_compute_once_and_reuse() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(Duration::from_secs(10));
        let calls = AtomicUsize::new(0);

        for _ in 0..5 {
            let value = cache
                .compute_if_absent("x", |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Some("a value")
                })
                .unwrap();
            assert_eq!(value, Some("a value"));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_supplier_receives_key() {
        let cache: LruTtlCache<usize> = LruTtlCache::new(HOUR);

        let value = cache.compute_if_absent("abc", |key| Some(key.len())).unwrap();

        assert_eq!(value, Some(3));
    }

    #[test]
    fn test_cached_absent_value_is_not_recomputed() {
        let cache: LruTtlCache<String> = LruTtlCache::new(HOUR);
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .compute_if_absent("key1", |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    None
                })
                .unwrap();
            assert_eq!(value, None);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.contains_key("key1"));
        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_absent_value_recomputed_when_nulls_not_cached() {
        let cache: LruTtlCache<String> = CacheBuilder::new(HOUR).cache_nulls(false).build();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            cache
                .compute_if_absent("key1", |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    None
                })
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(!cache.contains_key("key1"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_absent_clears_key_when_nulls_not_cached() {
        let cache: LruTtlCache<&str> = CacheBuilder::new(HOUR).cache_nulls(false).build();

        cache.put("key1", "value1").unwrap();
        cache.put("key1", None::<&str>).unwrap();

        assert!(!cache.contains_key("key1"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_supplier_ttl_override() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(HOUR);

        cache
            .try_compute_if_absent("short", |_| {
                Ok::<_, Infallible>(Computed::value("v").with_ttl(Duration::from_millis(30)))
            })
            .unwrap();

        assert!(cache.contains_key("short"));
        sleep(Duration::from_millis(50));
        assert!(!cache.contains_key("short"));
    }

    #[test]
    fn test_supplier_failure_writes_nothing() {
        let cache: LruTtlCache<String> = LruTtlCache::new(HOUR);

        let result = cache.try_compute_if_absent("key1", |_| Err("backend unavailable"));

        assert!(matches!(result, Err(CacheError::Supplier(_))));
        assert!(!cache.contains_key("key1"));

        // The next caller computes again
        let value = cache
            .try_compute_if_absent("key1", |_| Ok::<_, BoxError>(Computed::value("ok".to_string())))
            .unwrap();
        assert_eq!(value.as_deref(), Some("ok"));
    }

    #[test]
    fn test_supplier_failure_keeps_stale_entry_until_swept() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(Duration::from_millis(30));
        cache.put("key1", "old").unwrap();
        sleep(Duration::from_millis(50));

        let result = cache.try_compute_if_absent("key1", |_| Err("backend unavailable"));

        assert!(result.is_err());
        assert_eq!(cache.store.read().len(), 1, "stale entry left untouched");
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.purge_expired(), 1);
    }

    #[test]
    fn test_waiter_recomputes_after_supplier_failure() {
        let cache: Arc<LruTtlCache<&str>> = Arc::new(LruTtlCache::new(HOUR));
        let calls = Arc::new(AtomicUsize::new(0));

        let failing = {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            thread::spawn(move || {
                cache.try_compute_if_absent("key1", |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    sleep(Duration::from_millis(100));
                    Err("first attempt fails")
                })
            })
        };

        // Let the failing computation take the key lock first
        sleep(Duration::from_millis(50));

        let value = cache
            .compute_if_absent("key1", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                Some("second")
            })
            .unwrap();

        assert!(failing.join().unwrap().is_err());
        assert_eq!(value, Some("second"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_supplier_panic_does_not_poison_key() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(HOUR);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            cache.compute_if_absent("key1", |_| panic!("supplier blew up"))
        }));
        assert!(result.is_err());
        assert!(!cache.contains_key("key1"));

        let value = cache.compute_if_absent("key1", |_| Some("recovered")).unwrap();
        assert_eq!(value, Some("recovered"));
        assert!(cache.store.read().is_consistent());
    }

    #[test]
    fn test_capacity_evicts_least_used() {
        let cache: LruTtlCache<i32> = LruTtlCache::with_capacity(3, HOUR);

        cache.put("key1", 1).unwrap();
        cache.put("key2", 2).unwrap();
        cache.put("key3", 3).unwrap();

        // key2 is never read
        cache.get("key1");
        cache.get("key3");

        cache.put("key4", 4).unwrap();

        assert_eq!(cache.len(), 3);
        assert!(!cache.contains_key("key2"));
        assert!(cache.contains_key("key1"));
        assert!(cache.contains_key("key3"));
        assert!(cache.contains_key("key4"));
    }

    #[test]
    fn test_overwrite_at_capacity_evicts_nothing() {
        let cache: LruTtlCache<i32> = LruTtlCache::with_capacity(2, HOUR);

        cache.put("key1", 1).unwrap();
        cache.put("key2", 2).unwrap();
        cache.put("key2", 20).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("key1"), Some(1));
        assert_eq!(cache.get("key2"), Some(20));
    }

    #[test]
    fn test_expired_entry_evicted_before_live_one() {
        let cache: LruTtlCache<i32> = LruTtlCache::with_capacity(2, HOUR);

        cache.put_with_ttl("stale", 1, Duration::from_millis(20)).unwrap();
        cache.put("fresh", 2).unwrap();

        // stale has more reads, but it is going to expire
        for _ in 0..5 {
            cache.get("stale");
        }
        sleep(Duration::from_millis(40));

        cache.put("new", 3).unwrap();

        assert_eq!(
            cache.as_map().into_keys().collect::<Vec<_>>(),
            vec!["fresh".to_string(), "new".to_string()]
        );
    }

    #[test]
    fn test_zero_capacity_keeps_entry_until_next_write() {
        let cache: LruTtlCache<i32> = LruTtlCache::with_capacity(0, HOUR);

        cache.put("key1", 1).unwrap();
        assert_eq!(cache.get("key1"), Some(1));

        cache.put("key2", 2).unwrap();
        assert!(!cache.contains_key("key1"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_remove() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(HOUR);
        cache.put("key1", "value1").unwrap();

        assert_eq!(cache.remove("key1").unwrap(), Some("value1"));
        assert_eq!(cache.remove("key1").unwrap(), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache: LruTtlCache<i32> = LruTtlCache::new(HOUR);
        cache.put("key1", 1).unwrap();
        cache.put("key2", 2).unwrap();

        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.as_map().is_empty());
        assert!(cache.store.read().is_consistent());
    }

    #[test]
    fn test_as_map_is_a_detached_snapshot() {
        let cache: LruTtlCache<&str> = LruTtlCache::new(HOUR);
        cache.put("key1", "value1").unwrap();

        let mut snapshot = cache.as_map();
        snapshot.insert("key2".to_string(), Some("value2"));
        snapshot.remove("key1");

        assert_eq!(cache.get("key1"), Some("value1"));
        assert!(!cache.contains_key("key2"));
    }

    #[test]
    fn test_settings() {
        let cache: LruTtlCache<u8> = CacheBuilder::new(HOUR).capacity(10).cache_nulls(false).build();

        assert_eq!(cache.capacity(), Some(10));
        assert_eq!(cache.ttl(), HOUR);
        assert!(!cache.cache_nulls());

        let unbounded: LruTtlCache<u8> = LruTtlCache::new(HOUR);
        assert_eq!(unbounded.capacity(), None);
        assert!(unbounded.cache_nulls());
    }
}
