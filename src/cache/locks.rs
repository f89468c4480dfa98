//! Key Lock Module
//!
//! Per-key mutual exclusion. Each key in use gets its own mutex; the table
//! holding those mutexes is sharded so that looking one up only briefly
//! contends with keys that hash to the same shard.

use std::cmp;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

use parking_lot::{ArcMutexGuard, Mutex, RawMutex};

use crate::cache::store::RandomState;

type Slot = Arc<Mutex<()>>;

// == Key Locks ==
/// Table of per-key mutexes.
///
/// A slot exists only while some caller holds or waits for it, so the table
/// stays proportional to the number of keys under contention.
pub(crate) struct KeyLocks {
    hash_builder: RandomState,
    shards: Vec<Mutex<HashMap<String, Slot>>>,
}

impl KeyLocks {
    // == Constructor ==
    pub fn new() -> Self {
        let available_parallelism = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::with_shards(available_parallelism * 4)
    }

    pub fn with_shards(number_of_shards: usize) -> Self {
        let shards = (0..cmp::max(number_of_shards, 1))
            .map(|_| Mutex::new(HashMap::new()))
            .collect();

        Self {
            hash_builder: RandomState::new(),
            shards,
        }
    }

    // == Lock ==
    /// Blocks until the caller holds the lock for `key`.
    ///
    /// Callers for other keys are never blocked by the returned guard. The
    /// lock is released when the guard drops, including during unwinding.
    pub fn lock(&self, key: &str) -> KeyGuard<'_> {
        let shard = self.shard(key);

        let slot = {
            let mut table = self.shards[shard].lock();
            Arc::clone(table.entry(key.to_owned()).or_default())
        };

        let guard = slot.lock_arc();

        KeyGuard {
            locks: self,
            shard,
            key: key.to_owned(),
            slot,
            guard: Some(guard),
        }
    }

    /// Number of keys currently locked or awaited.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.shards.iter().map(|table| table.lock().len()).sum()
    }

    fn shard(&self, key: &str) -> usize {
        (self.hash_builder.hash_one(key) % self.shards.len() as u64) as usize
    }
}

impl std::fmt::Debug for KeyLocks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyLocks")
            .field("shards", &self.shards.len())
            .finish()
    }
}

// == Key Guard ==
/// Holds the lock for one key.
pub(crate) struct KeyGuard<'a> {
    locks: &'a KeyLocks,
    shard: usize,
    key: String,
    slot: Slot,
    guard: Option<ArcMutexGuard<RawMutex, ()>>,
}

impl Drop for KeyGuard<'_> {
    fn drop(&mut self) {
        // Waiters clone the slot under the shard lock, so the count checked
        // here cannot grow until the shard lock is released.
        let mut table = self.locks.shards[self.shard].lock();
        drop(self.guard.take());

        // One reference in the table, one held here: nobody else wants it.
        if Arc::strong_count(&self.slot) == 2 {
            table.remove(&self.key);
        }
    }
}
