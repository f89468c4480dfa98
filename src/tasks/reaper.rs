//! TTL Reaper Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! The cache does not need it: expired entries are already swept before every
//! write and dropped when a read finds them. The reaper bounds how long
//! expired entries can sit in a cache that sees no writes.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::LruTtlCache;

/// Spawns a task on `runtime` that purges expired entries every `interval`.
///
/// The task only holds a weak reference and exits once the cache is dropped.
/// Abort the returned handle to stop it earlier.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(LruTtlCache::<String>::new(Duration::from_secs(60)));
/// let reaper = spawn_reaper(&cache, pool.handle(), Duration::from_secs(1));
/// // Later, during shutdown:
/// reaper.abort();
/// ```
pub fn spawn_reaper<V>(
    cache: &Arc<LruTtlCache<V>>,
    runtime: &Handle,
    interval: Duration,
) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    let cache: Weak<LruTtlCache<V>> = Arc::downgrade(cache);

    runtime.spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "starting TTL reaper");

        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(cache) = cache.upgrade() else {
                info!("cache dropped, stopping TTL reaper");
                break;
            };

            let removed = cache.purge_expired();
            if removed > 0 {
                info!(removed, "TTL reaper removed expired entries");
            } else {
                debug!("TTL reaper: no expired entries found");
            }
        }
    })
}
