//! LRU TTL Cache - load driver
//!
//! Hammers a cache with concurrent `compute_if_absent` calls from a worker
//! pool and reports how often the supplier actually ran.
//!
//! # Environment Variables
//! Cache and pool settings are read by [`Config::from_env`]; in addition:
//! - `REQUESTS` - Number of submitted computations (default: 1000)
//! - `KEYS` - Number of distinct keys they are spread over (default: 3)
//! - `SUPPLIER_DELAY_MS` - Simulated supplier latency (default: 0)

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_ttl_cache::config::env_var;
use lru_ttl_cache::{spawn_reaper, Config, LruTtlCache, WorkerPool};

/// Main entry point for the load driver.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache and the worker pool
/// 4. Start the background reaper if configured
/// 5. Submit the computations and wait for all of them
/// 6. Report and shut the pool down
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let requests: usize = env_var("REQUESTS").unwrap_or(1000);
    let keys: usize = env_var::<usize>("KEYS").unwrap_or(3).max(1);
    let delay = Duration::from_millis(env_var("SUPPLIER_DELAY_MS").unwrap_or(0));
    info!(
        "Configuration loaded: capacity={:?}, default_ttl={:?}, cache_nulls={}, pool_size={}, reap_interval={:?}",
        config.capacity, config.default_ttl, config.cache_nulls, config.pool_size, config.reap_interval
    );

    let cache: Arc<LruTtlCache<String>> = Arc::new(config.cache_builder().build());
    let pool = WorkerPool::new(config.pool_size).context("failed to start worker pool")?;

    let reaper = config
        .reap_interval
        .map(|interval| spawn_reaper(&cache, pool.handle(), interval));

    let computations = Arc::new(AtomicUsize::new(0));
    let started = Instant::now();

    let handles: Vec<_> = (0..requests)
        .map(|i| {
            let cache = Arc::clone(&cache);
            let computations = Arc::clone(&computations);
            let key = (i % keys).to_string();
            pool.submit(move || {
                cache.compute_if_absent(&key, |key| {
                    computations.fetch_add(1, Ordering::SeqCst);
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    Some(format!("value for {key}"))
                })
            })
        })
        .collect();

    pool.block_on(async {
        for handle in handles {
            handle.await.context("computation task failed")??;
        }
        anyhow::Ok(())
    })?;

    info!(
        requests,
        keys,
        computations = computations.load(Ordering::SeqCst),
        size = cache.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "load run complete"
    );

    if let Some(reaper) = reaper {
        reaper.abort();
    }
    pool.shutdown(Duration::from_secs(10));

    Ok(())
}
