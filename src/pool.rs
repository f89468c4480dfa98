//! Worker Pool Module
//!
//! An explicitly owned thread pool for running cache workloads and the
//! background reaper. Callers create it, pass it where it is needed and shut
//! it down themselves; nothing in the crate keeps a process-wide pool.

use std::future::Future;
use std::time::Duration;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;
use tracing::info;

use crate::error::{CacheError, Result};

// == Worker Pool ==
/// A fixed-size pool backed by a multi-threaded tokio runtime.
///
/// Blocking closures submitted with [`submit`](Self::submit) run on at most
/// `size` threads; futures spawned with [`spawn`](Self::spawn) run on `size`
/// async workers.
///
/// Dropping or shutting down the pool from inside an async context panics,
/// as it does for any tokio runtime.
#[derive(Debug)]
pub struct WorkerPool {
    runtime: Runtime,
    name: String,
    size: usize,
}

impl WorkerPool {
    pub const DEFAULT_SIZE: usize = 5;

    // == Constructors ==
    /// Creates a pool of `size` threads (at least one).
    pub fn new(size: usize) -> Result<Self> {
        Self::named("cache-worker", size)
    }

    /// Creates a pool whose threads are named after `name`.
    pub fn named(name: impl Into<String>, size: usize) -> Result<Self> {
        let name = name.into();
        let size = size.max(1);

        let runtime = Builder::new_multi_thread()
            .worker_threads(size)
            .max_blocking_threads(size)
            .thread_name(name.clone())
            .enable_all()
            .build()
            .map_err(|err| CacheError::Pool(err.to_string()))?;

        info!(name = %name, size, "worker pool started");

        Ok(Self {
            runtime,
            name,
            size,
        })
    }

    // == Submit ==
    /// Runs a blocking closure on the pool.
    pub fn submit<F, R>(&self, task: F) -> JoinHandle<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        self.runtime.spawn_blocking(task)
    }

    // == Spawn ==
    /// Runs a future on the pool.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.runtime.spawn(future)
    }

    /// Blocks the current thread until `future` completes on the pool.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn handle(&self) -> &Handle {
        self.runtime.handle()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    // == Shutdown ==
    /// Stops the pool, waiting at most `timeout` for running work to finish.
    pub fn shutdown(self, timeout: Duration) {
        self.runtime.shutdown_timeout(timeout);
        info!(name = %self.name, "worker pool stopped");
    }
}
