//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

/// Boxed error produced by a caller-supplied computation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key is empty, rejected before any lock is taken
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The supplier passed to a compute operation failed; nothing was cached
    #[error("Supplier failed: {0}")]
    Supplier(#[source] BoxError),

    /// The worker pool could not be created or has shut down
    #[error("Worker pool error: {0}")]
    Pool(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
