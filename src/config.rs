//! Configuration Module
//!
//! Handles loading cache and worker pool settings from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheBuilder;
use crate::pool::WorkerPool;

/// Cache and worker pool configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of live entries, `None` = unbounded
    pub capacity: Option<usize>,
    /// Default TTL for entries without an explicit TTL
    pub default_ttl: Duration,
    /// Whether absent supplier results are cached
    pub cache_nulls: bool,
    /// Worker pool size
    pub pool_size: usize,
    /// Background reaper interval, `None` = no reaper
    pub reap_interval: Option<Duration>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum live entries (default: unbounded)
    /// - `CACHE_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `CACHE_NULLS` - Cache absent values, `true`/`false`/`1`/`0` (default: true)
    /// - `POOL_SIZE` - Worker pool threads (default: 5)
    /// - `REAP_INTERVAL_MS` - Background reaper period in milliseconds (default: disabled)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from any variable source. Missing or unparseable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let millis = |name: &str| parse_var::<u64>(&lookup, name).map(Duration::from_millis);

        Self {
            capacity: parse_var(&lookup, "CACHE_CAPACITY").or(defaults.capacity),
            default_ttl: millis("CACHE_TTL_MS").unwrap_or(defaults.default_ttl),
            cache_nulls: lookup("CACHE_NULLS")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.cache_nulls),
            pool_size: parse_var(&lookup, "POOL_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.pool_size),
            reap_interval: millis("REAP_INTERVAL_MS")
                .filter(|interval| !interval.is_zero())
                .or(defaults.reap_interval),
        }
    }

    /// Cache settings as a builder.
    pub fn cache_builder(&self) -> CacheBuilder {
        let builder = CacheBuilder::new(self.default_ttl).cache_nulls(self.cache_nulls);
        match self.capacity {
            Some(capacity) => builder.capacity(capacity),
            None => builder,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: None,
            default_ttl: Duration::from_secs(300),
            cache_nulls: true,
            pool_size: WorkerPool::DEFAULT_SIZE,
            reap_interval: None,
        }
    }
}

/// Reads and parses one environment variable.
pub fn env_var<T: FromStr>(name: &str) -> Option<T> {
    parse_var(&|name: &str| env::var(name).ok(), name)
}

fn parse_var<T: FromStr>(lookup: &dyn Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    lookup(name).and_then(|v| v.trim().parse().ok())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
