//! Background Tasks Module
//!
//! Optional background work a caller can run on its own runtime.
//!
//! # Tasks
//! - Reaper: Removes expired cache entries at a fixed interval

mod reaper;

pub use reaper::spawn_reaper;
