//! In-memory caching for upstream API responses
//!
//! This module provides a single-slot cache with a configurable TTL and an
//! injectable clock, so staleness can be tested without waiting on real time.

mod clock;
mod timed;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timed::{CacheEntry, TimedCache};
