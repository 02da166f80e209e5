//! Single-slot in-memory cache with a time-to-live
//!
//! Holds the most recent value produced by a refresh function together with
//! the time it was stored. Freshness is decided on read; nothing is evicted.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};

use super::clock::{Clock, SystemClock};

/// The value currently held by a [`TimedCache`]
#[derive(Debug)]
pub struct CacheEntry<T> {
    /// The cached value
    pub value: Arc<T>,
    /// When the value was stored
    pub fetched_at: DateTime<Utc>,
}

impl<T> Clone for CacheEntry<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            fetched_at: self.fetched_at,
        }
    }
}

/// Time-based cache holding at most one value
///
/// A successful refresh overwrites the slot; a failed refresh leaves it
/// untouched, stale or not. Refreshes are serialized so that concurrent
/// misses share a single call to the refresh function.
pub struct TimedCache<T> {
    slot: RwLock<Option<CacheEntry<T>>>,
    refresh_gate: Mutex<()>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<T> std::fmt::Debug for TimedCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache").field("ttl", &self.ttl).finish()
    }
}

impl<T> TimedCache<T> {
    /// Creates an empty cache using the system clock
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache reading time from `clock`
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: RwLock::new(None),
            refresh_gate: Mutex::new(()),
            ttl,
            clock,
        }
    }

    /// How long a stored value stays fresh
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the current entry, fresh or stale, without refreshing
    pub async fn peek(&self) -> Option<CacheEntry<T>> {
        self.slot.read().await.clone()
    }

    /// Whether a value is present and younger than the TTL
    pub async fn is_fresh(&self) -> bool {
        self.fresh_value().await.is_some()
    }

    async fn fresh_value(&self) -> Option<Arc<T>> {
        let slot = self.slot.read().await;
        let entry = slot.as_ref()?;
        let age = self.clock.now().signed_duration_since(entry.fetched_at);
        (age < self.ttl).then(|| Arc::clone(&entry.value))
    }

    /// Returns the cached value if fresh, otherwise runs `refresh` and stores its result
    ///
    /// # Returns
    /// * `Ok(Arc<T>)` - The fresh cached value, or the newly refreshed one
    /// * `Err(E)` - The refresh error; the previous entry is kept as it was
    pub async fn get_or_refresh<F, Fut, E>(&self, refresh: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.fresh_value().await {
            tracing::debug!("Serving cached value");
            return Ok(value);
        }

        let _gate = self.refresh_gate.lock().await;

        // Another task may have refreshed while this one waited on the gate.
        if let Some(value) = self.fresh_value().await {
            tracing::debug!("Serving value refreshed by a concurrent request");
            return Ok(value);
        }

        let value = Arc::new(refresh().await?);
        let entry = CacheEntry {
            value: Arc::clone(&value),
            fetched_at: self.clock.now(),
        };
        *self.slot.write().await = Some(entry);

        Ok(value)
    }
}
