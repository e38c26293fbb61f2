//! Cache Store Module
//!
//! The expiring cache: a mutex-guarded map of payloads plus the background
//! sweeper that evicts entries older than the TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};
use crate::tasks::spawn_sweep_task;

/// Smallest TTL the cache accepts. A zero period cannot drive a ticker.
pub const MIN_TTL: Duration = Duration::from_millis(1);

// == Shared State ==
/// Mapping and counters, only ever touched under the lock.
#[derive(Debug, Default)]
struct State {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

/// The part of the cache reachable from both callers and the sweeper.
///
/// The sweeper only holds a `Weak` reference to this, so the mapping is freed
/// as soon as the owning [`ExpiringCache`] goes away.
#[derive(Debug)]
pub(crate) struct Shared {
    state: Mutex<State>,
    ttl: Duration,
}

impl Shared {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            state: Mutex::new(State::default()),
            ttl,
        }
    }

    // == Sweep Expired ==
    /// Removes every entry whose age exceeds the TTL.
    ///
    /// Runs entirely inside one critical section, so a concurrent `get` or
    /// `put` observes the map either before or after the pass, never midway.
    /// Returns the number of entries removed.
    pub(crate) fn sweep_expired(&self) -> usize {
        let mut state = self.state.lock();
        let now = Instant::now();
        let ttl = self.ttl;

        let before = state.entries.len();
        state.entries.retain(|_, entry| !entry.is_expired(ttl, now));
        let remaining = state.entries.len();
        let removed = before - remaining;

        state.stats.record_swept(removed);
        state.stats.set_total_entries(remaining);
        removed
    }
}

// == Expiring Cache ==
/// Concurrency-safe byte cache whose entries are reclaimed by a periodic sweep.
///
/// Reads never check age. An entry stays retrievable until the sweeper removes
/// it, so a payload can be served for up to twice the TTL after insertion.
///
/// The cache owns its sweeper task and aborts it on drop. Share a cache between
/// tasks by wrapping it in an [`Arc`].
#[derive(Debug)]
pub struct ExpiringCache {
    shared: Arc<Shared>,
    sweeper: JoinHandle<()>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its background sweeper on the
    /// current tokio runtime.
    ///
    /// The sweeper first runs one `ttl` after construction and then every
    /// `ttl`. A zero `ttl` is raised to [`MIN_TTL`].
    ///
    /// # Panics
    /// Panics if called outside the context of a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        Self::with_handle(ttl, &Handle::current())
    }

    /// Creates an empty cache whose sweeper runs on the given runtime.
    pub fn with_handle(ttl: Duration, handle: &Handle) -> Self {
        let ttl = ttl.max(MIN_TTL);
        let shared = Arc::new(Shared::new(ttl));
        let sweeper = spawn_sweep_task(Arc::downgrade(&shared), ttl, handle);

        Self { shared, sweeper }
    }

    // == Put ==
    /// Inserts or replaces the payload stored under `key`.
    ///
    /// An existing entry is discarded wholesale and the new one starts with a
    /// fresh creation time.
    pub fn put(&self, key: impl Into<String>, payload: impl Into<Bytes>) {
        let entry = CacheEntry::new(payload.into());
        let mut state = self.shared.state.lock();
        state.entries.insert(key.into(), entry);
        let total = state.entries.len();
        state.stats.set_total_entries(total);
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` on a miss.
    ///
    /// Stale entries that the sweeper has not reached yet are still returned.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let mut state = self.shared.state.lock();
        match state.entries.get(key).map(|entry| entry.payload.clone()) {
            Some(payload) => {
                state.stats.record_hit();
                Some(payload)
            }
            None => {
                state.stats.record_miss();
                None
            }
        }
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let state = self.shared.state.lock();
        let mut stats = state.stats.clone();
        stats.set_total_entries(state.entries.len());
        stats
    }

    /// Returns the number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.shared.state.lock().entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.shared.state.lock().entries.is_empty()
    }
}

impl Drop for ExpiringCache {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}
