//! Time-windowed deduplication map
//!
//! A bounded, time-indexed map that answers one question: has this key
//! been observed within the last window? The play counter and the
//! favorite-notification throttle both sit on top of it.
//!
//! Eviction happens on the read path: an expired entry is overwritten by
//! the observation that finds it, and `purge_expired` lets the owner drop
//! cold entries opportunistically. There is no background sweep. The
//! current instant is always an argument, never read from the wall clock
//! here, so tests control time completely.

use std::hash::Hash;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Suppression window over keys of type `K`.
///
/// Shared-map semantics: safe to call from many concurrent requests
/// without external coordination.
///
/// The key bounds live on the struct so the derived `Debug` can format
/// the underlying map, whose own `Debug` impl requires them.
#[derive(Debug)]
pub struct DedupWindow<K: Eq + Hash> {
    window: Duration,
    seen: DashMap<K, DateTime<Utc>>,
}

impl<K: Eq + Hash> DedupWindow<K> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            seen: DashMap::new(),
        }
    }

    /// Width of the suppression window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record an observation of `key` at `now`.
    ///
    /// Returns `true` when the key is fresh: unseen, or last observed at
    /// or before the window boundary. A fresh observation records `now`
    /// as the key's new instant. A suppressed observation leaves the
    /// recorded instant untouched, so the window does not slide under
    /// repeated activity.
    pub fn observe(&self, key: K, now: DateTime<Utc>) -> bool {
        let cutoff = now - self.window;

        match self.seen.entry(key) {
            Entry::Occupied(mut entry) => {
                if *entry.get() > cutoff {
                    false
                } else {
                    // Expired entry: overwrite rather than resurrect.
                    entry.insert(now);
                    true
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
                true
            }
        }
    }

    /// Drop every entry last observed at or before the window boundary,
    /// returning how many were removed. Bounds memory between
    /// observations of cold keys.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - self.window;
        let before = self.seen.len();
        self.seen.retain(|_, last_seen| *last_seen > cutoff);
        before.saturating_sub(self.seen.len())
    }

    /// Number of tracked keys, expired or not.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
