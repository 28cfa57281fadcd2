//! Play-count deduplication
//!
//! Repeated plays of the same audio from the same address inside the
//! window count once. The tracker only decides whether a play should be
//! counted; incrementing the stored play counter stays with the
//! persistence layer.

use std::net::IpAddr;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::env_i64;
use crate::dedup::DedupWindow;

/// Default suppression window for repeat plays, in hours.
const DEFAULT_PLAY_WINDOW_HOURS: i64 = 12;

/// Deduplicates play counts per (address, audio) pair.
///
/// One instance is shared by all requests; it owns its window explicitly
/// rather than living in process-global state, and expired entries are
/// evicted as they are touched.
#[derive(Debug)]
pub struct PlayTracker {
    window: DedupWindow<(IpAddr, Uuid)>,
}

impl PlayTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window: DedupWindow::new(window),
        }
    }

    /// Build a tracker from the environment, honoring
    /// `AUDIOPUB_PLAY_WINDOW_HOURS` when set to a positive integer.
    pub fn from_env() -> Self {
        Self::new(Duration::hours(env_i64(
            "AUDIOPUB_PLAY_WINDOW_HOURS",
            DEFAULT_PLAY_WINDOW_HOURS,
        )))
    }

    /// Decide whether a play of `audio_id` from `addr` at `now` counts.
    ///
    /// Returns `true` when the play should increment the audio's play
    /// count, `false` when it is a repeat inside the window.
    pub fn register_play(&self, addr: IpAddr, audio_id: Uuid, now: DateTime<Utc>) -> bool {
        let counted = self.window.observe((addr, audio_id), now);

        if !counted {
            log::debug!("suppressed repeat play of {audio_id} from {addr}");
        }

        counted
    }

    /// Drop expired entries; see [`DedupWindow::purge_expired`].
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        self.window.purge_expired(now)
    }
}

impl Default for PlayTracker {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_PLAY_WINDOW_HOURS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn addr(last_octet: u8) -> IpAddr {
        IpAddr::from([10, 0, 0, last_octet])
    }

    fn base_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_repeat_play_inside_window_not_counted() {
        let tracker = PlayTracker::default();
        let audio = Uuid::new_v4();
        let t0 = base_instant();

        assert!(tracker.register_play(addr(1), audio, t0));
        assert!(!tracker.register_play(addr(1), audio, t0 + Duration::hours(11)));
    }

    #[test]
    fn test_play_counts_again_after_window() {
        let tracker = PlayTracker::default();
        let audio = Uuid::new_v4();
        let t0 = base_instant();

        assert!(tracker.register_play(addr(1), audio, t0));
        assert!(tracker.register_play(addr(1), audio, t0 + Duration::hours(13)));
    }

    #[test]
    fn test_different_audio_counts_independently() {
        let tracker = PlayTracker::default();
        let t0 = base_instant();

        assert!(tracker.register_play(addr(1), Uuid::new_v4(), t0));
        assert!(tracker.register_play(addr(1), Uuid::new_v4(), t0));
    }

    #[test]
    fn test_different_address_counts_independently() {
        let tracker = PlayTracker::default();
        let audio = Uuid::new_v4();
        let t0 = base_instant();

        assert!(tracker.register_play(addr(1), audio, t0));
        assert!(tracker.register_play(addr(2), audio, t0));
    }

    #[test]
    fn test_purge_drops_cold_entries() {
        let tracker = PlayTracker::new(Duration::hours(12));
        let t0 = base_instant();

        tracker.register_play(addr(1), Uuid::new_v4(), t0);
        tracker.register_play(addr(2), Uuid::new_v4(), t0 + Duration::hours(11));

        assert_eq!(tracker.purge_expired(t0 + Duration::hours(13)), 1);
    }
}
