//! Favorite-notification throttling
//!
//! Favoriting an upload notifies its uploader, but un-favorite/re-favorite
//! flapping must not spam them. Repeat notifications from the same actor
//! to the same recipient about the same audio are suppressed inside a
//! short window. The five-minute default is a policy constant.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::env_i64;
use crate::dedup::DedupWindow;

/// Default suppression window for repeat favorite notifications, in
/// minutes.
const DEFAULT_FAVORITE_WINDOW_MINUTES: i64 = 5;

/// Decides whether a favorite should emit a notification.
#[derive(Debug)]
pub struct FavoriteThrottle {
    window: DedupWindow<(Uuid, Uuid, Uuid)>,
}

impl FavoriteThrottle {
    pub fn new(window: Duration) -> Self {
        Self {
            window: DedupWindow::new(window),
        }
    }

    /// Build a throttle from the environment, honoring
    /// `AUDIOPUB_FAVORITE_WINDOW_MINUTES` when set to a positive integer.
    pub fn from_env() -> Self {
        Self::new(Duration::minutes(env_i64(
            "AUDIOPUB_FAVORITE_WINDOW_MINUTES",
            DEFAULT_FAVORITE_WINDOW_MINUTES,
        )))
    }

    /// Decide whether `actor` favoriting `audio_id` should notify
    /// `recipient` (the uploader) at `now`.
    ///
    /// Favoriting your own upload never notifies, and never touches the
    /// window.
    pub fn should_notify(
        &self,
        recipient: Uuid,
        actor: Uuid,
        audio_id: Uuid,
        now: DateTime<Utc>,
    ) -> bool {
        if recipient == actor {
            return false;
        }

        let allowed = self.window.observe((recipient, actor, audio_id), now);

        if !allowed {
            log::debug!("throttled repeat favorite notification to {recipient} about {audio_id}");
        }

        allowed
    }

    /// Drop expired entries; see [`DedupWindow::purge_expired`].
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        self.window.purge_expired(now)
    }
}

impl Default for FavoriteThrottle {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_FAVORITE_WINDOW_MINUTES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_repeat_favorite_inside_window_throttled() {
        let throttle = FavoriteThrottle::default();
        let (recipient, actor, audio) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let t0 = base_instant();

        assert!(throttle.should_notify(recipient, actor, audio, t0));
        assert!(!throttle.should_notify(recipient, actor, audio, t0 + Duration::minutes(3)));
    }

    #[test]
    fn test_notifies_again_after_window() {
        let throttle = FavoriteThrottle::default();
        let (recipient, actor, audio) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let t0 = base_instant();

        assert!(throttle.should_notify(recipient, actor, audio, t0));
        assert!(throttle.should_notify(recipient, actor, audio, t0 + Duration::minutes(6)));
    }

    #[test]
    fn test_self_favorite_never_notifies() {
        let throttle = FavoriteThrottle::default();
        let uploader = Uuid::new_v4();
        let audio = Uuid::new_v4();

        assert!(!throttle.should_notify(uploader, uploader, audio, base_instant()));
    }

    #[test]
    fn test_other_actor_notifies_independently() {
        let throttle = FavoriteThrottle::default();
        let recipient = Uuid::new_v4();
        let audio = Uuid::new_v4();
        let t0 = base_instant();

        assert!(throttle.should_notify(recipient, Uuid::new_v4(), audio, t0));
        assert!(throttle.should_notify(recipient, Uuid::new_v4(), audio, t0));
    }
}
