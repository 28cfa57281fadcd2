//! Interaction policies around plays, favorites, and comments
//!
//! Play counting and favorite notifications are both rate-limited by
//! wall-clock windows; the window widths are policy constants with env
//! overrides, not algorithmic contracts. Comment content validation lives
//! here too, as the single piece of user-input checking the core owns.
//!
//! ## Module Structure
//!
//! - `plays`: per IP-and-audio play-count deduplication
//! - `favorites`: favorite-notification throttling
//! - `validate`: comment content validation

pub mod favorites;
pub mod plays;
pub mod validate;

pub use favorites::FavoriteThrottle;
pub use plays::PlayTracker;
pub use validate::{MAX_COMMENT_LENGTH, MIN_COMMENT_LENGTH, validate_comment_content};

use std::env;

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}
