//! Request-independent interaction core for Audiopub.
//!
//! This crate owns the pieces of the application that are pure logic or
//! temporal state, independent of HTTP routing and persistence:
//!
//! - `threading`: reconstruction of nested reply threads from the flat
//!   comment rows the database hands back
//! - `dedup`: a bounded, time-indexed suppression window shared by the
//!   play counter and the notification throttle
//! - `interactions`: play-count deduplication, favorite-notification
//!   throttling, and comment content validation
//! - `models`: the comment record as the surrounding application sees it
//!
//! The surrounding web application remains responsible for fetching data,
//! access control, pagination, and rendering. Everything here operates on
//! plain in-memory values and takes the current instant as an argument, so
//! callers (and tests) control the clock.

pub mod dedup;
pub mod error;
pub mod interactions;
pub mod models;
pub mod threading;

pub use dedup::DedupWindow;
pub use error::ValidationError;
pub use interactions::{FavoriteThrottle, PlayTracker, validate_comment_content};
pub use models::{Comment, CommentAuthor};
pub use threading::{ThreadNode, ThreadRecord, build_threads};
