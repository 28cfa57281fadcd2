//! Comment threading module
//!
//! This module reconstructs nested reply threads from the flat list of
//! comment rows the database returns for one audio page. Each comment
//! carries an optional `parent_id`; the builder turns that into a forest
//! of reply trees with deterministic chronological ordering at every
//! level.
//!
//! ## Threading Strategy
//!
//! 1. **Index**: build an id lookup so parent resolution is O(1)
//! 2. **Classify**: a single pass attaches each comment to its resolved
//!    parent, or promotes it to a root when the parent is absent, missing
//!    from the input, or would close a cycle
//! 3. **Order**: every sibling group (the root list and each node's
//!    replies) is sorted ascending by creation time
//!
//! Comments whose parent was hard-deleted are promoted to roots rather
//! than dropped, so content stays visible even when its ancestor is gone.
//!
//! ## Module Structure
//!
//! - `record`: the record trait and thread node types
//! - `builder`: the threading pass itself

pub mod builder;
pub mod record;

// Re-export main types and functions
pub use builder::build_threads;
pub use record::{ThreadNode, ThreadRecord};
