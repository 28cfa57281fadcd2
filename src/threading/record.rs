//! Record trait and node types for the thread builder
//!
//! The builder is generic over the record it threads: anything exposing a
//! stable unique id, an optional parent id, and a totally-ordered creation
//! timestamp can be threaded, and the rest of the record's payload rides
//! along untouched.

use std::hash::Hash;

use serde::Serialize;

/// A flat record the thread builder can organize into reply trees.
///
/// Implemented by [`crate::models::Comment`]; tests and callers with their
/// own row types implement it directly.
pub trait ThreadRecord {
    /// Unique identifier type. Uniqueness within one input collection is a
    /// caller contract; on duplicates the first occurrence is
    /// authoritative for attachment.
    type Id: Eq + Hash + Clone;

    /// Creation timestamp type. Any totally-ordered instant works.
    type Timestamp: Ord + Copy;

    fn id(&self) -> Self::Id;

    /// Id of the record this one replies to, or `None` for a top-level
    /// record.
    fn parent_id(&self) -> Option<Self::Id>;

    fn created_at(&self) -> Self::Timestamp;
}

/// One node in a reconstructed reply tree.
///
/// Wraps the original record and owns its direct replies, already sorted
/// ascending by creation time. `replies` is always present; a leaf simply
/// has an empty list. Serialization flattens the wrapped record so the
/// client sees the record's own fields with `replies` nested inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadNode<T> {
    #[serde(flatten)]
    pub record: T,
    pub replies: Vec<ThreadNode<T>>,
}

impl<T> ThreadNode<T> {
    /// Number of records in this subtree, counting this node.
    pub fn count(&self) -> usize {
        1 + self.replies.iter().map(ThreadNode::count).sum::<usize>()
    }
}
