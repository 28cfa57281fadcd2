//! Core thread reconstruction pass
//!
//! Turns an unordered flat collection of records into a forest of reply
//! trees. The pass is total: any finite input produces a forest in which
//! every input record appears exactly once, with no error cases.
//!
//! ## Algorithm Overview
//!
//! 1. **Index**: map each id to its slot in the input for O(1) parent
//!    resolution
//! 2. **Classify**: one pass over the input attaching each record to its
//!    resolved parent, or promoting it to a root
//! 3. **Assemble**: move the records into owned nodes following the
//!    accepted links
//! 4. **Order**: recursively sort every sibling group ascending by
//!    creation time
//!
//! Classification finishes before any sorting happens: a child can be
//! attached to a parent that only shows up later in iteration order, and
//! sorting each replies list once at the end keeps the pass O(n) for
//! attachment plus one O(k log k) sort per sibling group.

use std::collections::HashMap;

use super::record::{ThreadNode, ThreadRecord};

/// Build reply threads from a flat record collection.
///
/// This is the main entry point for threading. Takes the comment rows
/// fetched for one audio page and returns the ordered root list, each root
/// carrying its reply subtree.
///
/// ## Orphan Handling
///
/// A record whose `parent_id` does not resolve within the input is
/// promoted to a root, never dropped. Comment deletion elsewhere in the
/// application tombstones content instead of removing rows that still have
/// replies, but hard-deletion paths (cascading user-ban cleanup) can still
/// leave children behind, and those children must stay visible.
///
/// ## Cycle Handling
///
/// A parent link that would close a cycle among already-accepted links is
/// refused and the record is promoted to a root instead. Cyclic
/// `parent_id` data therefore renders as a flat-ish forest rather than
/// losing records or looping: for a two-record cycle, one record keeps its
/// link and the other becomes the root above it.
///
/// ## Ordering
///
/// Every sibling group comes back sorted ascending by `created_at`. The
/// sort is stable, so records with equal timestamps keep their input
/// order; callers should not rely on any tie-break beyond that.
pub fn build_threads<T: ThreadRecord>(records: Vec<T>) -> Vec<ThreadNode<T>> {
    // Step 1: index id -> input slot (first occurrence wins on duplicates)
    let mut index: HashMap<T::Id, usize> = HashMap::with_capacity(records.len());
    for (slot, record) in records.iter().enumerate() {
        index.entry(record.id()).or_insert(slot);
    }

    // Step 2: classify every record as attached or root
    let mut parent_of: Vec<Option<usize>> = vec![None; records.len()];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (slot, record) in records.iter().enumerate() {
        let resolved = record
            .parent_id()
            .and_then(|parent_id| index.get(&parent_id).copied());

        match resolved {
            Some(parent_slot)
                if parent_slot != slot && !closes_cycle(&parent_of, slot, parent_slot) =>
            {
                parent_of[slot] = Some(parent_slot);
                children[parent_slot].push(slot);
            }
            // No parent declared, parent missing from the input,
            // self-reference, or the link would close a cycle.
            _ => roots.push(slot),
        }
    }

    // Step 3: move records into owned nodes along the accepted links
    let mut slots: Vec<Option<T>> = records.into_iter().map(Some).collect();
    let mut forest: Vec<ThreadNode<T>> = roots
        .into_iter()
        .filter_map(|slot| assemble(slot, &mut slots, &children))
        .collect();

    // Step 4: order every sibling group chronologically
    sort_siblings(&mut forest);

    forest
}

/// Check whether accepting `parent_slot` as the parent of `child_slot`
/// would close a cycle.
///
/// Walks the already-accepted ancestry upward from the candidate parent.
/// Accepted links are acyclic by construction, so the walk terminates.
fn closes_cycle(parent_of: &[Option<usize>], child_slot: usize, parent_slot: usize) -> bool {
    let mut current = Some(parent_slot);

    while let Some(slot) = current {
        if slot == child_slot {
            return true;
        }
        current = parent_of[slot];
    }

    false
}

/// Take ownership of one record and its subtree, depth first.
///
/// Each slot is taken exactly once because the accepted links form a
/// forest; the `Option` keeps the move total without panicking paths.
fn assemble<T>(
    slot: usize,
    slots: &mut [Option<T>],
    children: &[Vec<usize>],
) -> Option<ThreadNode<T>> {
    let record = slots[slot].take()?;

    let replies = children[slot]
        .iter()
        .filter_map(|&child_slot| assemble(child_slot, slots, children))
        .collect();

    Some(ThreadNode { record, replies })
}

/// Recursively sort a sibling group and every group below it by ascending
/// creation time. `sort_by_key` is stable, so equal timestamps keep input
/// order.
fn sort_siblings<T: ThreadRecord>(nodes: &mut [ThreadNode<T>]) {
    nodes.sort_by_key(|node| node.record.created_at());

    for node in nodes {
        sort_siblings(&mut node.replies);
    }
}
