// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadth-first queries over the document tree.
//!
//! All three helpers traverse in breadth-first order using an explicit queue.
//! The collecting queries ([`find_all_by_tag`], [`find_all_by_class`]) return
//! matches in **level order**: every match at depth 1 precedes any match at
//! depth 2, regardless of which subtree it belongs to. This differs from the
//! depth-first document order used elsewhere in UI tooling and is part of
//! this module's contract; callers that need document order must sort the
//! result themselves.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::tree::Tree;
use crate::types::{NodeData, NodeId};

/// Find the first node whose id matches, starting at `root`.
///
/// The root itself is tested before its descendants. Ids are expected to be
/// unique within a document, making the result independent of traversal
/// order. Returns `None` when nothing matches or `root` is stale.
pub fn find_by_id(tree: &Tree, root: NodeId, id: &str) -> Option<NodeId> {
    if !tree.is_alive(root) {
        return None;
    }
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        if let Some(data) = tree.data(node)
            && data.id == id
        {
            return Some(node);
        }
        queue.extend(tree.children_of(node).iter().copied());
    }
    None
}

/// Collect every descendant of `root` with the given tag, in level order.
///
/// The root itself is excluded from matching. Returns an empty list when
/// nothing matches or `root` is stale.
pub fn find_all_by_tag(tree: &Tree, root: NodeId, tag: &str) -> Vec<NodeId> {
    collect_descendants(tree, root, |data| data.tag == tag)
}

/// Collect every descendant of `root` with the given class set, in level
/// order.
///
/// The root itself is excluded from matching. Returns an empty list when
/// nothing matches or `root` is stale.
pub fn find_all_by_class(tree: &Tree, root: NodeId, class: &str) -> Vec<NodeId> {
    collect_descendants(tree, root, |data| data.has_class(class))
}

fn collect_descendants(
    tree: &Tree,
    root: NodeId,
    matches: impl Fn(&NodeData) -> bool,
) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut queue: VecDeque<NodeId> = tree.children_of(root).iter().copied().collect();

    while let Some(node) = queue.pop_front() {
        if let Some(data) = tree.data(node)
            && matches(data)
        {
            out.push(node);
        }
        queue.extend(tree.children_of(node).iter().copied());
    }
    out
}
