// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, mutation, and geometry accessors.

use alloc::vec::Vec;
use kurbo::{Size, Vec2};

use crate::box_model::{BoxArea, BoxModel};
use crate::types::{ClipIgnore, NodeData, NodeFlags, NodeId, TransformState};

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

impl Node {
    fn new(generation: u32, data: NodeData) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            data,
        }
    }
}

/// The retained document tree.
///
/// Nodes live in a slot arena addressed by generational [`NodeId`]s: removing
/// a node frees its slot, and reusing the slot bumps the generation so stale
/// ids never alias a new node. Children are owned by their parent in tree
/// order; parent links are non-owning back references.
///
/// All accessors answer stale ids with `None`, `false`, or an empty slice.
///
/// ## Example
///
/// ```rust
/// use canopy_doc_tree::{NodeData, Tree};
///
/// let mut tree = Tree::new();
/// let root = tree.insert(None, NodeData::default());
/// let child = tree.insert(Some(root), NodeData::default());
///
/// assert_eq!(tree.parent_of(child), Some(root));
/// assert_eq!(tree.children_of(root), &[child]);
/// ```
#[derive(Clone, Default)]
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Tree {
    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new node as a child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, data: NodeData) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node and its subtree. All removed ids become stale.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` under `new_parent` (or detach it into a root if `None`).
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.1)
    }

    /// Returns the parent of a node if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.node(id).parent
    }

    /// Get the children of a node in tree order, or an empty slice if stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        if !self.is_alive(id) {
            return &[];
        }
        &self.node(id).children
    }

    /// Borrow a live node's data.
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        if !self.is_alive(id) {
            return None;
        }
        Some(&self.node(id).data)
    }

    /// Mutably borrow a live node's data.
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        if !self.is_alive(id) {
            return None;
        }
        Some(&mut self.node_mut(id).data)
    }

    /// Replace the node's principal box, dropping any extra fragment boxes.
    pub fn set_principal_box(&mut self, id: NodeId, bm: BoxModel) {
        if let Some(data) = self.data_mut(id) {
            data.boxes.clear();
            data.boxes.push(bm);
        }
    }

    /// Append a fragment box after the principal box.
    pub fn push_fragment_box(&mut self, id: NodeId, bm: BoxModel) {
        if let Some(data) = self.data_mut(id) {
            data.boxes.push(bm);
        }
    }

    /// Set the node's border-box offset relative to its parent.
    pub fn set_offset(&mut self, id: NodeId, offset: Vec2) {
        if let Some(data) = self.data_mut(id) {
            data.offset = offset;
        }
    }

    /// Set the node's client and scroll extents, used for overflow detection.
    pub fn set_scroll_state(&mut self, id: NodeId, client: Size, scroll: Size) {
        if let Some(data) = self.data_mut(id) {
            data.client_size = client;
            data.scroll_size = scroll;
        }
    }

    /// Replace the node's visibility and clipping flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(data) = self.data_mut(id) {
            data.flags = flags;
        }
    }

    /// Set how many enclosing clip regions the node ignores.
    pub fn set_clip_ignore(&mut self, id: NodeId, clip_ignore: ClipIgnore) {
        if let Some(data) = self.data_mut(id) {
            data.clip_ignore = clip_ignore;
        }
    }

    /// Replace the node's transform state.
    pub fn set_transform(&mut self, id: NodeId, transform: Option<TransformState>) {
        if let Some(data) = self.data_mut(id) {
            data.transform = transform;
        }
    }

    /// Whether the node's content overflows its client area on either axis.
    /// Stale ids do not overflow.
    pub fn overflows(&self, id: NodeId) -> bool {
        self.data(id).is_some_and(NodeData::overflows)
    }

    /// The absolute origin of one of the node's box areas.
    ///
    /// Accumulates parent-relative offsets from the node up to its root, then
    /// applies the principal box's own area position. Returns `None` for
    /// stale ids.
    pub fn absolute_offset(&self, id: NodeId, area: BoxArea) -> Option<Vec2> {
        if !self.is_alive(id) {
            return None;
        }
        let mut total = Vec2::ZERO;
        let mut current = Some(id);
        while let Some(n) = current {
            let node = self.node(n);
            total += node.data.offset;
            current = node.parent;
        }
        Some(total + self.node(id).data.principal_box().position(area))
    }

    // --- internals ---

    /// Access a node; panics if `id` is stale. Callers check liveness first.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}
