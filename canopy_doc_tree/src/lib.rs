// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Doc Tree: a retained hierarchical document tree.
//!
//! This crate owns the node hierarchy that the rest of the Canopy crates
//! position and clip. Each node carries the geometry and identity needed by
//! those layers:
//!
//! - One or more fragment boxes ([`BoxModel`]) describing the node's
//!   content/padding/border/margin rectangles. A node usually has exactly one
//!   box; wrapped content may produce several.
//! - An offset relative to its parent, from which absolute positions are
//!   accumulated on demand.
//! - Clip state: a clipping-enabled flag ([`NodeFlags::CLIPS_OVERFLOW`]),
//!   a [`ClipIgnore`] directive, client/scroll extents for overflow
//!   detection, and per-axis scrollbar thickness.
//! - Identity: `id`, `tag`, and a class set, queried by the breadth-first
//!   [`search`] helpers.
//! - An optional [`TransformState`] owning a 4×4 matrix.
//!
//! Children are owned by their parent in tree order; parent links are plain
//! generational ids, never owning. Removing a node removes its subtree and
//! makes the ids stale; stale ids are answered with `None`/empty rather than
//! panics.
//!
//! ## Not a layout engine
//!
//! Nothing here computes sizes. Box geometry is produced by an external
//! layout algorithm (see `canopy_position`) and stored on the node.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod box_model;
mod tree;
mod types;

pub mod search;

pub use box_model::{BoxArea, BoxEdge, BoxModel};
pub use tree::Tree;
pub use types::{ClipIgnore, NodeData, NodeFlags, NodeId, ScrollbarSizes, Sizing, TransformState};
