// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Render State: effective clipping and minimal render-state changes.
//!
//! This crate answers two questions for every node the render driver visits:
//! *what rectangle constrains this node's rendering*, and *does the render
//! boundary need to hear about it*.
//!
//! - [`clip_region`] walks a node's ancestor chain and intersects the
//!   content rectangles of every clip-enabled, overflowing ancestor,
//!   honoring per-node [`ClipIgnore`][canopy_doc_tree::ClipIgnore]
//!   directives.
//! - [`apply_clip_region`] and [`apply_transform`] diff the resolved state
//!   against caches owned by the [`Context`] and forward only actual changes
//!   to the [`RenderBoundary`].
//!
//! ## Threading
//!
//! The caches carry no synchronization. A single render/update thread must
//! drive all applies for a given [`Context`]; this is a documented
//! precondition, not something the crate enforces with locks.
//!
//! ## Failure model
//!
//! No panics: appliers return `false` when the node id is stale, and the
//! resolver returns `None` both for "no ancestor clips" and for nodes that
//! opt out of clipping entirely. A fully-collapsed, zero-size clip region is
//! still `Some` — it means "clip everything", not "no clip".
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod boundary;
mod clip;
mod context;
mod transform;

#[cfg(test)]
pub(crate) mod mock;

pub use boundary::RenderBoundary;
pub use clip::{ClipRect, apply_clip_region, clip_region, submit_active_clip};
pub use context::Context;
pub use transform::apply_transform;
