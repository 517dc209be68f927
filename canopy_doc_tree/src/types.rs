// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document tree: node identifiers, flags, clip
//! directives, and per-node data.

use alloc::string::String;
use glam::Mat4;
use hashbrown::HashSet;
use kurbo::{Size, Vec2};
use smallvec::{SmallVec, smallvec};

use crate::box_model::BoxModel;

/// Identifier for a node in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and overflow clipping.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible.
        const VISIBLE        = 0b0000_0001;
        /// Node clips overflowing content to its content rectangle. A node
        /// only produces a clip region when it also actually overflows.
        const CLIPS_OVERFLOW = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// How many enclosing clip regions a node asks to skip.
///
/// This replaces a signed counter whose negative values meant "ignore
/// everything": [`ClipIgnore::All`] disables ancestor clipping for the node
/// outright, while [`ClipIgnore::Depth`] skips the nearest N clip-enabled
/// ancestors. `Depth(0)` is the default and skips nothing.
///
/// During resolution an ancestor's own directive is inherited as a floor: a
/// node never skips fewer regions than an ancestor asks for, and an ancestor
/// with `All` blocks all clipping above it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClipIgnore {
    /// Skip the nearest N enclosing clip regions.
    Depth(u32),
    /// Ignore every ancestor clip region unconditionally.
    All,
}

impl Default for ClipIgnore {
    fn default() -> Self {
        Self::Depth(0)
    }
}

/// A computed dimension: automatic or a fixed length.
///
/// Only the computed height is needed here; it decides whether an anchored
/// node is stretched to fill its containing block.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Sizing {
    /// Sized by the layout algorithm.
    Auto,
    /// A fixed computed length.
    Fixed(f64),
}

impl Default for Sizing {
    fn default() -> Self {
        Self::Auto
    }
}

/// Per-axis scrollbar thickness.
///
/// The vertical scrollbar consumes width, the horizontal scrollbar consumes
/// height; both reduce the containing block handed to children.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollbarSizes {
    /// Thickness of the vertical scrollbar (reduces available width).
    pub vertical: f64,
    /// Thickness of the horizontal scrollbar (reduces available height).
    pub horizontal: f64,
}

/// Owned transform state of a node: an optional 4×4 matrix.
///
/// The matrix is stored by value. Consumers that cache "last submitted"
/// transforms compare and store values too, so no reference into this state
/// ever outlives it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TransformState {
    transform: Option<Mat4>,
}

impl TransformState {
    /// Create a state holding the given matrix.
    pub const fn new(transform: Mat4) -> Self {
        Self {
            transform: Some(transform),
        }
    }

    /// The active matrix, if any.
    pub const fn transform(&self) -> Option<&Mat4> {
        self.transform.as_ref()
    }

    /// Replace the active matrix.
    pub const fn set_transform(&mut self, transform: Option<Mat4>) {
        self.transform = transform;
    }
}

/// Per-node payload: geometry, clip state, identity, and transform.
#[derive(Clone, Debug)]
pub struct NodeData {
    /// Fragment boxes. The first entry is the principal box; nodes whose
    /// content wraps across fragments carry one box per fragment.
    pub boxes: SmallVec<[BoxModel; 1]>,
    /// Border-box origin relative to the parent's border-box origin.
    pub offset: Vec2,
    /// Visibility and clipping flags.
    pub flags: NodeFlags,
    /// Ancestor-clip skip directive.
    pub clip_ignore: ClipIgnore,
    /// Scrollbar thickness per axis.
    pub scrollbar: ScrollbarSizes,
    /// Visible (client) extent of the content area.
    pub client_size: Size,
    /// Full scrollable extent of the content.
    pub scroll_size: Size,
    /// Computed height, mirrored from the style system.
    pub height: Sizing,
    /// Element id. Expected unique within a document.
    pub id: String,
    /// Tag name.
    pub tag: String,
    /// Class names set on the node.
    pub classes: HashSet<String>,
    /// Optional transform state.
    pub transform: Option<TransformState>,
}

impl Default for NodeData {
    fn default() -> Self {
        Self {
            boxes: smallvec![BoxModel::new()],
            offset: Vec2::ZERO,
            flags: NodeFlags::default(),
            clip_ignore: ClipIgnore::default(),
            scrollbar: ScrollbarSizes::default(),
            client_size: Size::ZERO,
            scroll_size: Size::ZERO,
            height: Sizing::default(),
            id: String::new(),
            tag: String::new(),
            classes: HashSet::new(),
            transform: None,
        }
    }
}

impl NodeData {
    /// The principal (first) fragment box.
    pub fn principal_box(&self) -> &BoxModel {
        &self.boxes[0]
    }

    /// Whether the node's content overflows its client area on either axis.
    pub fn overflows(&self) -> bool {
        self.client_size.width < self.scroll_size.width
            || self.client_size.height < self.scroll_size.height
    }

    /// Whether the given class name is set on the node.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }
}
