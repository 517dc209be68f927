// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Position: box building and anchored positioning.
//!
//! This crate turns a "put this node here" request into stored geometry on
//! the [`Tree`]: it derives the node's containing block from its parent,
//! asks an external layout algorithm to produce the node's box, resolves
//! anchor flags against the containing block, and writes the resulting
//! offset back to the node.
//!
//! ## Not a layout engine
//!
//! The actual box construction (width/height resolution, margins from
//! computed style) belongs to the host's layout algorithm, reached through
//! the [`BoxBuilder`] capability. Hosts hand a `BoxBuilder` to these
//! functions at the call site; this crate never inspects style beyond the
//! node's computed height.
//!
//! ## Failure model
//!
//! Nothing here panics on bad input. Operations that need a parent (the
//! containing block comes from it) return `false` and leave the tree
//! untouched when the node is a root or stale; callers decide whether to
//! retry or skip.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Size, Vec2};

use canopy_doc_tree::{BoxArea, BoxEdge, BoxModel, NodeData, NodeId, Sizing, Tree};

bitflags::bitflags! {
    /// Anchor directives for [`position_node`].
    ///
    /// An empty set anchors the offset to the containing block's top-left
    /// edge; [`AnchorFlags::RIGHT`] and [`AnchorFlags::BOTTOM`] measure the
    /// respective offset component from the far edge instead.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AnchorFlags: u8 {
        /// Measure the x offset from the containing block's right edge.
        const RIGHT  = 0b0000_0001;
        /// Measure the y offset from the containing block's bottom edge.
        const BOTTOM = 0b0000_0010;
    }
}

/// The external box-building algorithm at its interface boundary.
///
/// Implementations resolve the node's computed style against the containing
/// block and produce a [`BoxModel`]. They must not mutate shared state; the
/// same call may be issued repeatedly for the same node.
pub trait BoxBuilder {
    /// Build a box for `node` inside `containing_block`.
    ///
    /// `inline_context` signals that the node participates in inline layout,
    /// which affects how the algorithm resolves automatic widths.
    fn build_box(&self, containing_block: Size, node: &NodeData, inline_context: bool) -> BoxModel;
}

/// The containing block a parent hands to its children.
///
/// This is the parent's content-box size, reduced by the parent's own
/// scrollbars: the vertical scrollbar consumes width and the horizontal one
/// consumes height. Returns `None` for stale ids.
pub fn containing_block(tree: &Tree, parent: NodeId) -> Option<Size> {
    let data = tree.data(parent)?;
    let content = data.principal_box().size(BoxArea::Content);
    Some(Size::new(
        content.width - data.scrollbar.vertical,
        content.height - data.scrollbar.horizontal,
    ))
}

/// Build and store the principal box for a node.
///
/// The containing block is derived from the node's parent, so the node must
/// have one; returns `false` without touching the tree otherwise. When the
/// node's computed height is fixed, the resulting content height is forced
/// to the containing block's height so that anchored nodes fill their
/// parent.
pub fn compute_box<B: BoxBuilder + ?Sized>(tree: &mut Tree, builder: &B, node: NodeId) -> bool {
    let Some(parent) = tree.parent_of(node) else {
        return false;
    };
    let Some(containing) = containing_block(tree, parent) else {
        return false;
    };
    let Some(data) = tree.data(node) else {
        return false;
    };

    let mut bm = builder.build_box(containing, data, false);
    if matches!(data.height, Sizing::Fixed(_)) {
        bm.set_content(Size::new(bm.content().width, containing.height));
    }
    tree.set_principal_box(node, bm);
    true
}

/// Build a box without storing it: pure delegation to the algorithm.
pub fn build_box<B: BoxBuilder + ?Sized>(
    builder: &B,
    containing_block: Size,
    node: &NodeData,
    inline_context: bool,
) -> BoxModel {
    builder.build_box(containing_block, node, inline_context)
}

/// Position a node's border box at `offset` within its parent's content
/// area.
///
/// The stored offset is the parent's content origin plus the requested
/// offset plus the node's own left/top margins, so the *margin box* lands at
/// the requested offset. Returns `false` for roots and stale ids.
pub fn compute_offset(tree: &mut Tree, node: NodeId, offset: Vec2) -> bool {
    let Some(parent) = tree.parent_of(node) else {
        return false;
    };
    let Some(parent_data) = tree.data(parent) else {
        return false;
    };
    let parent_content = parent_data.principal_box().position(BoxArea::Content);
    let Some(data) = tree.data(node) else {
        return false;
    };
    let bm = data.principal_box();
    let relative = parent_content
        + offset
        + Vec2::new(
            bm.edge(BoxArea::Margin, BoxEdge::Left),
            bm.edge(BoxArea::Margin, BoxEdge::Top),
        );
    tree.set_offset(node, relative);
    true
}

/// Size a node and position it within its parent, honoring anchor flags.
///
/// Fails (and leaves the tree untouched) when the node has no parent.
/// Otherwise the node's box is recomputed via [`compute_box`], the offset is
/// resolved against the parent's content-box size — [`AnchorFlags::RIGHT`]
/// turns `offset.x` into a distance from the right edge of the containing
/// block to the node's margin box, [`AnchorFlags::BOTTOM`] likewise for `y`
/// — and the result is applied with [`compute_offset`].
pub fn position_node<B: BoxBuilder + ?Sized>(
    tree: &mut Tree,
    builder: &B,
    node: NodeId,
    offset: Vec2,
    anchor: AnchorFlags,
) -> bool {
    let Some(parent) = tree.parent_of(node) else {
        return false;
    };

    if !compute_box(tree, builder, node) {
        return false;
    }

    let Some(parent_data) = tree.data(parent) else {
        return false;
    };
    let containing = parent_data.principal_box().size(BoxArea::Content);
    let Some(data) = tree.data(node) else {
        return false;
    };
    let margin_box = data.principal_box().size(BoxArea::Margin);

    let mut resolved = offset;
    if anchor.contains(AnchorFlags::RIGHT) {
        resolved.x = containing.width - (margin_box.width + offset.x);
    }
    if anchor.contains(AnchorFlags::BOTTOM) {
        resolved.y = containing.height - (margin_box.height + offset.y);
    }

    compute_offset(tree, node, resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_doc_tree::ScrollbarSizes;

    /// Builder producing a constant content size with left/top margins,
    /// ignoring style entirely.
    struct FixedBuilder {
        content: Size,
        margin_left: f64,
        margin_top: f64,
    }

    impl BoxBuilder for FixedBuilder {
        fn build_box(&self, _cb: Size, _node: &NodeData, _inline: bool) -> BoxModel {
            let mut bm = BoxModel::new();
            bm.set_content(self.content);
            bm.set_edge(BoxArea::Margin, BoxEdge::Left, self.margin_left);
            bm.set_edge(BoxArea::Margin, BoxEdge::Top, self.margin_top);
            bm
        }
    }

    fn parent_data(content: Size, scrollbar: ScrollbarSizes) -> NodeData {
        let mut bm = BoxModel::new();
        bm.set_content(content);
        bm.set_edge(BoxArea::Border, BoxEdge::Left, 2.0);
        bm.set_edge(BoxArea::Border, BoxEdge::Top, 3.0);
        let mut data = NodeData {
            scrollbar,
            ..NodeData::default()
        };
        data.boxes[0] = bm;
        data
    }

    fn builder() -> FixedBuilder {
        FixedBuilder {
            content: Size::new(40.0, 10.0),
            margin_left: 4.0,
            margin_top: 6.0,
        }
    }

    #[test]
    fn containing_block_subtracts_scrollbars() {
        let mut tree = Tree::new();
        let parent = tree.insert(
            None,
            parent_data(
                Size::new(200.0, 100.0),
                ScrollbarSizes {
                    vertical: 10.0,
                    horizontal: 5.0,
                },
            ),
        );

        assert_eq!(
            containing_block(&tree, parent),
            Some(Size::new(190.0, 95.0))
        );
    }

    #[test]
    fn compute_box_stores_builder_result() {
        let mut tree = Tree::new();
        let parent = tree.insert(
            None,
            parent_data(Size::new(200.0, 100.0), ScrollbarSizes::default()),
        );
        let node = tree.insert(Some(parent), NodeData::default());

        assert!(compute_box(&mut tree, &builder(), node));
        let bm = *tree.data(node).unwrap().principal_box();
        assert_eq!(bm.content(), Size::new(40.0, 10.0));
        assert_eq!(bm.edge(BoxArea::Margin, BoxEdge::Left), 4.0);
    }

    #[test]
    fn fixed_height_fills_containing_block() {
        let mut tree = Tree::new();
        let parent = tree.insert(
            None,
            parent_data(
                Size::new(200.0, 100.0),
                ScrollbarSizes {
                    vertical: 0.0,
                    horizontal: 5.0,
                },
            ),
        );
        let node = tree.insert(
            Some(parent),
            NodeData {
                height: Sizing::Fixed(10.0),
                ..NodeData::default()
            },
        );

        assert!(compute_box(&mut tree, &builder(), node));
        let content = tree.data(node).unwrap().principal_box().content();
        // Width comes from the builder, height is forced to the containing
        // block (parent content height minus the horizontal scrollbar).
        assert_eq!(content, Size::new(40.0, 95.0));
    }

    #[test]
    fn compute_box_fails_without_parent() {
        let mut tree = Tree::new();
        let root = tree.insert(None, NodeData::default());

        assert!(!compute_box(&mut tree, &builder(), root));
    }

    #[test]
    fn build_box_is_pure_delegation() {
        let tree_node = NodeData::default();
        let bm = build_box(&builder(), Size::new(50.0, 50.0), &tree_node, true);
        assert_eq!(bm.content(), Size::new(40.0, 10.0));
    }

    #[test]
    fn unanchored_offset_adds_content_origin_and_margins() {
        let mut tree = Tree::new();
        let parent = tree.insert(
            None,
            parent_data(Size::new(200.0, 100.0), ScrollbarSizes::default()),
        );
        let node = tree.insert(Some(parent), NodeData::default());

        assert!(position_node(
            &mut tree,
            &builder(),
            node,
            Vec2::new(10.0, 20.0),
            AnchorFlags::empty(),
        ));

        // Parent content origin (2, 3) + requested (10, 20) + margins (4, 6).
        assert_eq!(tree.data(node).unwrap().offset, Vec2::new(16.0, 29.0));
    }

    #[test]
    fn right_bottom_anchor_measures_from_far_edges() {
        let mut tree = Tree::new();
        let parent = tree.insert(
            None,
            parent_data(
                Size::new(200.0, 100.0),
                ScrollbarSizes {
                    vertical: 10.0,
                    horizontal: 5.0,
                },
            ),
        );
        let node = tree.insert(Some(parent), NodeData::default());

        assert!(position_node(
            &mut tree,
            &builder(),
            node,
            Vec2::new(10.0, 20.0),
            AnchorFlags::RIGHT | AnchorFlags::BOTTOM,
        ));

        // Margin box is content (40, 10) plus left/top margins (4, 6).
        // Anchoring uses the parent's full content size (200, 100); the
        // scrollbars only shrink the containing block for box building.
        let resolved = Vec2::new(200.0 - (44.0 + 10.0), 100.0 - (16.0 + 20.0));
        let expected = resolved + Vec2::new(2.0, 3.0) + Vec2::new(4.0, 6.0);
        assert_eq!(tree.data(node).unwrap().offset, expected);
    }

    #[test]
    fn position_node_fails_for_roots() {
        let mut tree = Tree::new();
        let root = tree.insert(None, NodeData::default());

        assert!(!position_node(
            &mut tree,
            &builder(),
            root,
            Vec2::ZERO,
            AnchorFlags::empty(),
        ));
        assert_eq!(tree.data(root).unwrap().offset, Vec2::ZERO);
    }
}
