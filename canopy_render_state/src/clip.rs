// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip-region resolution and change-diffed scissor submission.

use canopy_doc_tree::{BoxArea, ClipIgnore, NodeFlags, NodeId, Tree};
use glam::IVec2;
use kurbo::{Size, Vec2};

use crate::boundary::RenderBoundary;
use crate::context::Context;

/// An integer clip rectangle in absolute coordinates.
///
/// Both size components are non-negative; a zero-sized rectangle is an
/// *active* region that clips everything, which is distinct from "no clip"
/// (`Option::None` at the API level).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClipRect {
    /// Top-left corner.
    pub origin: IVec2,
    /// Extent; components are ≥ 0.
    pub size: IVec2,
}

impl ClipRect {
    /// Build a rectangle from float geometry, rounding each component to
    /// the nearest integer.
    pub fn from_rounded(origin: Vec2, size: Size) -> Self {
        Self {
            origin: IVec2::new(round_to_int(origin.x), round_to_int(origin.y)),
            size: IVec2::new(round_to_int(size.width), round_to_int(size.height)),
        }
    }

    /// The intersection of two rectangles.
    ///
    /// The result's origin is the componentwise max of the origins, its far
    /// corner the componentwise min of the far corners, and its size is
    /// clamped to zero where the rectangles do not overlap. Commutative and
    /// associative.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        let top_left = self.origin.max(other.origin);
        let bottom_right = (self.origin + self.size).min(other.origin + other.size);
        Self {
            origin: top_left,
            size: (bottom_right - top_left).max(IVec2::ZERO),
        }
    }
}

/// Round half away from zero, matching the renderer's pixel snapping.
fn round_to_int(v: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Clip geometry fits comfortably in i32."
    )]
    if v >= 0.0 {
        (v + 0.5) as i32
    } else {
        (v - 0.5) as i32
    }
}

/// Resolve the effective clip region for a node from its ancestor chain.
///
/// Walks from the node's parent toward the root, intersecting the absolute
/// content rectangles of every ancestor that both clips its overflow
/// ([`NodeFlags::CLIPS_OVERFLOW`]) and actually overflows. The walk keeps a
/// skip counter seeded from the node's own
/// [`ClipIgnore`]: while positive, each clip-enabled ancestor consumes one
/// skip instead of contributing its rectangle (whether or not it currently
/// overflows). Every ancestor's own directive is inherited as a floor on
/// the counter, and an ancestor with [`ClipIgnore::All`] ends the walk —
/// nothing above it can clip this node.
///
/// Returns `None` when no region applies: the node (or an ancestor on its
/// chain) ignores all clipping, no eligible ancestor exists, or the node is
/// stale. A returned region may be zero-sized, meaning the node is entirely
/// clipped away.
pub fn clip_region(tree: &Tree, node: NodeId) -> Option<ClipRect> {
    let mut skip = match tree.data(node)?.clip_ignore {
        ClipIgnore::All => return None,
        ClipIgnore::Depth(n) => n,
    };

    let mut region: Option<ClipRect> = None;
    let mut ancestor = tree.parent_of(node);

    while let Some(current) = ancestor {
        let Some(data) = tree.data(current) else {
            break;
        };
        let clips = data.flags.contains(NodeFlags::CLIPS_OVERFLOW);

        if skip == 0
            && clips
            && data.overflows()
            && let Some(origin) = tree.absolute_offset(current, BoxArea::Content)
        {
            let rect =
                ClipRect::from_rounded(origin, data.principal_box().size(BoxArea::Content));
            region = Some(match region {
                None => rect,
                Some(acc) => acc.intersect(rect),
            });
        }

        // A skipped ancestor consumes the request even when it has nothing
        // to clip right now; the skip counts clip-enabled ancestors, not
        // produced rectangles.
        if skip > 0 && clips {
            skip -= 1;
        }

        match data.clip_ignore {
            ClipIgnore::All => break,
            ClipIgnore::Depth(n) => skip = skip.max(n),
        }

        ancestor = tree.parent_of(current);
    }

    region
}

/// Bring the boundary's scissor state in line with a node's clip region.
///
/// The desired state is "no clip" when `node` is `None`, otherwise the
/// result of [`clip_region`]. When it matches the context's cached active
/// region the boundary is not touched at all; on any difference — including
/// flips between active and inactive — the cache is updated and the new
/// state submitted via [`submit_active_clip`].
///
/// Returns `false` (without touching boundary or cache) when the given node
/// is stale.
pub fn apply_clip_region<R: RenderBoundary>(
    tree: &Tree,
    node: Option<NodeId>,
    ctx: &mut Context<R>,
) -> bool {
    let desired = match node {
        Some(id) => {
            if !tree.is_alive(id) {
                return false;
            }
            clip_region(tree, id)
        }
        None => None,
    };

    if desired != ctx.active_clip {
        ctx.active_clip = desired;
        submit_active_clip(ctx);
    }
    true
}

/// Submit the cached active clip region to the boundary.
///
/// Issues exactly one `enable_scissor` call, plus one `set_scissor` call
/// when a region is active.
pub fn submit_active_clip<R: RenderBoundary>(ctx: &mut Context<R>) {
    match ctx.active_clip {
        Some(rect) => {
            ctx.boundary.enable_scissor(true);
            ctx.boundary
                .set_scissor(rect.origin.x, rect.origin.y, rect.size.x, rect.size.y);
        }
        None => ctx.boundary.enable_scissor(false),
    }
}
