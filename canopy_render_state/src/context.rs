// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-boundary render-state caches and document roots.

use alloc::vec::Vec;
use canopy_doc_tree::NodeId;
use glam::Mat4;

use crate::boundary::RenderBoundary;
use crate::clip::ClipRect;

/// A rendering context: one render boundary, the documents drawn into it,
/// and the state caches that keep boundary calls minimal.
///
/// The context owns its [`RenderBoundary`] and two caches:
///
/// - the *active clip region* — the scissor state the boundary is currently
///   believed to hold (`None` = scissoring disabled);
/// - the *last-submitted transform* — stored by value, so the cache never
///   holds a reference into some node's transform state.
///
/// Both caches assume they are the only path to the boundary's scissor and
/// transform state. If the host changes that state behind the context's
/// back, it must resubmit through [`submit_active_clip`][crate::submit_active_clip]
/// or reset the caches by recreating the context.
pub struct Context<R: RenderBoundary> {
    pub(crate) boundary: R,
    roots: Vec<NodeId>,
    pub(crate) active_clip: Option<ClipRect>,
    pub(crate) last_transform: Option<Mat4>,
}

impl<R: RenderBoundary> core::fmt::Debug for Context<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("roots", &self.roots)
            .field("active_clip", &self.active_clip)
            .field("last_transform", &self.last_transform)
            .finish_non_exhaustive()
    }
}

impl<R: RenderBoundary> Context<R> {
    /// Create a context around a render boundary, with no documents and
    /// empty caches.
    pub const fn new(boundary: R) -> Self {
        Self {
            boundary,
            roots: Vec::new(),
            active_clip: None,
            last_transform: None,
        }
    }

    /// Borrow the render boundary.
    pub const fn boundary(&self) -> &R {
        &self.boundary
    }

    /// Mutably borrow the render boundary.
    ///
    /// Touching scissor or transform state directly invalidates the
    /// context's caches; see the type-level docs.
    pub const fn boundary_mut(&mut self) -> &mut R {
        &mut self.boundary
    }

    /// Consume the context, returning the boundary.
    pub fn into_boundary(self) -> R {
        self.boundary
    }

    /// Register a document root drawn through this context.
    pub fn add_root(&mut self, root: NodeId) {
        if !self.roots.contains(&root) {
            self.roots.push(root);
        }
    }

    /// Unregister a document root.
    pub fn remove_root(&mut self, root: NodeId) {
        self.roots.retain(|r| *r != root);
    }

    /// The document roots drawn through this context, in registration order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The clip region the boundary is currently believed to hold.
    pub const fn active_clip(&self) -> Option<ClipRect> {
        self.active_clip
    }

    /// Overwrite the cached active clip region without touching the
    /// boundary. Pair with [`submit_active_clip`][crate::submit_active_clip]
    /// to force a resubmission.
    pub const fn set_active_clip(&mut self, clip: Option<ClipRect>) {
        self.active_clip = clip;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingBoundary;
    use glam::IVec2;

    #[test]
    fn roots_registration_is_idempotent() {
        let mut tree = canopy_doc_tree::Tree::new();
        let a = tree.insert(None, canopy_doc_tree::NodeData::default());
        let b = tree.insert(None, canopy_doc_tree::NodeData::default());

        let mut ctx = Context::new(RecordingBoundary::new());
        ctx.add_root(a);
        ctx.add_root(b);
        ctx.add_root(a);
        assert_eq!(ctx.roots(), &[a, b]);

        ctx.remove_root(a);
        assert_eq!(ctx.roots(), &[b]);
    }

    #[test]
    fn new_context_has_empty_caches() {
        let ctx = Context::new(RecordingBoundary::new());
        assert!(ctx.active_clip().is_none());
        assert!(ctx.last_transform.is_none());
        assert!(ctx.boundary().calls.is_empty());
    }

    #[test]
    fn set_active_clip_does_not_touch_boundary() {
        let mut ctx = Context::new(RecordingBoundary::new());
        ctx.set_active_clip(Some(ClipRect {
            origin: IVec2::new(0, 0),
            size: IVec2::new(10, 10),
        }));
        assert!(ctx.boundary().calls.is_empty());
        assert!(ctx.active_clip().is_some());
    }
}
