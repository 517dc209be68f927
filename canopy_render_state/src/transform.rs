// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change-diffed transform submission.

use canopy_doc_tree::{NodeId, Tree};

use crate::boundary::RenderBoundary;
use crate::context::Context;

/// Bring the boundary's transform in line with a node's transform state.
///
/// The desired transform is the node's, or `None` for nodes without
/// transform state. It is compared against the context's last-submitted
/// transform, which is held by value in the [`Context`]; when they match,
/// the boundary is not called at all. A fresh context starts with nothing
/// submitted, so applying an untransformed node is a no-op rather than a
/// spurious reset.
///
/// Returns `false` (without touching boundary or cache) when the node is
/// stale.
pub fn apply_transform<R: RenderBoundary>(
    tree: &Tree,
    node: NodeId,
    ctx: &mut Context<R>,
) -> bool {
    let Some(data) = tree.data(node) else {
        return false;
    };
    let desired = data.transform.as_ref().and_then(|s| s.transform().copied());

    if desired != ctx.last_transform {
        ctx.boundary.set_transform(desired.as_ref());
        ctx.last_transform = desired;
    }
    true
}
