// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render-boundary capability.

use glam::Mat4;

/// Render-state sink owned by a [`Context`][crate::Context].
///
/// Implementations translate these calls into their graphics API. The
/// appliers in this crate guarantee they only call into the boundary when
/// the requested state actually differs from what was last submitted, so
/// implementations need no deduplication of their own.
pub trait RenderBoundary {
    /// Enable or disable scissor testing.
    fn enable_scissor(&mut self, enable: bool);

    /// Set the scissor rectangle. Only called while scissoring is enabled;
    /// a zero-sized rectangle is valid and clips everything.
    fn set_scissor(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Replace the active transform. `None` restores the identity/default
    /// transform.
    fn set_transform(&mut self, transform: Option<&Mat4>);
}
