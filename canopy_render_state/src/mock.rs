// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording boundary for tests.

use alloc::vec::Vec;
use glam::Mat4;

use crate::boundary::RenderBoundary;

/// One call observed by a [`RecordingBoundary`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Call {
    EnableScissor(bool),
    SetScissor(i32, i32, i32, i32),
    SetTransform(Option<Mat4>),
}

/// A boundary that records every call it receives, in order.
#[derive(Default, Debug)]
pub(crate) struct RecordingBoundary {
    pub(crate) calls: Vec<Call>,
}

impl RecordingBoundary {
    pub(crate) const fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Drain the recorded calls, leaving the boundary empty.
    pub(crate) fn take(&mut self) -> Vec<Call> {
        core::mem::take(&mut self.calls)
    }
}

impl RenderBoundary for RecordingBoundary {
    fn enable_scissor(&mut self, enable: bool) {
        self.calls.push(Call::EnableScissor(enable));
    }

    fn set_scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(Call::SetScissor(x, y, width, height));
    }

    fn set_transform(&mut self, transform: Option<&Mat4>) {
        self.calls.push(Call::SetTransform(transform.copied()));
    }
}
