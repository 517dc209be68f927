// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box geometry: the nested content/padding/border/margin rectangles of a
//! fragment box.

use kurbo::{Size, Vec2};

/// The nested areas of a box, innermost to outermost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoxArea {
    /// The content rectangle.
    Content,
    /// Content plus padding.
    Padding,
    /// Padding plus border widths.
    Border,
    /// Border plus margins.
    Margin,
}

/// One edge of a box area.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoxEdge {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

impl BoxEdge {
    const fn idx(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }
}

/// Geometry of a single fragment box.
///
/// A `BoxModel` stores the content size plus per-edge margin, border, and
/// padding widths. All derived rectangles are expressed relative to the
/// border-box origin (the top-left corner of the border area), which is also
/// the point a node's offset refers to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxModel {
    content: Size,
    /// Edge widths indexed by [top, right, bottom, left].
    margin: [f64; 4],
    border: [f64; 4],
    padding: [f64; 4],
}

impl Default for BoxModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxModel {
    /// A box with zero content size and zero edges.
    pub const fn new() -> Self {
        Self {
            content: Size::ZERO,
            margin: [0.0; 4],
            border: [0.0; 4],
            padding: [0.0; 4],
        }
    }

    /// The content size.
    pub const fn content(&self) -> Size {
        self.content
    }

    /// Replace the content size, keeping all edge widths.
    pub const fn set_content(&mut self, content: Size) {
        self.content = content;
    }

    /// The width of one edge of an area.
    ///
    /// The content area has no edges; asking for one returns `0.0`.
    pub const fn edge(&self, area: BoxArea, edge: BoxEdge) -> f64 {
        match area {
            BoxArea::Content => 0.0,
            BoxArea::Padding => self.padding[edge.idx()],
            BoxArea::Border => self.border[edge.idx()],
            BoxArea::Margin => self.margin[edge.idx()],
        }
    }

    /// Set the width of one edge of an area. Setting a content edge is a
    /// no-op.
    pub const fn set_edge(&mut self, area: BoxArea, edge: BoxEdge, width: f64) {
        match area {
            BoxArea::Content => {}
            BoxArea::Padding => self.padding[edge.idx()] = width,
            BoxArea::Border => self.border[edge.idx()] = width,
            BoxArea::Margin => self.margin[edge.idx()] = width,
        }
    }

    const fn h_sum(edges: &[f64; 4]) -> f64 {
        edges[BoxEdge::Left.idx()] + edges[BoxEdge::Right.idx()]
    }

    const fn v_sum(edges: &[f64; 4]) -> f64 {
        edges[BoxEdge::Top.idx()] + edges[BoxEdge::Bottom.idx()]
    }

    /// The size of an area, accumulated outward from the content rectangle.
    pub const fn size(&self, area: BoxArea) -> Size {
        let mut w = self.content.width;
        let mut h = self.content.height;
        if matches!(area, BoxArea::Padding | BoxArea::Border | BoxArea::Margin) {
            w += Self::h_sum(&self.padding);
            h += Self::v_sum(&self.padding);
        }
        if matches!(area, BoxArea::Border | BoxArea::Margin) {
            w += Self::h_sum(&self.border);
            h += Self::v_sum(&self.border);
        }
        if matches!(area, BoxArea::Margin) {
            w += Self::h_sum(&self.margin);
            h += Self::v_sum(&self.margin);
        }
        Size::new(w, h)
    }

    /// The top-left corner of an area, relative to the border-box origin.
    ///
    /// The margin origin is up and to the left of the border-box origin, so
    /// its components are negative (or zero) here.
    pub const fn position(&self, area: BoxArea) -> Vec2 {
        match area {
            BoxArea::Margin => Vec2::new(
                -self.margin[BoxEdge::Left.idx()],
                -self.margin[BoxEdge::Top.idx()],
            ),
            BoxArea::Border => Vec2::new(0.0, 0.0),
            BoxArea::Padding => Vec2::new(
                self.border[BoxEdge::Left.idx()],
                self.border[BoxEdge::Top.idx()],
            ),
            BoxArea::Content => Vec2::new(
                self.border[BoxEdge::Left.idx()] + self.padding[BoxEdge::Left.idx()],
                self.border[BoxEdge::Top.idx()] + self.padding[BoxEdge::Top.idx()],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoxModel {
        let mut b = BoxModel::new();
        b.set_content(Size::new(100.0, 50.0));
        // Asymmetric edges so the sums are distinguishable per side.
        b.set_edge(BoxArea::Padding, BoxEdge::Left, 1.0);
        b.set_edge(BoxArea::Padding, BoxEdge::Right, 2.0);
        b.set_edge(BoxArea::Padding, BoxEdge::Top, 3.0);
        b.set_edge(BoxArea::Padding, BoxEdge::Bottom, 4.0);
        b.set_edge(BoxArea::Border, BoxEdge::Left, 5.0);
        b.set_edge(BoxArea::Border, BoxEdge::Right, 6.0);
        b.set_edge(BoxArea::Border, BoxEdge::Top, 7.0);
        b.set_edge(BoxArea::Border, BoxEdge::Bottom, 8.0);
        b.set_edge(BoxArea::Margin, BoxEdge::Left, 9.0);
        b.set_edge(BoxArea::Margin, BoxEdge::Right, 10.0);
        b.set_edge(BoxArea::Margin, BoxEdge::Top, 11.0);
        b.set_edge(BoxArea::Margin, BoxEdge::Bottom, 12.0);
        b
    }

    #[test]
    fn sizes_accumulate_outward() {
        let b = sample();
        assert_eq!(b.size(BoxArea::Content), Size::new(100.0, 50.0));
        assert_eq!(b.size(BoxArea::Padding), Size::new(103.0, 57.0));
        assert_eq!(b.size(BoxArea::Border), Size::new(114.0, 72.0));
        assert_eq!(b.size(BoxArea::Margin), Size::new(133.0, 95.0));
    }

    #[test]
    fn positions_relative_to_border_origin() {
        let b = sample();
        assert_eq!(b.position(BoxArea::Border), Vec2::new(0.0, 0.0));
        assert_eq!(b.position(BoxArea::Padding), Vec2::new(5.0, 7.0));
        assert_eq!(b.position(BoxArea::Content), Vec2::new(6.0, 10.0));
        assert_eq!(b.position(BoxArea::Margin), Vec2::new(-9.0, -11.0));
    }

    #[test]
    fn content_area_has_no_edges() {
        let mut b = sample();
        assert_eq!(b.edge(BoxArea::Content, BoxEdge::Left), 0.0);
        b.set_edge(BoxArea::Content, BoxEdge::Left, 42.0);
        assert_eq!(b.edge(BoxArea::Content, BoxEdge::Left), 0.0);
    }

    #[test]
    fn set_content_keeps_edges() {
        let mut b = sample();
        b.set_content(Size::new(10.0, 10.0));
        assert_eq!(b.edge(BoxArea::Margin, BoxEdge::Left), 9.0);
        assert_eq!(b.size(BoxArea::Padding), Size::new(13.0, 17.0));
    }
}
