// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding boxes and point containment.
//!
//! ## Coordinate spaces
//!
//! - Viewport space: what [`LayoutHost::client_rect`] reports and what pointer-move events carry.
//! - Document space: viewport space plus the current scroll offset.
//!
//! [`BoundingBox`] carries both: `x`/`y` in document space, `top`/`left` in viewport space for
//! anchoring fixed-position overlays.
//!
//! ## Two containment tests
//!
//! [`contains_point`] excludes the boundary so adjacent elements sharing an edge never both claim
//! a point on it. [`contains_point_inclusive`] includes the boundary and is what hover scanning
//! uses, since pointers entering from outside the document flow commonly land on edge pixels.
//! The two disagree on edges on purpose.

use kurbo::{Point, Rect};

use crate::host::LayoutHost;

/// Bounds of an element, read fresh from the host.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    /// Document-space left edge.
    pub x: f64,
    /// Document-space top edge.
    pub y: f64,
    /// Viewport-space top edge.
    pub top: f64,
    /// Viewport-space left edge.
    pub left: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl BoundingBox {
    /// Rectangle in document space.
    pub fn document_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Rectangle in viewport space.
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }

    /// Viewport-space top-left corner.
    pub fn anchor(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// True if the box has no area (for example, a detached element).
    pub fn is_degenerate(&self) -> bool {
        is_degenerate(self.viewport_rect())
    }
}

/// Compute the bounding box of `element` from its current viewport rectangle and scroll offset.
///
/// Nothing is cached. A detached element yields a zero-sized box at the scroll offset.
pub fn bounding_box_of<H: LayoutHost + ?Sized>(host: &H, element: &H::Element) -> BoundingBox {
    let rect = host.client_rect(element);
    let scroll = host.scroll_offset();
    BoundingBox {
        x: rect.x0 + scroll.x,
        y: rect.y0 + scroll.y,
        top: rect.y0,
        left: rect.x0,
        width: rect.width(),
        height: rect.height(),
    }
}

/// Returns true if the viewport-space `point` lies strictly inside `element`.
///
/// Points on an edge are outside.
pub fn contains_point<H: LayoutHost + ?Sized>(host: &H, point: Point, element: &H::Element) -> bool {
    strictly_inside(host.client_rect(element), point)
}

/// Returns true if the viewport-space `point` lies inside `element` or on its edge.
///
/// A rectangle with zero width or height contains nothing, so detached elements never match.
pub fn contains_point_inclusive<H: LayoutHost + ?Sized>(
    host: &H,
    point: Point,
    element: &H::Element,
) -> bool {
    inside_or_on_edge(host.client_rect(element), point)
}

pub(crate) fn strictly_inside(rect: Rect, pt: Point) -> bool {
    pt.x > rect.x0 && pt.x < rect.x1 && pt.y > rect.y0 && pt.y < rect.y1
}

pub(crate) fn inside_or_on_edge(rect: Rect, pt: Point) -> bool {
    if is_degenerate(rect) {
        return false;
    }
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

fn is_degenerate(rect: Rect) -> bool {
    !(rect.width() > 0.0 && rect.height() > 0.0)
}
