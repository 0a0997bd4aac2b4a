// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=readalong_geometry --heading-base-level=0

//! Readalong Geometry: stateless element geometry for hover tracking.
//!
//! ## Overview
//!
//! This crate answers three questions about an element of a host document, always reading fresh
//! values through [`LayoutHost`]:
//!
//! - Where is it? [`bounding_box_of`] returns a [`BoundingBox`] with a document-space origin
//!   (`x`/`y`) and a viewport-space origin (`top`/`left`).
//! - Is a pointer over it? [`contains_point`] (strict) and [`contains_point_inclusive`] (edges count).
//! - How tall is its first line? [`first_line_height`] estimates it from computed font sizes.
//!
//! There is no state, no caching and no error path: detached elements read as degenerate values
//! (see [`host`]) and simply fail containment.
//!
//! ## Not a layout engine
//!
//! The host computes layout. This crate only reads rectangles, scroll offsets, text and font sizes.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use readalong_geometry::{LayoutHost, bounding_box_of, contains_point, contains_point_inclusive};
//!
//! // A one-element host.
//! struct One;
//! impl LayoutHost for One {
//!     type Element = ();
//!     fn client_rect(&self, _: &()) -> Rect { Rect::new(0.0, 0.0, 100.0, 20.0) }
//!     fn scroll_offset(&self) -> Vec2 { Vec2::new(0.0, 40.0) }
//!     fn text_content(&self, _: &()) -> String { String::new() }
//!     fn font_size(&self, _: &()) -> Option<f64> { Some(16.0) }
//!     fn first_inline_descendant(&self, _: &()) -> Option<()> { None }
//! }
//!
//! let b = bounding_box_of(&One, &());
//! assert_eq!((b.y, b.top), (40.0, 0.0));
//!
//! // Edges count for the inclusive test only.
//! let edge = Point::new(0.0, 10.0);
//! assert!(!contains_point(&One, edge, &()));
//! assert!(contains_point_inclusive(&One, edge, &()));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
pub mod host;
mod line;

#[cfg(test)]
mod testing;

pub use bounds::{BoundingBox, bounding_box_of, contains_point, contains_point_inclusive};
pub use host::LayoutHost;
pub use line::{INLINE_TAGS, first_line_height, is_inline_tag};
