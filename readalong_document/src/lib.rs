// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=readalong_document --heading-base-level=0

//! Readalong Document: an in-memory element tree that acts as a layout host.
//!
//! Readalong's hover tracking reads all geometry through
//! [`readalong_geometry::LayoutHost`]. In a browser that host is the DOM; everywhere else (tests,
//! demos, benchmarks, embedding in a native text view) this crate provides one.
//!
//! - Elements carry a tag, their own text, a document-space layout box, and an optional font size.
//! - Text content concatenates descendants in document order; font sizes inherit from ancestors.
//! - Client rectangles are layout boxes shifted by the current scroll offset.
//! - [`ElementId`]s are generational: removing an element makes every handle to it read as
//!   detached (zero rectangle, empty text) without ever aliasing a newer element.
//!
//! ## Not a layout engine
//!
//! Positions and sizes are supplied by the caller. Think of this as a scene description, not a
//! layout system.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use readalong_document::{Document, ElementData};
//! use readalong_geometry::{bounding_box_of, contains_point_inclusive, first_line_height};
//!
//! let mut doc = Document::new();
//! let body = doc.insert(None, ElementData::new("body").with_font_size(16.0));
//! let p = doc.insert(
//!     Some(body),
//!     ElementData::new("p")
//!         .with_text("Call me Ishmael.")
//!         .with_rect(Rect::new(0.0, 400.0, 300.0, 420.0)),
//! );
//!
//! // Scroll so the paragraph sits at the top of the viewport.
//! doc.scroll_to(Vec2::new(0.0, 400.0));
//! let b = bounding_box_of(&doc, &p);
//! assert_eq!((b.top, b.y), (0.0, 400.0));
//! assert!(contains_point_inclusive(&doc, Point::new(10.0, 10.0), &p));
//! assert_eq!(first_line_height(&doc, &p), 16.0);
//!
//! // Candidates in document order.
//! assert_eq!(doc.select(&["p", "blockquote"]), vec![p]);
//!
//! // Removed elements read as detached.
//! doc.remove(p);
//! assert_eq!(doc.client_rect(p), Rect::ZERO);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod types;

pub use document::Document;
pub use types::{ElementData, ElementId};
