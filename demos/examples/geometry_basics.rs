// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry basics.
//!
//! Builds a small page, scrolls it, and prints bounding boxes, containment on an edge, and
//! first-line heights.
//!
//! Run:
//! - `cargo run -p readalong_demos --example geometry_basics`

use kurbo::{Point, Rect, Vec2};
use readalong_document::{Document, ElementData};
use readalong_geometry::{
    bounding_box_of, contains_point, contains_point_inclusive, first_line_height,
};

fn main() {
    let mut doc = Document::new();
    let body = doc.insert(None, ElementData::new("body").with_font_size(16.0));
    let title = doc.insert(
        Some(body),
        ElementData::new("p").with_rect(Rect::new(40.0, 0.0, 440.0, 40.0)),
    );
    let _ = doc.insert(
        Some(title),
        ElementData::new("strong")
            .with_text("Chapter One")
            .with_font_size(32.0),
    );
    let para = doc.insert(
        Some(body),
        ElementData::new("p")
            .with_text("It was a bright cold day in April, and the clocks were striking thirteen.")
            .with_rect(Rect::new(40.0, 60.0, 440.0, 100.0)),
    );

    doc.scroll_to(Vec2::new(0.0, 30.0));

    for (name, el) in [("title", title), ("para", para)] {
        let b = bounding_box_of(&doc, &el);
        println!(
            "{name}: doc=({}, {}) viewport=({}, {}) size={}x{} first-line={}px",
            b.x,
            b.y,
            b.left,
            b.top,
            b.width,
            b.height,
            first_line_height(&doc, &el)
        );
    }

    // The paragraph's left edge after scrolling sits at viewport (40, 30..70).
    let edge = Point::new(40.0, 50.0);
    println!(
        "edge {:?}: strict={} inclusive={}",
        edge,
        contains_point(&doc, edge, &para),
        contains_point_inclusive(&doc, edge, &para)
    );
    assert!(!contains_point(&doc, edge, &para));
    assert!(contains_point_inclusive(&doc, edge, &para));
    assert_eq!(first_line_height(&doc, &title), 32.0);
    assert_eq!(first_line_height(&doc, &para), 16.0);
}
