// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover engine driven by hand.
//!
//! Feeds a few pointer positions to a [`HoverEngine`] and prints the descriptor and the
//! enter/leave transitions after each one.
//!
//! Run:
//! - `cargo run -p readalong_demos --example hover_engine`

use kurbo::{Point, Rect};
use readalong_document::{Document, ElementData};
use readalong_hover::engine::HoverEngine;
use readalong_hover::hover::HoverEvent;

fn main() {
    let mut doc = Document::new();
    let a = doc.insert(
        None,
        ElementData::new("p")
            .with_text("A")
            .with_rect(Rect::new(0.0, 0.0, 100.0, 20.0))
            .with_font_size(16.0),
    );
    let b = doc.insert(
        None,
        ElementData::new("p")
            .with_text("B")
            .with_rect(Rect::new(0.0, 30.0, 100.0, 50.0))
            .with_font_size(18.0),
    );
    let candidates = doc.select(&["p", "blockquote"]);
    assert_eq!(candidates, [a, b]);

    let mut engine = HoverEngine::new();
    for pt in [
        Point::new(50.0, 10.0),
        Point::new(50.0, 10.0),
        Point::new(50.0, 40.0),
        Point::new(50.0, 200.0),
    ] {
        let target = engine.evaluate(&doc, &candidates, pt).cloned();
        println!("== pointer at {pt:?} ==\n  target: {target:?}");
        println!("  transitions: {:?}", engine.transitions());
    }

    assert!(engine.current().is_none());
    assert_eq!(engine.transitions(), &[HoverEvent::Leave(b)]);
}
