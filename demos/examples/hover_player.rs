// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The whole pipeline: viewport events, hover player, console renderer, and a printing speaker.
//!
//! The pointer hovers a paragraph, travels left onto the play control, clicks it, and leaves.
//! Set `RUST_LOG=debug` to see the engine and tracking logs.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p readalong_demos --example hover_player`

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use kurbo::{Point, Rect};
use readalong_document::{Document, ElementData, ElementId};
use readalong_hover::control::{ControlConfig, Playback, Renderer};
use readalong_hover::player::HoverPlayer;
use readalong_hover::types::{Activation, ControlProps};
use readalong_hover::viewport::Viewport;

/// Prints the text it is asked to read instead of synthesizing speech.
struct ConsoleSpeaker {
    doc: Rc<RefCell<Document>>,
}

#[derive(Debug)]
struct NothingToSay;

impl fmt::Display for NothingToSay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("element has no text")
    }
}

impl Playback<ElementId> for ConsoleSpeaker {
    type Error = NothingToSay;

    fn speak(&mut self, element: &ElementId) -> Result<(), NothingToSay> {
        let text = self.doc.borrow().text_content(*element);
        if text.is_empty() {
            return Err(NothingToSay);
        }
        println!("  speaking: {text:?}");
        Ok(())
    }
}

struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&mut self, props: &ControlProps) {
        if props.visible {
            println!(
                "  [play] at ({}, {}), {}px line",
                props.left, props.top, props.line_height
            );
        } else {
            println!("  (hidden)");
        }
    }
}

fn main() {
    env_logger::init();

    let mut doc = Document::new();
    let body = doc.insert(None, ElementData::new("body").with_font_size(16.0));
    let _ = doc.insert(
        Some(body),
        ElementData::new("p")
            .with_text("Whenever I find myself growing grim about the mouth, I go to sea.")
            .with_rect(Rect::new(60.0, 20.0, 560.0, 60.0)),
    );
    let quote = doc.insert(
        Some(body),
        ElementData::new("blockquote").with_rect(Rect::new(60.0, 80.0, 560.0, 110.0)),
    );
    let _ = doc.insert(
        Some(quote),
        ElementData::new("em")
            .with_text("Call me Ishmael.")
            .with_font_size(22.0),
    );
    let candidates = doc.select(&["p", "blockquote"]);
    let doc = Rc::new(RefCell::new(doc));

    let viewport = Rc::new(Viewport::new());
    let speaker = ConsoleSpeaker {
        doc: Rc::clone(&doc),
    };
    let mut player = HoverPlayer::start(
        Rc::clone(&viewport),
        doc,
        Rc::from(candidates),
        speaker,
        ControlConfig::default(),
    );
    let mut renderer = ConsoleRenderer;

    println!("== hover the quotation ==");
    viewport.dispatch_pointer_move(Point::new(200.0, 95.0));
    player.render(&mut renderer);

    println!("== travel to the control ==");
    player.pointer_enter_control();
    viewport.dispatch_pointer_move(Point::new(35.0, 90.0));
    player.render(&mut renderer);

    println!("== click ==");
    let outcome = player.activate();
    log::info!("activation outcome: {outcome:?}");
    assert_eq!(outcome, Activation::Dispatched);

    println!("== leave ==");
    player.pointer_leave_control();
    viewport.dispatch_pointer_move(Point::new(5.0, 300.0));
    player.render(&mut renderer);
    assert!(!player.props().visible);

    player.stop();
    assert_eq!(viewport.listener_count(), 0);
}
