// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=readalong_hover --heading-base-level=0

//! Readalong Hover: track which text block is under the pointer and anchor a play control to it.
//!
//! ## Overview
//!
//! Pointer events flow one way:
//! pointer move → [`HoverEngine`](crate::engine::HoverEngine) → hovered-target signal →
//! [`ControlSurface`](crate::control::ControlSurface) → visibility decision and playback trigger.
//!
//! - [`engine`]: resolves a viewport-space point to the first containing candidate and publishes a
//!   [`HoveredTarget`](crate::types::HoveredTarget) descriptor (element, anchor, first-line height).
//! - [`tracking`]: binds an engine to a [`PointerSource`](crate::tracking::PointerSource) for one
//!   candidate list, and re-subscribes when the list changes.
//! - [`control`]: keeps a sticky target so the control survives the trip from the text to the
//!   control, decides visibility, and calls the [`Playback`](crate::control::Playback) collaborator.
//! - [`player`]: all of the above assembled into one component.
//! - [`hover`]: enter/leave transitions for hosts that want edge-triggered events.
//! - [`viewport`]: an in-process pointer source.
//!
//! Geometry comes from [`readalong_geometry`]; the host document is anything implementing
//! [`LayoutHost`](readalong_geometry::LayoutHost).
//!
//! ## Not a renderer, not a speech engine
//!
//! Drawing the control and synthesizing speech belong to the host. This crate hands the renderer
//! [`ControlProps`](crate::types::ControlProps) and hands the playback collaborator an element.
//!
//! ## Threading
//!
//! Everything runs on one thread, driven synchronously by pointer events. Shared state uses
//! `Rc<RefCell<_>>`.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use readalong_document::{Document, ElementData, ElementId};
//! use readalong_hover::control::ControlConfig;
//! use readalong_hover::player::HoverPlayer;
//! use readalong_hover::viewport::Viewport;
//!
//! let mut doc = Document::new();
//! let p = doc.insert(
//!     None,
//!     ElementData::new("p")
//!         .with_text("Hello there.")
//!         .with_rect(Rect::new(40.0, 0.0, 240.0, 20.0))
//!         .with_font_size(16.0),
//! );
//! let candidates = doc.select(&["p", "blockquote"]);
//! let doc = Rc::new(RefCell::new(doc));
//! let viewport = Rc::new(Viewport::new());
//!
//! let spoken = Rc::new(RefCell::new(Vec::new()));
//! let log = Rc::clone(&spoken);
//! let mut player = HoverPlayer::start(
//!     Rc::clone(&viewport),
//!     doc,
//!     Rc::from(candidates),
//!     move |el: &ElementId| log.borrow_mut().push(*el),
//!     ControlConfig::default(),
//! );
//!
//! viewport.dispatch_pointer_move(Point::new(100.0, 10.0));
//! let props = player.props();
//! assert!(props.visible);
//! assert_eq!((props.left, props.top), (5.0, 0.0));
//!
//! // Travel to the control: the block is left, but the control stays.
//! player.pointer_enter_control();
//! viewport.dispatch_pointer_move(Point::new(10.0, 10.0));
//! assert!(player.props().visible);
//!
//! player.activate();
//! assert_eq!(*spoken.borrow(), [p]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod control;
pub mod engine;
pub mod hover;
pub mod player;
pub mod tracking;
pub mod types;
pub mod viewport;
