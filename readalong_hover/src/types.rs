// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: hovered-target descriptors, control props, and handles.
//!
//! ## Overview
//!
//! These types describe what flows between the [`engine`](crate::engine), the
//! [`control`](crate::control) surface, and the host's collaborators.

use kurbo::Point;

/// The candidate currently under the pointer, with the geometry needed to anchor a control.
///
/// Produced by [`HoverEngine::evaluate`](crate::engine::HoverEngine::evaluate). A new descriptor
/// replaces the previous one on every evaluation that finds a target; fields are never patched in
/// place.
#[derive(Clone, Debug, PartialEq)]
pub struct HoveredTarget<E> {
    /// The hovered candidate.
    pub element: E,
    /// Viewport-space top edge of the candidate.
    pub top: f64,
    /// Viewport-space left edge of the candidate.
    pub left: f64,
    /// Estimated height of the candidate's first rendered line, in pixels.
    pub height_of_first_line: f64,
}

impl<E> HoveredTarget<E> {
    /// Viewport-space top-left corner of the candidate.
    pub fn anchor(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Everything the rendering collaborator needs to draw the control.
///
/// Pointer enter/leave and activation are wired back through
/// [`ControlSurface`](crate::control::ControlSurface) (or
/// [`HoverPlayer`](crate::player::HoverPlayer)) methods.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ControlProps {
    /// Whether the control should be drawn.
    pub visible: bool,
    /// Viewport-space top edge of the control.
    pub top: f64,
    /// Viewport-space left edge of the control.
    pub left: f64,
    /// First-line height of the anchored block, for sizing the control.
    pub line_height: f64,
}

/// Result of activating the control.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Activation {
    /// No target has ever been hovered; nothing was played.
    Idle,
    /// The sticky target was handed to the playback collaborator.
    Dispatched,
    /// The playback collaborator reported an error (already logged).
    Failed,
}

/// Handle for a pointer listener registered with a
/// [`PointerSource`](crate::tracking::PointerSource).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(pub u64);

/// Handle for an observer registered with
/// [`HoverEngine::on_target_changed`](crate::engine::HoverEngine::on_target_changed).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObserverId(pub(crate) u64);
