// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floating play control: visibility, anchoring, and activation.
//!
//! ## State
//!
//! - A sticky target: the last non-null descriptor seen from the engine. It is kept when the
//!   engine later reports `None`, so the anchor stays valid while the pointer crosses the gap
//!   between a block and the control.
//! - [`SurfaceFlags`]: whether the engine currently reports a target, and whether the pointer is
//!   over the control itself.
//!
//! ## Visibility
//!
//! The control is visible when a sticky target exists and either flag is set. It hides only once
//! the pointer has left both the candidates and the control.
//!
//! ## Anchoring
//!
//! `left = target.left - clearance` and `top = target.top`, in viewport space. The anchor is only
//! recomputed when the sticky target changes.

use kurbo::Point;

use crate::types::{Activation, ControlProps, HoveredTarget};

/// Horizontal gap reserved for the control to the left of the block, in pixels.
pub const DEFAULT_CLEARANCE: f64 = 35.0;

bitflags::bitflags! {
    /// Hover conditions that keep the control visible.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SurfaceFlags: u8 {
        /// The engine currently reports a hovered candidate.
        const TARGET_LIVE          = 0b0000_0001;
        /// The pointer is over the control's own hit area.
        const POINTER_OVER_CONTROL = 0b0000_0010;
    }
}

/// Errors from building a [`ControlConfig`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The clearance was NaN or infinite.
    #[error("control clearance must be finite, got {0}")]
    NonFiniteClearance(f64),
}

/// Control surface configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlConfig {
    clearance: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            clearance: DEFAULT_CLEARANCE,
        }
    }
}

impl ControlConfig {
    /// Set the horizontal clearance between the control and the block's left edge.
    pub fn with_clearance(self, clearance: f64) -> Result<Self, ConfigError> {
        if !clearance.is_finite() {
            return Err(ConfigError::NonFiniteClearance(clearance));
        }
        Ok(Self { clearance })
    }

    /// Horizontal clearance in pixels.
    pub fn clearance(&self) -> f64 {
        self.clearance
    }
}

/// The speech collaborator. Called fire-and-forget with the element to read aloud.
pub trait Playback<E> {
    /// Error reported by the collaborator; it is logged, never propagated.
    type Error: core::fmt::Display;

    /// Start speaking `element`.
    fn speak(&mut self, element: &E) -> Result<(), Self::Error>;
}

impl<E, F: FnMut(&E)> Playback<E> for F {
    type Error = core::convert::Infallible;

    fn speak(&mut self, element: &E) -> Result<(), Self::Error> {
        self(element);
        Ok(())
    }
}

/// The drawing collaborator.
pub trait Renderer {
    /// Draw (or hide) the control.
    fn render(&mut self, props: &ControlProps);
}

/// Visibility and anchoring state for the floating control.
#[derive(Clone, Debug)]
pub struct ControlSurface<E> {
    config: ControlConfig,
    sticky: Option<HoveredTarget<E>>,
    anchor: Option<Point>,
    flags: SurfaceFlags,
}

impl<E: Clone + PartialEq> ControlSurface<E> {
    /// Create a hidden surface with no target.
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            sticky: None,
            anchor: None,
            flags: SurfaceFlags::empty(),
        }
    }

    /// Feed the latest engine result.
    pub fn observe_target(&mut self, target: Option<&HoveredTarget<E>>) {
        let Some(target) = target else {
            self.flags.remove(SurfaceFlags::TARGET_LIVE);
            return;
        };
        self.flags.insert(SurfaceFlags::TARGET_LIVE);
        if self.sticky.as_ref() != Some(target) {
            let anchor = Point::new(target.left - self.config.clearance, target.top);
            log::debug!("control anchored at ({}, {})", anchor.x, anchor.y);
            self.anchor = Some(anchor);
            self.sticky = Some(target.clone());
        }
    }

    /// The pointer entered the control's hit area.
    pub fn pointer_enter(&mut self) {
        self.flags.insert(SurfaceFlags::POINTER_OVER_CONTROL);
    }

    /// The pointer left the control's hit area.
    pub fn pointer_leave(&mut self) {
        self.flags.remove(SurfaceFlags::POINTER_OVER_CONTROL);
    }

    /// Current hover conditions.
    pub fn flags(&self) -> SurfaceFlags {
        self.flags
    }

    /// The last non-null target seen from the engine.
    pub fn sticky_target(&self) -> Option<&HoveredTarget<E>> {
        self.sticky.as_ref()
    }

    /// Viewport-space top-left of the control, once a target has been seen.
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Whether the control should be shown.
    pub fn is_visible(&self) -> bool {
        self.sticky.is_some() && !self.flags.is_empty()
    }

    /// Props for the rendering collaborator.
    pub fn props(&self) -> ControlProps {
        match (&self.sticky, self.anchor) {
            (Some(target), Some(anchor)) => ControlProps {
                visible: self.is_visible(),
                top: anchor.y,
                left: anchor.x,
                line_height: target.height_of_first_line,
            },
            _ => ControlProps::default(),
        }
    }

    /// Push the current props to `renderer`.
    pub fn render(&self, renderer: &mut impl Renderer) {
        renderer.render(&self.props());
    }

    /// Hand the sticky target to `playback`. Does nothing if no target was ever seen.
    pub fn activate<P: Playback<E>>(&self, playback: &mut P) -> Activation {
        speak(self.sticky.as_ref().map(|t| &t.element), playback)
    }
}

/// Hand `element` to `playback`, logging a failure instead of returning it.
pub(crate) fn speak<E, P: Playback<E>>(element: Option<&E>, playback: &mut P) -> Activation {
    let Some(element) = element else {
        log::debug!("activation ignored: nothing hovered yet");
        return Activation::Idle;
    };
    match playback.speak(element) {
        Ok(()) => Activation::Dispatched,
        Err(err) => {
            log::warn!("playback failed: {err}");
            Activation::Failed
        }
    }
}
