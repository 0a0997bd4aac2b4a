// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking engine.
//!
//! ## Overview
//!
//! Maps a viewport-space pointer position to the first candidate that contains it and keeps the
//! result as the current [`HoveredTarget`] (or `None`).
//!
//! ## Target selection
//!
//! - Candidates are scanned in the order supplied; the first containing candidate wins, so earlier
//!   candidates take precedence where boxes overlap.
//! - Containment includes the edges ([`contains_point_inclusive`]). This intentionally differs from
//!   the strict [`readalong_geometry::contains_point`].
//! - Detached candidates read as zero-sized boxes and never match.
//! - Geometry is read fresh for every evaluation, and a new descriptor is produced even when the
//!   same candidate is hit again, because layout can shift without a resize.
//!
//! ## Notifications
//!
//! Observers registered with [`HoverEngine::on_target_changed`] receive the new descriptor after
//! every evaluation that finds a target, and `None` after an evaluation that clears a live target.
//! Evaluations that stay empty do not notify. Observers run while the engine is mutably borrowed and
//! must not call back into it.
//!
//! ## See Also
//!
//! [`tracking`](crate::tracking) for binding the engine to a pointer-move source, and
//! [`hover`](crate::hover) for the edge-triggered transitions recorded on each evaluation.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Point;
use readalong_geometry::{LayoutHost, bounding_box_of, contains_point_inclusive, first_line_height};

use crate::hover::{HoverEvent, HoverState};
use crate::types::{HoveredTarget, ObserverId};

type Observer<E> = Box<dyn FnMut(Option<&HoveredTarget<E>>)>;

/// Stateful hover tracker over caller-supplied candidate lists.
///
/// ## Usage
///
/// - Call [`HoverEngine::evaluate`] on every pointer move with the current candidate list, or let a
///   [`Tracking`](crate::tracking::Tracking) session do it.
/// - Read [`HoverEngine::current`] or subscribe with [`HoverEngine::on_target_changed`].
/// - Read [`HoverEngine::transitions`] for enter/leave edges produced by the last evaluation.
pub struct HoverEngine<E> {
    current: Option<HoveredTarget<E>>,
    hover: HoverState<E>,
    transitions: Vec<HoverEvent<E>>,
    observers: Vec<(ObserverId, Observer<E>)>,
    next_observer: u64,
}

impl<E> core::fmt::Debug for HoverEngine<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HoverEngine")
            .field("has_target", &self.current.is_some())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<E: Clone + PartialEq> Default for HoverEngine<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + PartialEq> HoverEngine<E> {
    /// Create an engine with no target and no observers.
    pub fn new() -> Self {
        Self {
            current: None,
            hover: HoverState::new(),
            transitions: Vec::new(),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// The current hovered target, if any.
    pub fn current(&self) -> Option<&HoveredTarget<E>> {
        self.current.as_ref()
    }

    /// Enter/leave transitions produced by the most recent update.
    pub fn transitions(&self) -> &[HoverEvent<E>] {
        &self.transitions
    }

    /// Register an observer called whenever the descriptor is replaced or cleared.
    pub fn on_target_changed(
        &mut self,
        observer: impl FnMut(Option<&HoveredTarget<E>>) + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(o, _)| *o != id);
        self.observers.len() != before
    }

    /// Resolve `point` against `candidates` and publish the result.
    ///
    /// `point` is in viewport space. The candidate slice is only read.
    pub fn evaluate<H>(
        &mut self,
        host: &H,
        candidates: &[E],
        point: Point,
    ) -> Option<&HoveredTarget<E>>
    where
        H: LayoutHost<Element = E> + ?Sized,
    {
        let next = find_target(host, candidates, point).map(|el| describe(host, el));
        log::trace!(
            "pointer at ({}, {}) over {} candidates: {}",
            point.x,
            point.y,
            candidates.len(),
            if next.is_some() { "hit" } else { "miss" }
        );
        self.publish(next);
        self.current.as_ref()
    }

    /// Drop the current target, notifying observers if one was live.
    pub fn clear(&mut self) {
        self.publish(None);
    }

    /// Clear the current target unless its element is one of `candidates`.
    ///
    /// Used when the candidate list is replaced so the descriptor never outlives its list.
    pub fn retain_if_candidate(&mut self, candidates: &[E]) {
        let stale = self
            .current
            .as_ref()
            .is_some_and(|t| !candidates.contains(&t.element));
        if stale {
            log::debug!("hover target is not in the new candidate list; clearing");
            self.publish(None);
        }
    }

    fn publish(&mut self, next: Option<HoveredTarget<E>>) {
        let was_live = self.current.is_some();
        self.transitions = self.hover.update(next.as_ref().map(|t| t.element.clone()));
        if !self.transitions.is_empty() {
            log::debug!("hover transitions: {} event(s)", self.transitions.len());
        }
        self.current = next;
        if self.current.is_none() && !was_live {
            return;
        }
        let current = self.current.as_ref();
        for (_, observer) in &mut self.observers {
            observer(current);
        }
    }
}

/// First candidate, in supplied order, whose viewport rectangle contains `point` (edges included).
pub fn find_target<'a, H>(
    host: &H,
    candidates: &'a [H::Element],
    point: Point,
) -> Option<&'a H::Element>
where
    H: LayoutHost + ?Sized,
{
    candidates
        .iter()
        .find(|el| contains_point_inclusive(host, point, el))
}

/// Build a fresh descriptor for `element` from its current geometry.
pub fn describe<H>(host: &H, element: &H::Element) -> HoveredTarget<H::Element>
where
    H: LayoutHost + ?Sized,
{
    let bounds = bounding_box_of(host, element);
    HoveredTarget {
        element: element.clone(),
        top: bounds.top,
        left: bounds.left,
        height_of_first_line: first_line_height(host, element),
    }
}
