// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The assembled hover player: tracking, control surface, and playback in one component.
//!
//! [`HoverPlayer::start`] creates a [`HoverEngine`], subscribes a [`ControlSurface`] to it, and
//! starts a [`Tracking`] session on the pointer source. The rendering collaborator reads
//! [`HoverPlayer::props`] (or is driven through [`HoverPlayer::render`]) and wires its pointer and
//! click handlers back to [`HoverPlayer::pointer_enter_control`],
//! [`HoverPlayer::pointer_leave_control`] and [`HoverPlayer::activate`].

use alloc::rc::Rc;
use core::cell::RefCell;

use readalong_geometry::LayoutHost;

use crate::control::{ControlConfig, ControlSurface, Playback, Renderer, speak};
use crate::engine::HoverEngine;
use crate::tracking::{PointerSource, Tracking};
use crate::types::{Activation, ControlProps, HoveredTarget, ObserverId};

/// A running hover player.
pub struct HoverPlayer<S, H, P>
where
    S: PointerSource,
    H: LayoutHost,
{
    tracking: Tracking<S, H>,
    surface: Rc<RefCell<ControlSurface<H::Element>>>,
    observer: ObserverId,
    playback: P,
}

impl<S, H, P> core::fmt::Debug for HoverPlayer<S, H, P>
where
    S: PointerSource,
    H: LayoutHost,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HoverPlayer")
            .field("tracking", &self.tracking)
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}

impl<S, H, P> HoverPlayer<S, H, P>
where
    S: PointerSource,
    H: LayoutHost + 'static,
    H::Element: 'static,
    P: Playback<H::Element>,
{
    /// Start tracking `candidates` on `source` and wire the control surface to the engine.
    pub fn start(
        source: S,
        host: Rc<H>,
        candidates: Rc<[H::Element]>,
        playback: P,
        config: ControlConfig,
    ) -> Self {
        let engine: Rc<RefCell<HoverEngine<H::Element>>> =
            Rc::new(RefCell::new(HoverEngine::new()));
        let surface: Rc<RefCell<ControlSurface<H::Element>>> =
            Rc::new(RefCell::new(ControlSurface::new(config)));
        let observer = {
            let surface = Rc::clone(&surface);
            engine
                .borrow_mut()
                .on_target_changed(move |target| surface.borrow_mut().observe_target(target))
        };
        let tracking = Tracking::start(source, host, engine, candidates);
        Self {
            tracking,
            surface,
            observer,
            playback,
        }
    }

    /// Replace the candidate list. See [`Tracking::set_candidates`].
    pub fn set_candidates(&mut self, candidates: Rc<[H::Element]>) -> bool {
        self.tracking.set_candidates(candidates)
    }

    /// Props for the rendering collaborator.
    pub fn props(&self) -> ControlProps {
        self.surface.borrow().props()
    }

    /// Push the current props to `renderer`.
    ///
    /// The surface is not borrowed while `renderer` runs, so it may feed pointer events back.
    pub fn render(&self, renderer: &mut impl Renderer) {
        let props = self.props();
        renderer.render(&props);
    }

    /// The pointer entered the control.
    pub fn pointer_enter_control(&self) {
        self.surface.borrow_mut().pointer_enter();
    }

    /// The pointer left the control.
    pub fn pointer_leave_control(&self) {
        self.surface.borrow_mut().pointer_leave();
    }

    /// The control was clicked: speak the sticky target, if any.
    ///
    /// The surface is not borrowed while playback runs, so it may feed pointer events back.
    pub fn activate(&mut self) -> Activation {
        let element = self
            .surface
            .borrow()
            .sticky_target()
            .map(|t| t.element.clone());
        speak(element.as_ref(), &mut self.playback)
    }

    /// Target the engine reports right now.
    pub fn current_target(&self) -> Option<HoveredTarget<H::Element>> {
        self.tracking.engine().borrow().current().cloned()
    }

    /// Last non-null target, which the control stays anchored to.
    pub fn sticky_target(&self) -> Option<HoveredTarget<H::Element>> {
        self.surface.borrow().sticky_target().cloned()
    }

    /// The playback collaborator.
    pub fn playback(&self) -> &P {
        &self.playback
    }

    /// Stop tracking and detach the control surface from the engine.
    pub fn stop(self) {
        let _ = self
            .tracking
            .engine()
            .borrow_mut()
            .remove_observer(self.observer);
        self.tracking.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;
    use alloc::vec::Vec;
    use kurbo::{Point, Rect};
    use readalong_document::{Document, ElementData, ElementId};

    type Spoken = Vec<ElementId>;

    struct Page {
        viewport: Rc<Viewport>,
        doc: Rc<RefCell<Document>>,
        a: ElementId,
        b: ElementId,
    }

    /// `A(0,0,100,20)` and `B(0,30,100,20)` with a 16px body font.
    fn page() -> Page {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut doc = Document::new();
        let body = doc.insert(None, ElementData::new("body").with_font_size(16.0));
        let a = doc.insert(
            Some(body),
            ElementData::new("p")
                .with_text("First paragraph.")
                .with_rect(Rect::new(0.0, 0.0, 100.0, 20.0)),
        );
        let b = doc.insert(
            Some(body),
            ElementData::new("blockquote")
                .with_text("A quotation.")
                .with_rect(Rect::new(0.0, 30.0, 100.0, 50.0)),
        );
        Page {
            viewport: Rc::new(Viewport::new()),
            doc: Rc::new(RefCell::new(doc)),
            a,
            b,
        }
    }

    fn start(
        page: &Page,
        candidates: Vec<ElementId>,
    ) -> HoverPlayer<Rc<Viewport>, RefCell<Document>, impl FnMut(&ElementId)> {
        let spoken: Rc<RefCell<Spoken>> = Rc::default();
        start_with_log(page, candidates, spoken)
    }

    fn start_with_log(
        page: &Page,
        candidates: Vec<ElementId>,
        spoken: Rc<RefCell<Spoken>>,
    ) -> HoverPlayer<Rc<Viewport>, RefCell<Document>, impl FnMut(&ElementId)> {
        HoverPlayer::start(
            Rc::clone(&page.viewport),
            Rc::clone(&page.doc),
            Rc::from(candidates),
            move |el: &ElementId| spoken.borrow_mut().push(*el),
            ControlConfig::default(),
        )
    }

    #[test]
    fn scenario_hover_then_leave() {
        let p = page();
        let player = start(&p, p.doc.borrow().select(&["p", "blockquote"]));

        p.viewport.dispatch_pointer_move(Point::new(50.0, 10.0));
        let t = player.current_target().map(|t| (t.element, t.top, t.left));
        assert_eq!(t, Some((p.a, 0.0, 0.0)));
        assert!(player.props().visible);

        // Off every candidate and not over the control: hidden.
        p.viewport.dispatch_pointer_move(Point::new(50.0, 200.0));
        assert!(player.current_target().is_none());
        assert!(!player.props().visible);
        assert_eq!(player.sticky_target().map(|t| t.element), Some(p.a));
    }

    #[test]
    fn scenario_leave_onto_control_stays_visible() {
        let p = page();
        let player = start(&p, Vec::from([p.a, p.b]));

        p.viewport.dispatch_pointer_move(Point::new(50.0, 10.0));
        let before = player.props();

        // The pointer reaches the control at (50,200): the renderer reports enter first.
        player.pointer_enter_control();
        p.viewport.dispatch_pointer_move(Point::new(50.0, 200.0));
        assert!(player.current_target().is_none());
        assert!(player.props().visible);
        assert_eq!(player.props(), before, "anchor does not move while over the control");
        assert_eq!(player.sticky_target().map(|t| t.element), Some(p.a));

        player.pointer_leave_control();
        assert!(!player.props().visible);
    }

    #[test]
    fn anchor_sits_left_of_block() {
        let p = page();
        let player = start(&p, Vec::from([p.a, p.b]));
        p.viewport.dispatch_pointer_move(Point::new(50.0, 40.0));
        let props = player.props();
        assert_eq!((props.left, props.top), (-35.0, 30.0));
        assert_eq!(props.line_height, 16.0);
    }

    #[test]
    fn empty_candidates_never_show() {
        let p = page();
        let mut player = start(&p, Vec::new());
        for pt in [Point::new(50.0, 10.0), Point::new(50.0, 40.0), Point::ZERO] {
            p.viewport.dispatch_pointer_move(pt);
            assert!(player.current_target().is_none());
            assert!(!player.props().visible);
        }
        assert_eq!(player.activate(), Activation::Idle);
    }

    #[test]
    fn activation_before_any_hover_does_not_speak() {
        let p = page();
        let spoken: Rc<RefCell<Spoken>> = Rc::default();
        let mut player = start_with_log(&p, Vec::from([p.a]), Rc::clone(&spoken));
        assert_eq!(player.activate(), Activation::Idle);
        assert!(spoken.borrow().is_empty());
    }

    #[test]
    fn activation_speaks_sticky_block_after_leaving() {
        let p = page();
        let spoken: Rc<RefCell<Spoken>> = Rc::default();
        let mut player = start_with_log(&p, Vec::from([p.a, p.b]), Rc::clone(&spoken));

        p.viewport.dispatch_pointer_move(Point::new(50.0, 40.0));
        player.pointer_enter_control();
        p.viewport.dispatch_pointer_move(Point::new(-20.0, 40.0));
        assert_eq!(player.activate(), Activation::Dispatched);
        assert_eq!(*spoken.borrow(), [p.b]);
    }

    #[test]
    fn playback_may_move_the_pointer() {
        let p = page();
        let viewport = Rc::clone(&p.viewport);
        let spoken: Rc<RefCell<Spoken>> = Rc::default();
        let log = Rc::clone(&spoken);
        let mut player = HoverPlayer::start(
            Rc::clone(&p.viewport),
            Rc::clone(&p.doc),
            Rc::from(Vec::from([p.a, p.b])),
            move |el: &ElementId| {
                log.borrow_mut().push(*el);
                viewport.dispatch_pointer_move(Point::new(50.0, 40.0));
            },
            ControlConfig::default(),
        );

        p.viewport.dispatch_pointer_move(Point::new(50.0, 10.0));
        assert_eq!(player.activate(), Activation::Dispatched);
        assert_eq!(*spoken.borrow(), [p.a]);
        assert_eq!(player.sticky_target().map(|t| t.element), Some(p.b));
    }

    struct Jittery {
        viewport: Rc<Viewport>,
        seen: Vec<ControlProps>,
    }

    impl Renderer for Jittery {
        fn render(&mut self, props: &ControlProps) {
            self.seen.push(*props);
            self.viewport.dispatch_pointer_move(Point::new(50.0, 200.0));
        }
    }

    #[test]
    fn renderer_may_move_the_pointer() {
        let p = page();
        let player = start(&p, Vec::from([p.a, p.b]));
        p.viewport.dispatch_pointer_move(Point::new(50.0, 10.0));

        let mut renderer = Jittery {
            viewport: Rc::clone(&p.viewport),
            seen: Vec::new(),
        };
        player.render(&mut renderer);
        assert_eq!(renderer.seen.len(), 1);
        assert!(renderer.seen[0].visible);
        assert!(!player.props().visible, "the move during render was applied");
    }

    #[test]
    fn stop_detaches_everything() {
        let p = page();
        let player = start(&p, Vec::from([p.a]));
        assert_eq!(p.viewport.listener_count(), 1);
        player.stop();
        assert_eq!(p.viewport.listener_count(), 0);
    }

    #[test]
    fn new_candidates_are_tracked() {
        let p = page();
        let mut player = start(&p, Vec::from([p.a]));
        p.viewport.dispatch_pointer_move(Point::new(50.0, 40.0));
        assert!(player.current_target().is_none());

        // Content added to the page becomes a candidate.
        let c = p.doc.borrow_mut().insert(
            None,
            ElementData::new("p")
                .with_text("Late arrival.")
                .with_rect(Rect::new(0.0, 60.0, 100.0, 80.0)),
        );
        assert!(player.set_candidates(Rc::from(p.doc.borrow().select(&["p", "blockquote"]))));
        p.viewport.dispatch_pointer_move(Point::new(50.0, 70.0));
        assert_eq!(player.current_target().map(|t| t.element), Some(c));
        assert_eq!(p.viewport.listener_count(), 1);
    }
}
