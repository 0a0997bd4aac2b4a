// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped pointer tracking: binds a [`HoverEngine`] to a pointer-move source for one candidate list.
//!
//! ## Lifecycle
//!
//! - [`Tracking::start`] registers exactly one listener on the [`PointerSource`]. Every pointer move
//!   evaluates the engine against the candidate list captured by that listener.
//! - [`Tracking::set_candidates`] with a different list (by `Rc` identity) removes the old listener
//!   and registers a new one, so no listener keeps evaluating a stale list. Passing the same `Rc`
//!   is a no-op.
//! - [`Tracking::stop`] or dropping the session removes the listener. `Drop` also runs during
//!   unwinding, so a listener is never leaked.
//!
//! Sources are expected to be the top-level viewport, not a nested document node.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::Point;
use readalong_geometry::LayoutHost;

use crate::engine::HoverEngine;
use crate::types::ListenerId;

/// Callback receiving viewport-space pointer positions.
pub type PointerListener = Box<dyn FnMut(Point)>;

/// A source of pointer-move events, typically the top-level viewport.
///
/// Methods take `&self`: sources are shared handles with their own interior mutability.
pub trait PointerSource {
    /// Register a listener and return its handle.
    fn add_pointer_listener(&self, listener: PointerListener) -> ListenerId;
    /// Remove a listener. Returns false if it was not registered.
    fn remove_pointer_listener(&self, id: ListenerId) -> bool;
}

impl<T: PointerSource + ?Sized> PointerSource for &T {
    fn add_pointer_listener(&self, listener: PointerListener) -> ListenerId {
        (**self).add_pointer_listener(listener)
    }

    fn remove_pointer_listener(&self, id: ListenerId) -> bool {
        (**self).remove_pointer_listener(id)
    }
}

impl<T: PointerSource + ?Sized> PointerSource for Rc<T> {
    fn add_pointer_listener(&self, listener: PointerListener) -> ListenerId {
        (**self).add_pointer_listener(listener)
    }

    fn remove_pointer_listener(&self, id: ListenerId) -> bool {
        (**self).remove_pointer_listener(id)
    }
}

/// An active tracking session: "the engine is tracking candidate list X on source S".
pub struct Tracking<S: PointerSource, H: LayoutHost> {
    source: S,
    host: Rc<H>,
    engine: Rc<RefCell<HoverEngine<H::Element>>>,
    candidates: Rc<[H::Element]>,
    listener: Option<ListenerId>,
}

impl<S: PointerSource, H: LayoutHost> core::fmt::Debug for Tracking<S, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracking")
            .field("listener", &self.listener)
            .field("candidates", &self.candidates.len())
            .finish_non_exhaustive()
    }
}

impl<S, H> Tracking<S, H>
where
    S: PointerSource,
    H: LayoutHost + 'static,
    H::Element: 'static,
{
    /// Start tracking `candidates` on `source`, registering one pointer listener.
    pub fn start(
        source: S,
        host: Rc<H>,
        engine: Rc<RefCell<HoverEngine<H::Element>>>,
        candidates: Rc<[H::Element]>,
    ) -> Self {
        let mut tracking = Self {
            source,
            host,
            engine,
            candidates,
            listener: None,
        };
        tracking.listen();
        tracking
    }

    /// Replace the candidate list.
    ///
    /// Returns true if the listener was re-registered (the list is a different `Rc`). A current
    /// target whose element is missing from the new list is cleared.
    pub fn set_candidates(&mut self, candidates: Rc<[H::Element]>) -> bool {
        if Rc::ptr_eq(&self.candidates, &candidates) {
            return false;
        }
        self.detach();
        self.candidates = candidates;
        self.engine
            .borrow_mut()
            .retain_if_candidate(&self.candidates);
        self.listen();
        true
    }

    fn listen(&mut self) {
        let host = Rc::clone(&self.host);
        let engine = Rc::clone(&self.engine);
        let candidates = Rc::clone(&self.candidates);
        let id = self.source.add_pointer_listener(Box::new(move |point| {
            let _ = engine.borrow_mut().evaluate(&*host, &candidates, point);
        }));
        log::debug!(
            "tracking {} candidates with listener {}",
            self.candidates.len(),
            id.0
        );
        self.listener = Some(id);
    }
}

impl<S: PointerSource, H: LayoutHost> Tracking<S, H> {
    /// Stop tracking and remove the listener.
    pub fn stop(mut self) {
        self.detach();
    }

    /// True while a listener is registered.
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// The candidate list currently being tracked.
    pub fn candidates(&self) -> &Rc<[H::Element]> {
        &self.candidates
    }

    /// The engine driven by this session.
    pub fn engine(&self) -> &Rc<RefCell<HoverEngine<H::Element>>> {
        &self.engine
    }

    fn detach(&mut self) {
        if let Some(id) = self.listener.take() {
            let removed = self.source.remove_pointer_listener(id);
            log::debug!("removed listener {} (registered: {removed})", id.0);
        }
    }
}

impl<S: PointerSource, H: LayoutHost> Drop for Tracking<S, H> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;
    use alloc::vec::Vec;
    use kurbo::Rect;
    use readalong_document::{Document, ElementData, ElementId};

    struct Fixture {
        viewport: Rc<Viewport>,
        doc: Rc<RefCell<Document>>,
        engine: Rc<RefCell<HoverEngine<ElementId>>>,
        a: ElementId,
        b: ElementId,
    }

    fn fixture() -> Fixture {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut doc = Document::new();
        let a = doc.insert(
            None,
            ElementData::new("p").with_rect(Rect::new(0.0, 0.0, 100.0, 20.0)),
        );
        let b = doc.insert(
            None,
            ElementData::new("p").with_rect(Rect::new(0.0, 30.0, 100.0, 50.0)),
        );
        Fixture {
            viewport: Rc::new(Viewport::new()),
            doc: Rc::new(RefCell::new(doc)),
            engine: Rc::new(RefCell::new(HoverEngine::new())),
            a,
            b,
        }
    }

    fn hovered(f: &Fixture) -> Option<ElementId> {
        f.engine.borrow().current().map(|t| t.element)
    }

    #[test]
    fn start_registers_one_listener_and_tracks() {
        let f = fixture();
        let tracking = Tracking::start(
            Rc::clone(&f.viewport),
            Rc::clone(&f.doc),
            Rc::clone(&f.engine),
            Rc::from(Vec::from([f.a, f.b])),
        );
        assert!(tracking.is_active());
        assert_eq!(f.viewport.listener_count(), 1);

        f.viewport.dispatch_pointer_move(Point::new(50.0, 10.0));
        assert_eq!(hovered(&f), Some(f.a));
        f.viewport.dispatch_pointer_move(Point::new(50.0, 200.0));
        assert_eq!(hovered(&f), None);
    }

    #[test]
    fn stop_and_drop_remove_listener() {
        let f = fixture();
        let cands: Rc<[ElementId]> = Rc::from(Vec::from([f.a]));
        let tracking = Tracking::start(
            Rc::clone(&f.viewport),
            Rc::clone(&f.doc),
            Rc::clone(&f.engine),
            Rc::clone(&cands),
        );
        tracking.stop();
        assert_eq!(f.viewport.listener_count(), 0);

        f.viewport.dispatch_pointer_move(Point::new(50.0, 10.0));
        assert_eq!(hovered(&f), None, "no evaluation after stop");

        {
            let _scoped = Tracking::start(
                Rc::clone(&f.viewport),
                Rc::clone(&f.doc),
                Rc::clone(&f.engine),
                cands,
            );
            assert_eq!(f.viewport.listener_count(), 1);
        }
        assert_eq!(f.viewport.listener_count(), 0);
    }

    #[test]
    fn new_list_identity_reregisters() {
        let f = fixture();
        let first: Rc<[ElementId]> = Rc::from(Vec::from([f.a]));
        let mut tracking = Tracking::start(
            Rc::clone(&f.viewport),
            Rc::clone(&f.doc),
            Rc::clone(&f.engine),
            Rc::clone(&first),
        );

        assert!(!tracking.set_candidates(Rc::clone(&first)), "same list is a no-op");

        // Equal contents but a new reference still re-subscribes.
        assert!(tracking.set_candidates(Rc::from(Vec::from([f.a]))));
        assert_eq!(f.viewport.listener_count(), 1);

        // New content is tracked by the new listener.
        assert!(tracking.set_candidates(Rc::from(Vec::from([f.a, f.b]))));
        assert_eq!(f.viewport.listener_count(), 1);
        f.viewport.dispatch_pointer_move(Point::new(50.0, 40.0));
        assert_eq!(hovered(&f), Some(f.b));
        assert_eq!(tracking.candidates().len(), 2);
    }

    #[test]
    fn replacing_list_clears_target_outside_it() {
        let f = fixture();
        let mut tracking = Tracking::start(
            Rc::clone(&f.viewport),
            Rc::clone(&f.doc),
            Rc::clone(&f.engine),
            Rc::from(Vec::from([f.a, f.b])),
        );
        f.viewport.dispatch_pointer_move(Point::new(50.0, 10.0));
        assert_eq!(hovered(&f), Some(f.a));

        let _ = tracking.set_candidates(Rc::from(Vec::from([f.b])));
        assert_eq!(hovered(&f), None);
    }

    #[test]
    fn host_mutations_are_seen_on_next_event() {
        let f = fixture();
        let _tracking = Tracking::start(
            Rc::clone(&f.viewport),
            Rc::clone(&f.doc),
            Rc::clone(&f.engine),
            Rc::from(Vec::from([f.a, f.b])),
        );
        f.viewport.dispatch_pointer_move(Point::new(50.0, 10.0));
        assert_eq!(hovered(&f), Some(f.a));

        f.doc.borrow_mut().remove(f.a);
        f.viewport.dispatch_pointer_move(Point::new(50.0, 10.0));
        assert_eq!(hovered(&f), None, "detached candidate stops matching");
    }

    #[test]
    fn listener_removed_when_unwinding() {
        extern crate std;
        let f = fixture();
        let viewport = Rc::clone(&f.viewport);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _tracking = Tracking::start(
                Rc::clone(&f.viewport),
                Rc::clone(&f.doc),
                Rc::clone(&f.engine),
                Rc::from(Vec::from([f.a])),
            );
            panic!("teardown during tracking");
        }));
        assert!(result.is_err());
        assert_eq!(viewport.listener_count(), 0);
    }
}
