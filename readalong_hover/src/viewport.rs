// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal top-level viewport that owns pointer-move listeners.
//!
//! Hosts embedding Readalong in a real windowing stack implement [`PointerSource`] on their own
//! window type. [`Viewport`] is the in-process version used by tests, demos and native hosts that
//! forward their own pointer events.

use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use kurbo::Point;

use crate::tracking::{PointerListener, PointerSource};
use crate::types::ListenerId;

/// Pointer-move listener registry with synchronous dispatch.
#[derive(Default)]
pub struct Viewport {
    listeners: RefCell<Vec<(ListenerId, Option<PointerListener>)>>,
    next_id: Cell<u64>,
}

impl core::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Viewport")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

impl Viewport {
    /// Create a viewport with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver a pointer move at viewport-space `point` to every registered listener.
    ///
    /// Listeners run in registration order. A listener registered during dispatch first sees the
    /// next event; a listener removed during dispatch is not called again.
    pub fn dispatch_pointer_move(&self, point: Point) {
        let ids: Vec<ListenerId> = self.listeners.borrow().iter().map(|(id, _)| *id).collect();
        for id in ids {
            // Take the listener out so it can add or remove listeners while running.
            let taken = self
                .listeners
                .borrow_mut()
                .iter_mut()
                .find(|(i, _)| *i == id)
                .and_then(|(_, l)| l.take());
            let Some(listener) = taken else {
                continue;
            };
            let mut running = Running {
                viewport: self,
                id,
                listener: Some(listener),
            };
            if let Some(listener) = running.listener.as_mut() {
                listener(point);
            }
        }
    }
}

/// A listener taken out of its slot for one call. Dropping it puts the listener back, also when
/// the call unwinds, unless the slot was removed meanwhile.
struct Running<'a> {
    viewport: &'a Viewport,
    id: ListenerId,
    listener: Option<PointerListener>,
}

impl Drop for Running<'_> {
    fn drop(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        if let Some(slot) = self
            .viewport
            .listeners
            .borrow_mut()
            .iter_mut()
            .find(|(i, _)| *i == self.id)
        {
            slot.1 = Some(listener);
        }
    }
}

impl PointerSource for Viewport {
    fn add_pointer_listener(&self, listener: PointerListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Some(listener)));
        id
    }

    fn remove_pointer_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(i, _)| *i != id);
        listeners.len() != before
    }
}
