// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions from successive hover results.
//!
//! The [`engine`](crate::engine) re-emits a descriptor on every pointer move, which suits
//! anchoring but not edge-triggered effects. [`HoverState`] reduces the stream to transitions:
//! a `Leave` for the previous element followed by an `Enter` for the new one, and nothing while the
//! pointer stays on the same element.
//!
//! ## Minimal example
//!
//! ```
//! use readalong_hover::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update(Some(1)), vec![HoverEvent::Enter(1)]);
//! assert!(h.update(Some(1)).is_empty());
//! assert_eq!(h.update(Some(2)), vec![HoverEvent::Leave(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update(None), vec![HoverEvent::Leave(2)]);
//! ```

use alloc::vec::Vec;

/// Tracks the hovered element and reports transitions when it changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

/// A hover transition event.
///
/// Returned by [`HoverState::update`] and [`HoverState::clear`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer enters the given element.
    Enter(K),
    /// Pointer leaves the given element.
    Leave(K),
}

impl<K: Clone + PartialEq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the currently hovered element (if any).
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Clear the hover state, returning the leave event for the previous element if there was one.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.current.take().map(HoverEvent::Leave).into_iter().collect()
    }

    /// Update the hovered element and return the transitions from the previous one.
    ///
    /// The leave is emitted before the enter.
    pub fn update(&mut self, next: Option<K>) -> Vec<HoverEvent<K>> {
        if self.current == next {
            return Vec::new();
        }
        let mut out = self.clear();
        if let Some(k) = next {
            out.push(HoverEvent::Enter(k.clone()));
            self.current = Some(k);
        }
        out
    }
}
