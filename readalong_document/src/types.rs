// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document: element identifiers and per-element data.

use alloc::string::String;
use kurbo::Rect;

/// Identifier for an element in the document.
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ElementId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ElementId`.
///
/// ### Detached handles
///
/// A stale `ElementId` behaves like an element removed from the page: the document reports an
/// all-zero rectangle, empty text and no font size for it. It never aliases a newer element
/// because the generation must match.
/// Use [`Document::is_attached`](crate::Document::is_attached) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Data for one element.
#[derive(Clone, Debug)]
pub struct ElementData {
    /// Tag name, for example `"p"` or `"span"`. Compared case-insensitively.
    pub tag: String,
    /// Text owned directly by this element. Descendant text follows it in
    /// [`Document::text_content`](crate::Document::text_content).
    pub text: String,
    /// Layout box in document space (before scrolling).
    pub layout_rect: Rect,
    /// Specified font size in pixels. `None` inherits from the parent.
    pub font_size: Option<f64>,
    /// Whether the element generates a box. Unrendered elements report a zero rectangle.
    pub rendered: bool,
}

impl ElementData {
    /// A rendered element with the given tag and nothing else set.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the element's own text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the document-space layout box.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.layout_rect = rect;
        self
    }

    /// Set the specified font size.
    pub fn with_font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }
}

impl Default for ElementData {
    fn default() -> Self {
        Self {
            tag: String::new(),
            text: String::new(),
            layout_rect: Rect::ZERO,
            font_size: None,
            rendered: true,
        }
    }
}
