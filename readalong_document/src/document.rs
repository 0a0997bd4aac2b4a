// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, updates, queries, and the layout host impl.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Rect, Vec2};
use readalong_geometry::{LayoutHost, is_inline_tag};

use crate::types::{ElementData, ElementId};

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// An element tree with a scrollable viewport.
pub struct Document {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    roots: Vec<ElementId>,
    scroll: Vec2,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let attached = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_attached", &attached)
            .field("free_list", &self.free_list.len())
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    data: ElementData,
}

impl Document {
    /// Create a new empty document scrolled to the origin.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
            scroll: Vec2::ZERO,
        }
    }

    /// Insert a new element as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts the element as a root.
    pub fn insert(&mut self, parent: Option<ElementId>, data: ElementData) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId stores 32-bit slot indices."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId stores 32-bit slot indices."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = ElementId::new(idx, generation);
        match parent.filter(|p| self.is_attached(*p)) {
            Some(p) => {
                if let Some(n) = self.node_mut(p) {
                    n.children.push(id);
                }
                if let Some(n) = self.node_mut(id) {
                    n.parent = Some(p);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Remove an element and its subtree. Handles to removed elements read as detached.
    pub fn remove(&mut self, id: ElementId) {
        let Some(parent) = self.node(id).map(|n| n.parent) else {
            return;
        };
        match parent {
            Some(parent) => {
                if let Some(p) = self.node_mut(parent) {
                    p.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
        self.free_subtree(id);
    }

    /// Returns true if `id` refers to an element that is still in the document.
    pub fn is_attached(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the element's data if the identifier is attached.
    pub fn data(&self, id: ElementId) -> Option<&ElementData> {
        self.node(id).map(|n| &n.data)
    }

    /// Parent of an attached element.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children of an attached element in document order.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Update the document-space layout box.
    pub fn set_layout_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(n) = self.node_mut(id) {
            n.data.layout_rect = rect;
        }
    }

    /// Update the element's own text.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(n) = self.node_mut(id) {
            n.data.text = text.into();
        }
    }

    /// Update the specified font size (`None` inherits).
    pub fn set_font_size(&mut self, id: ElementId, px: Option<f64>) {
        if let Some(n) = self.node_mut(id) {
            n.data.font_size = px;
        }
    }

    /// Toggle whether the element generates a box.
    pub fn set_rendered(&mut self, id: ElementId, rendered: bool) {
        if let Some(n) = self.node_mut(id) {
            n.data.rendered = rendered;
        }
    }

    /// Scroll the viewport to `offset` (document-space position of the viewport origin).
    pub fn scroll_to(&mut self, offset: Vec2) {
        self.scroll = offset;
    }

    /// All attached elements whose tag matches one of `tags`, in document (pre-order) order.
    ///
    /// This is how a host typically collects hover candidates, e.g. `["p", "blockquote"]`.
    pub fn select(&self, tags: &[&str]) -> Vec<ElementId> {
        let mut out = Vec::new();
        for &root in &self.roots {
            self.walk(root, &mut |id, data| {
                if tags.iter().any(|t| t.eq_ignore_ascii_case(&data.tag)) {
                    out.push(id);
                }
                false
            });
        }
        out
    }

    /// Text of the element followed by the text of its descendants in document order.
    ///
    /// Empty for detached elements.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        if self.is_attached(id) {
            self.walk(id, &mut |_, data| {
                out.push_str(&data.text);
                false
            });
        }
        out
    }

    /// Font size after inheritance from ancestors.
    pub fn computed_font_size(&self, id: ElementId) -> Option<f64> {
        let mut cur = Some(id);
        while let Some(el) = cur {
            let node = self.node(el)?;
            if let Some(px) = node.data.font_size {
                return Some(px);
            }
            cur = node.parent;
        }
        None
    }

    /// Current viewport-space rectangle of an element.
    ///
    /// Detached and unrendered elements report [`Rect::ZERO`].
    pub fn client_rect(&self, id: ElementId) -> Rect {
        match self.data(id) {
            Some(data) if data.rendered => data.layout_rect - self.scroll,
            _ => Rect::ZERO,
        }
    }

    // --- internals ---

    fn node(&self, id: ElementId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.generation()).then_some(n)
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.generation() {
            return None;
        }
        Some(n)
    }

    fn free_subtree(&mut self, id: ElementId) {
        let children = match self.node(id) {
            Some(n) => n.children.clone(),
            None => return,
        };
        for child in children {
            self.free_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Pre-order walk from `id` (inclusive). Stops early when `visit` returns true.
    fn walk(&self, id: ElementId, visit: &mut dyn FnMut(ElementId, &ElementData) -> bool) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        if visit(id, &node.data) {
            return true;
        }
        for &child in &node.children {
            if self.walk(child, visit) {
                return true;
            }
        }
        false
    }
}

impl Node {
    fn new(generation: u32, data: ElementData) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            data,
        }
    }
}

impl LayoutHost for Document {
    type Element = ElementId;

    fn client_rect(&self, element: &ElementId) -> Rect {
        Self::client_rect(self, *element)
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn text_content(&self, element: &ElementId) -> String {
        Self::text_content(self, *element)
    }

    fn font_size(&self, element: &ElementId) -> Option<f64> {
        self.computed_font_size(*element)
    }

    fn first_inline_descendant(&self, element: &ElementId) -> Option<ElementId> {
        let mut found = None;
        for &child in self.children(*element) {
            let hit = self.walk(child, &mut |id, data| {
                if is_inline_tag(&data.tag) {
                    found = Some(id);
                    true
                } else {
                    false
                }
            });
            if hit {
                break;
            }
        }
        found
    }
}
