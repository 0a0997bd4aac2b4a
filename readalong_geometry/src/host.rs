// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host seam: every element read made by this crate goes through [`LayoutHost`].
//!
//! ## Overview
//!
//! A host owns the document and its layout. This crate never caches anything it reads from the
//! host, so a host is free to reflow, scroll, or detach elements between any two calls.
//!
//! ## Degenerate values
//!
//! Hosts report detached elements with degenerate values instead of failing:
//! - [`LayoutHost::client_rect`] returns [`Rect::ZERO`].
//! - [`LayoutHost::text_content`] returns an empty string.
//! - [`LayoutHost::font_size`] returns `None`.
//!
//! ## Sharing
//!
//! Blanket implementations for `&T`, [`Rc<T>`] and [`RefCell<T>`] let one host be shared between a
//! pointer listener and code that mutates the document on the same thread.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use kurbo::{Rect, Vec2};

/// Read-only access to the layout of a host document.
pub trait LayoutHost {
    /// Handle to an element owned by the host.
    type Element: Clone + PartialEq;

    /// Current viewport-space rectangle of `element`.
    ///
    /// Returns [`Rect::ZERO`] for elements that are no longer attached.
    fn client_rect(&self, element: &Self::Element) -> Rect;

    /// Current scroll offset of the top-level viewport.
    fn scroll_offset(&self) -> Vec2;

    /// Full text content of `element`, including all descendants.
    fn text_content(&self, element: &Self::Element) -> String;

    /// Computed font size of `element` in pixels, if the host has one.
    fn font_size(&self, element: &Self::Element) -> Option<f64>;

    /// First descendant of `element` in document order whose tag is an inline tag.
    ///
    /// See [`is_inline_tag`](crate::is_inline_tag) for the tag set.
    fn first_inline_descendant(&self, element: &Self::Element) -> Option<Self::Element>;
}

impl<T: LayoutHost + ?Sized> LayoutHost for &T {
    type Element = T::Element;

    #[inline]
    fn client_rect(&self, element: &Self::Element) -> Rect {
        (**self).client_rect(element)
    }

    #[inline]
    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }

    #[inline]
    fn text_content(&self, element: &Self::Element) -> String {
        (**self).text_content(element)
    }

    #[inline]
    fn font_size(&self, element: &Self::Element) -> Option<f64> {
        (**self).font_size(element)
    }

    #[inline]
    fn first_inline_descendant(&self, element: &Self::Element) -> Option<Self::Element> {
        (**self).first_inline_descendant(element)
    }
}

impl<T: LayoutHost + ?Sized> LayoutHost for Rc<T> {
    type Element = T::Element;

    #[inline]
    fn client_rect(&self, element: &Self::Element) -> Rect {
        (**self).client_rect(element)
    }

    #[inline]
    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }

    #[inline]
    fn text_content(&self, element: &Self::Element) -> String {
        (**self).text_content(element)
    }

    #[inline]
    fn font_size(&self, element: &Self::Element) -> Option<f64> {
        (**self).font_size(element)
    }

    #[inline]
    fn first_inline_descendant(&self, element: &Self::Element) -> Option<Self::Element> {
        (**self).first_inline_descendant(element)
    }
}

// Each read takes a short shared borrow; callers must not hold a mutable borrow across
// pointer dispatch.
impl<T: LayoutHost + ?Sized> LayoutHost for RefCell<T> {
    type Element = T::Element;

    fn client_rect(&self, element: &Self::Element) -> Rect {
        self.borrow().client_rect(element)
    }

    fn scroll_offset(&self) -> Vec2 {
        self.borrow().scroll_offset()
    }

    fn text_content(&self, element: &Self::Element) -> String {
        self.borrow().text_content(element)
    }

    fn font_size(&self, element: &Self::Element) -> Option<f64> {
        self.borrow().font_size(element)
    }

    fn first_inline_descendant(&self, element: &Self::Element) -> Option<Self::Element> {
        self.borrow().first_inline_descendant(element)
    }
}
