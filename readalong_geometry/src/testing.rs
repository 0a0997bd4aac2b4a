// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat in-test host: elements are indices into parallel vectors.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::host::LayoutHost;

#[derive(Default)]
pub(crate) struct Page {
    pub(crate) rects: Vec<Rect>,
    pub(crate) texts: Vec<String>,
    pub(crate) fonts: Vec<Option<f64>>,
    pub(crate) inline: Vec<Option<usize>>,
    pub(crate) scroll: Vec2,
}

impl Page {
    pub(crate) fn push(&mut self, rect: Rect, text: &str, font: Option<f64>) -> usize {
        self.rects.push(rect);
        self.texts.push(text.to_string());
        self.fonts.push(font);
        self.inline.push(None);
        self.rects.len() - 1
    }

    pub(crate) fn detach(&mut self, el: usize) {
        self.rects[el] = Rect::ZERO;
    }
}

impl LayoutHost for Page {
    type Element = usize;

    fn client_rect(&self, element: &usize) -> Rect {
        self.rects[*element]
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn text_content(&self, element: &usize) -> String {
        self.texts[*element].clone()
    }

    fn font_size(&self, element: &usize) -> Option<f64> {
        self.fonts[*element]
    }

    fn first_inline_descendant(&self, element: &usize) -> Option<usize> {
        self.inline[*element]
    }
}
