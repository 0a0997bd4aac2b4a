// Copyright 2025 the Readalong Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-line height estimation.
//!
//! The font size governing the first visual line is used as a proxy for its height. When a block
//! is nothing but one inline wrapper (for example `<p><span style="font-size: 24px">..</span></p>`)
//! the wrapper's font size wins; otherwise the block's own size is used. This is a best-effort
//! signal and does not measure richly nested markup accurately.

use crate::host::LayoutHost;

/// Tags treated as inline-level when looking for a wrapping descendant.
pub const INLINE_TAGS: &[&str] = &[
    "span", "a", "em", "i", "strong", "b", "u", "s", "strike", "sub", "sup", "tt", "var", "cite",
    "code", "dfn", "kbd", "samp", "abbr", "acronym", "big", "small", "font", "label", "legend",
    "q", "button", "input", "select", "textarea", "progress",
];

/// Returns true if `tag` (any ASCII case) is in [`INLINE_TAGS`].
pub fn is_inline_tag(tag: &str) -> bool {
    INLINE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Estimate the height of the first rendered line of `element`, in pixels.
///
/// Missing or non-finite font sizes read as `0.0`.
pub fn first_line_height<H: LayoutHost + ?Sized>(host: &H, element: &H::Element) -> f64 {
    let wrapper = host
        .first_inline_descendant(element)
        .filter(|inline| host.text_content(inline) == host.text_content(element));
    let size = match wrapper {
        Some(inline) => host.font_size(&inline),
        None => host.font_size(element),
    };
    size.filter(|s| s.is_finite()).unwrap_or(0.0)
}
