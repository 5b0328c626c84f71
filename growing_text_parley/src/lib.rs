// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley backend for [`growing_text`].
//!
//! This crate lowers a [`StyledText`] into Parley builder calls and measures the resulting
//! [`parley::Layout`], so a [`growing_text::GrowingTextView`] can size itself to real text
//! metrics.
//!
//! Foreground colors are paint, not metrics, and are not lowered. Layouts are built with the
//! unit brush `()`.
//!
//! ## Example
//!
//! ```no_run
//! use growing_text::{GrowingTextView, GrowingTextViewConfig, TextBinding};
//! use growing_text_parley::ParleyMeasurer;
//!
//! let text = TextBinding::new("Hello!");
//! let mut view = GrowingTextView::new(text, GrowingTextViewConfig::new());
//! let mut measurer = ParleyMeasurer::new();
//!
//! // After the host has laid out the frame:
//! let height = view.after_layout(&mut measurer, 320.0);
//! assert!((150.0..=1000.0).contains(&height));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

use core::fmt;
use core::ops::Range;

use growing_text::{StyledText, TextAttribute, TextMeasurer};
use parley::style::{FontStack, FontWeight, LineHeight, StyleProperty};
use parley::{FontContext, Layout, LayoutContext, RangedBuilder};


/// Font size used where no [`TextAttribute::Font`] applies, in logical pixels.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Builds a Parley [`Layout`] from a [`StyledText`].
///
/// The returned layout has been shaped; line breaking is left to the caller.
pub fn build_layout(
    layout_cx: &mut LayoutContext<()>,
    font_cx: &mut FontContext,
    styled: &StyledText,
    scale: f32,
    quantize: bool,
    default_font_size: f32,
) -> Layout<()> {
    let text = styled.text();
    let mut builder = layout_cx.ranged_builder(font_cx, text, scale, quantize);
    builder.push_default(StyleProperty::FontSize(default_font_size));
    for (range, attribute) in styled.spans() {
        push_attribute(&mut builder, range.clone(), attribute);
    }
    builder.build(text)
}

fn push_attribute(
    builder: &mut RangedBuilder<'_, ()>,
    range: Range<usize>,
    attribute: &TextAttribute,
) {
    match attribute {
        TextAttribute::Font(font) => {
            builder.push(
                StyleProperty::FontStack(FontStack::from(font.family.as_str())),
                range.clone(),
            );
            builder.push(StyleProperty::FontSize(font.size), range.clone());
            builder.push(
                StyleProperty::FontWeight(FontWeight::new(font.weight)),
                range,
            );
        }
        TextAttribute::LineHeight(height) => {
            builder.push(
                StyleProperty::LineHeight(LineHeight::Absolute(*height)),
                range,
            );
        }
        TextAttribute::Foreground(_) => {}
    }
}

/// A [`TextMeasurer`] backed by Parley.
///
/// Owns the font and layout contexts, so one measurer should be kept and reused across frames.
pub struct ParleyMeasurer {
    font_cx: FontContext,
    layout_cx: LayoutContext<()>,
    scale: f32,
    default_font_size: f32,
}

impl fmt::Debug for ParleyMeasurer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParleyMeasurer")
            .field("scale", &self.scale)
            .field("default_font_size", &self.default_font_size)
            .finish_non_exhaustive()
    }
}

impl Default for ParleyMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyMeasurer {
    /// Creates a measurer with fresh contexts, scale `1.0` and [`DEFAULT_FONT_SIZE`].
    pub fn new() -> Self {
        Self::with_font_context(FontContext::new())
    }

    /// Creates a measurer using an existing font context, e.g. one with registered fonts.
    pub fn with_font_context(font_cx: FontContext) -> Self {
        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
            scale: 1.0,
            default_font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Sets the display scale. Heights are still reported in logical pixels.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the font size used where the text has no font attribute.
    #[must_use]
    pub fn with_default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size;
        self
    }

    /// The font context, for registering fonts.
    pub fn font_context_mut(&mut self) -> &mut FontContext {
        &mut self.font_cx
    }

    /// The display scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl TextMeasurer for ParleyMeasurer {
    fn content_height(&mut self, text: &StyledText, width: f32) -> f32 {
        let mut layout = build_layout(
            &mut self.layout_cx,
            &mut self.font_cx,
            text,
            self.scale,
            true,
            self.default_font_size,
        );
        let max_advance = (width.is_finite() && width > 0.0).then_some(width * self.scale);
        layout.break_all_lines(max_advance);
        let height = layout.height() / self.scale;
        log::trace!(
            "measured {} bytes at width {width}: {height}",
            text.len()
        );
        height
    }
}
