// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::StyledText;

/// Measures the rendered height of styled text.
///
/// This is the seam to the text layout engine. The view only calls it from
/// [`GrowingTextView::after_layout`](crate::GrowingTextView::after_layout), once the host has
/// committed the render pass.
pub trait TextMeasurer {
    /// Height of `text` laid out at `width`, in logical pixels.
    fn content_height(&mut self, text: &StyledText, width: f32) -> f32;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn content_height(&mut self, text: &StyledText, width: f32) -> f32 {
        (**self).content_height(text, width)
    }
}

/// Reports the same height for every text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedMeasurer(pub f32);

impl TextMeasurer for FixedMeasurer {
    fn content_height(&mut self, _text: &StyledText, _width: f32) -> f32 {
        self.0
    }
}

/// Adapts a closure into a [`TextMeasurer`].
pub struct FnMeasurer<F>(pub F);

impl<F> fmt::Debug for FnMeasurer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnMeasurer").finish_non_exhaustive()
    }
}

impl<F: FnMut(&StyledText, f32) -> f32> TextMeasurer for FnMeasurer<F> {
    fn content_height(&mut self, text: &StyledText, width: f32) -> f32 {
        (self.0)(text, width)
    }
}
