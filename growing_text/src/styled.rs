// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use peniko::Color;

use crate::error::validate_range;
use crate::{Error, FontSpec, StyleConfig, extract_mention};

/// A visual attribute applied to a byte range of a [`StyledText`].
#[derive(Clone, Debug)]
pub enum TextAttribute {
    /// Font family, size and weight.
    Font(FontSpec),
    /// Fixed line height in logical pixels, used as both minimum and maximum.
    LineHeight(f32),
    /// Foreground (text) color.
    Foreground(Color),
}

/// Plain text paired with per-range visual attributes.
///
/// Ranges are byte indices into the UTF-8 text. When spans overlap, the span applied last
/// wins.
#[derive(Clone, Debug, Default)]
pub struct StyledText {
    text: String,
    spans: Vec<(Range<usize>, TextAttribute)>,
}

impl StyledText {
    /// Creates a `StyledText` with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// The underlying text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply `attribute` to `range`.
    pub fn apply_attribute(
        &mut self,
        range: Range<usize>,
        attribute: TextAttribute,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.spans.push((range, attribute));
        Ok(())
    }

    /// All spans, in the order they were applied.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &TextAttribute)> {
        self.spans.iter().map(|(range, attr)| (range, attr))
    }

    /// Attributes covering `index`, in application order.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &TextAttribute> {
        self.spans
            .iter()
            .filter(move |(range, _)| range.contains(&index))
            .map(|(_, attr)| attr)
    }

    /// The effective foreground color at `index`, if any span sets one.
    pub fn foreground_at(&self, index: usize) -> Option<Color> {
        self.attributes_at(index)
            .filter_map(|attr| match attr {
                TextAttribute::Foreground(color) => Some(*color),
                _ => None,
            })
            .last()
    }

    /// The effective font at `index`.
    pub fn font_at(&self, index: usize) -> Option<&FontSpec> {
        self.attributes_at(index)
            .filter_map(|attr| match attr {
                TextAttribute::Font(font) => Some(font),
                _ => None,
            })
            .last()
    }

    /// The effective fixed line height at `index`.
    pub fn line_height_at(&self, index: usize) -> Option<f32> {
        self.attributes_at(index)
            .filter_map(|attr| match attr {
                TextAttribute::LineHeight(height) => Some(*height),
                _ => None,
            })
            .last()
    }
}

/// Builds the styled representation of `text` under `config`.
///
/// Font, line height and text color cover the whole text when set. If the first
/// space-delimited token equals the configured mention handle, that token alone is recolored
/// with the mention color.
///
/// Pure; cheap enough to call on every keystroke.
///
/// ```
/// use growing_text::{StyleConfig, build_styled_text};
/// use peniko::color::palette;
///
/// let config = StyleConfig::new()
///     .with_text_color(palette::css::WHITE)
///     .with_mention_handle("Nickname");
/// let styled = build_styled_text("@Nickname hello", &config);
///
/// let gray = config.mention_color().to_rgba8();
/// assert_eq!(styled.foreground_at(0).map(|c| c.to_rgba8()), Some(gray));
/// assert_eq!(styled.foreground_at(8).map(|c| c.to_rgba8()), Some(gray));
/// assert_eq!(
///     styled.foreground_at(9).map(|c| c.to_rgba8()),
///     Some(palette::css::WHITE.to_rgba8())
/// );
/// ```
pub fn build_styled_text(text: &str, config: &StyleConfig) -> StyledText {
    let mut styled = StyledText::new(text);
    if text.is_empty() {
        return styled;
    }
    let full = 0..text.len();
    if let Some(font) = config.font() {
        styled
            .spans
            .push((full.clone(), TextAttribute::Font(font.clone())));
    }
    if let Some(line_height) = config.line_height() {
        styled
            .spans
            .push((full.clone(), TextAttribute::LineHeight(line_height)));
    }
    if let Some(color) = config.text_color() {
        styled.spans.push((full, TextAttribute::Foreground(color)));
    }
    if let (Some(handle), Some(token)) = (config.mention_handle(), extract_mention(text)) {
        if token.matches(handle) {
            styled.spans.push((
                token.range(),
                TextAttribute::Foreground(config.mention_color()),
            ));
        }
    }
    log::trace!(
        "built styled text: {} bytes, {} spans",
        styled.len(),
        styled.spans.len()
    );
    styled
}
