// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style configuration shared by the styled-text builder and the placeholder surface.

use alloc::format;
use alloc::string::String;

use peniko::Color;
use peniko::color::palette;

/// Foreground color applied to a matching mention token unless configured otherwise.
pub const DEFAULT_MENTION_COLOR: Color = palette::css::GRAY;

/// Font selection for the whole text.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// CSS-like family list, e.g. `"Inter, sans-serif"`.
    pub family: String,
    /// Font size in logical pixels.
    pub size: f32,
    /// Font weight, `400.0` being regular.
    pub weight: f32,
}

impl FontSpec {
    /// A regular-weight font of the given family and size.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: 400.0,
        }
    }

    /// A system sans-serif font of the given size.
    pub fn system(size: f32) -> Self {
        Self::new("system-ui, sans-serif", size)
    }

    /// Returns this font with a different weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }
}

/// Immutable styling parameters.
///
/// Every parameter is optional. Unset parameters are simply not applied, which leaves the
/// rendering engine's defaults in place.
///
/// The tint color is a property of the editing surface (caret and selection), it never ends up
/// in the styled text.
#[derive(Clone, Debug)]
pub struct StyleConfig {
    font: Option<FontSpec>,
    line_height: Option<f32>,
    text_color: Option<Color>,
    tint_color: Option<Color>,
    mention_color: Color,
    mention_handle: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleConfig {
    /// Creates a configuration with nothing set and the default mention color.
    pub fn new() -> Self {
        Self {
            font: None,
            line_height: None,
            text_color: None,
            tint_color: None,
            mention_color: DEFAULT_MENTION_COLOR,
            mention_handle: None,
        }
    }

    /// Sets the font.
    #[must_use]
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets a fixed line height, in logical pixels.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Sets the foreground color of the text.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Sets the caret and selection color of the editing surface.
    #[must_use]
    pub fn with_tint_color(mut self, color: Color) -> Self {
        self.tint_color = Some(color);
        self
    }

    /// Sets the foreground color of a matching mention.
    #[must_use]
    pub fn with_mention_color(mut self, color: Color) -> Self {
        self.mention_color = color;
        self
    }

    /// Sets the mention handle, prepending `@` when it is missing.
    ///
    /// `"alice"` and `"@alice"` configure the same handle.
    #[must_use]
    pub fn with_mention_handle(mut self, handle: &str) -> Self {
        self.mention_handle = Some(normalize_mention_handle(handle));
        self
    }

    /// The configured font.
    pub fn font(&self) -> Option<&FontSpec> {
        self.font.as_ref()
    }

    /// The configured fixed line height.
    pub fn line_height(&self) -> Option<f32> {
        self.line_height
    }

    /// The configured text color.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// The configured tint color.
    pub fn tint_color(&self) -> Option<Color> {
        self.tint_color
    }

    /// The color used for a matching mention.
    pub fn mention_color(&self) -> Color {
        self.mention_color
    }

    /// The normalized mention handle, always starting with `@`.
    pub fn mention_handle(&self) -> Option<&str> {
        self.mention_handle.as_deref()
    }

    /// Derives the style of a placeholder surface.
    ///
    /// Font and line height carry over so the hint lines up with typed text. The text color is
    /// replaced; tint and mention styling are dropped.
    #[must_use]
    pub fn placeholder_variant(&self, text_color: Color) -> Self {
        Self {
            font: self.font.clone(),
            line_height: self.line_height,
            text_color: Some(text_color),
            tint_color: None,
            mention_color: DEFAULT_MENTION_COLOR,
            mention_handle: None,
        }
    }
}

/// Returns `handle` with a leading `@`, adding one if needed.
///
/// Only a leading `@` counts: a handle such as `"a@b"` becomes `"@a@b"` rather than being kept
/// as is.
pub fn normalize_mention_handle(handle: &str) -> String {
    if handle.starts_with('@') {
        String::from(handle)
    } else {
        format!("@{handle}")
    }
}
