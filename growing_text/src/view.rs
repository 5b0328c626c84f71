// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The auto-growing container.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::ops::Range;

use peniko::Color;
use peniko::color::palette;

use crate::observer::EditingCallback;
use crate::{
    Coordinator, Error, HeightBounds, StyleConfig, SurfaceEvent, SurfaceObserver, TextBinding,
    TextMeasurer, TextSurface, build_styled_text,
};

/// Placeholder text color unless configured otherwise.
pub const DEFAULT_PLACEHOLDER_COLOR: Color = palette::css::GRAY;

/// Construction parameters of a [`GrowingTextView`].
pub struct GrowingTextViewConfig {
    style: StyleConfig,
    placeholder: Option<String>,
    placeholder_color: Color,
    bounds: HeightBounds,
    on_begin_editing: Option<EditingCallback>,
    on_end_editing: Option<EditingCallback>,
}

impl fmt::Debug for GrowingTextViewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowingTextViewConfig")
            .field("style", &self.style)
            .field("placeholder", &self.placeholder)
            .field("placeholder_color", &self.placeholder_color)
            .field("bounds", &self.bounds)
            .field("on_begin_editing", &self.on_begin_editing.is_some())
            .field("on_end_editing", &self.on_end_editing.is_some())
            .finish()
    }
}

impl Default for GrowingTextViewConfig {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            placeholder: None,
            placeholder_color: DEFAULT_PLACEHOLDER_COLOR,
            bounds: HeightBounds::default(),
            on_begin_editing: None,
            on_end_editing: None,
        }
    }
}

impl GrowingTextViewConfig {
    /// Default configuration: no styling, no placeholder, heights between 150 and 1000.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text style.
    #[must_use]
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Sets the hint shown while the bound text is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the color of the placeholder text.
    #[must_use]
    pub fn with_placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    /// Sets the minimum displayed height.
    #[must_use]
    pub fn with_min_height(mut self, min: f32) -> Self {
        self.bounds.min = min;
        self
    }

    /// Sets the maximum displayed height.
    #[must_use]
    pub fn with_max_height(mut self, max: f32) -> Self {
        self.bounds.max = max;
        self
    }

    /// Sets both height bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: HeightBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Called with the editing surface whenever it gains focus.
    #[must_use]
    pub fn on_begin_editing(mut self, callback: impl FnMut(&TextSurface) + 'static) -> Self {
        self.on_begin_editing = Some(Box::new(callback));
        self
    }

    /// Called with the editing surface whenever it loses focus.
    #[must_use]
    pub fn on_end_editing(mut self, callback: impl FnMut(&TextSurface) + 'static) -> Self {
        self.on_end_editing = Some(Box::new(callback));
        self
    }
}

/// A multi-line text input that grows with its content.
///
/// The view renders the bound text through [`build_styled_text`] into an editing surface and,
/// while the text is empty, a disabled placeholder surface on top of it. Its height follows the
/// measured content height, clamped to the configured [`HeightBounds`].
///
/// Rendering and measuring are separate steps. [`update`](Self::update) restyles the text and
/// schedules a measurement; [`after_layout`](Self::after_layout) performs it once the host has
/// laid out the new content.
///
/// ```
/// use growing_text::{FixedMeasurer, GrowingTextView, GrowingTextViewConfig, TextBinding};
///
/// let text = TextBinding::new("");
/// let config = GrowingTextViewConfig::new()
///     .with_placeholder("Say something")
///     .with_min_height(30.0)
///     .with_max_height(150.0);
/// let mut view = GrowingTextView::new(text.clone(), config);
/// assert!(view.is_placeholder_visible());
///
/// view.focus();
/// view.insert_str("hello").unwrap();
/// assert_eq!(text.get(), "hello");
/// assert!(!view.is_placeholder_visible());
///
/// assert_eq!(view.after_layout(&mut FixedMeasurer(500.0), 320.0), 150.0);
/// ```
#[derive(Debug)]
pub struct GrowingTextView {
    style: StyleConfig,
    placeholder_style: StyleConfig,
    placeholder: Option<String>,
    bounds: HeightBounds,
    editor: TextSurface,
    placeholder_surface: TextSurface,
    placeholder_visible: bool,
    coordinator: Coordinator,
    height: Option<f32>,
    rendered_revision: u64,
    pending_measure: bool,
}

impl GrowingTextView {
    /// Creates a view bound to `text` and performs the first render.
    pub fn new(text: TextBinding, config: GrowingTextViewConfig) -> Self {
        let GrowingTextViewConfig {
            style,
            placeholder,
            placeholder_color,
            bounds,
            on_begin_editing,
            on_end_editing,
        } = config;
        let rendered_revision = text.revision();
        let mut view = Self {
            placeholder_style: style.placeholder_variant(placeholder_color),
            editor: TextSurface::new(style.tint_color()),
            style,
            placeholder,
            bounds,
            placeholder_surface: TextSurface::disabled(),
            placeholder_visible: false,
            coordinator: Coordinator::new(text, on_begin_editing, on_end_editing),
            height: None,
            rendered_revision,
            pending_measure: false,
        };
        view.update();
        view
    }

    /// Restoring a view from an archive is not supported.
    ///
    /// # Panics
    ///
    /// Always. Views are only ever built with [`GrowingTextView::new`].
    pub fn from_archive(archive: &[u8]) -> Self {
        panic!(
            "GrowingTextView cannot be restored from an archive ({} bytes); use GrowingTextView::new",
            archive.len()
        );
    }

    /// The bound text.
    pub fn binding(&self) -> &TextBinding {
        self.coordinator.binding()
    }

    /// A copy of the bound text.
    pub fn text(&self) -> String {
        self.binding().get()
    }

    /// The text style.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// The height bounds.
    pub fn bounds(&self) -> HeightBounds {
        self.bounds
    }

    /// The surface the user types into.
    pub fn editing_surface(&self) -> &TextSurface {
        &self.editor
    }

    /// The placeholder surface, while it is shown.
    pub fn placeholder_surface(&self) -> Option<&TextSurface> {
        self.placeholder_visible.then_some(&self.placeholder_surface)
    }

    /// Returns `true` while the placeholder is shown.
    pub fn is_placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    /// The published height, unset until the first measurement.
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    /// The height to lay the view out with.
    pub fn displayed_height(&self) -> f32 {
        self.height.unwrap_or(self.bounds.min)
    }

    /// Returns `true` if the binding changed since the last render.
    pub fn needs_update(&self) -> bool {
        self.binding().revision() != self.rendered_revision
    }

    /// Returns `true` if a measurement is waiting for [`after_layout`](Self::after_layout).
    pub fn has_pending_measure(&self) -> bool {
        self.pending_measure
    }

    /// Renders the bound text.
    ///
    /// Restyles the editing surface, shows or hides the placeholder and schedules a
    /// measurement. Nothing is measured here.
    pub fn update(&mut self) {
        let binding = self.coordinator.binding();
        let styled = binding.with(|text| build_styled_text(text, &self.style));
        self.rendered_revision = binding.revision();

        self.placeholder_visible = match self.placeholder.as_deref() {
            Some(placeholder) if styled.is_empty() => {
                self.placeholder_surface
                    .set_styled_text(build_styled_text(placeholder, &self.placeholder_style));
                true
            }
            _ => false,
        };
        self.editor.set_styled_text(styled);
        self.pending_measure = true;
        log::trace!(
            "rendered revision {}, placeholder visible: {}",
            self.rendered_revision,
            self.placeholder_visible
        );
    }

    /// Renders only if the binding changed since the last render.
    pub fn update_if_needed(&mut self) -> bool {
        let needed = self.needs_update();
        if needed {
            self.update();
        }
        needed
    }

    /// Post-layout hook: measures pending content and publishes the clamped height.
    ///
    /// The placeholder is measured too while visible, so the hint is never cut off. Returns the
    /// displayed height, unchanged when nothing was pending.
    pub fn after_layout(&mut self, measurer: &mut impl TextMeasurer, width: f32) -> f32 {
        if !self.pending_measure {
            return self.displayed_height();
        }
        self.pending_measure = false;

        let mut measured = measurer.content_height(self.editor.styled_text(), width);
        self.editor.set_content_height(measured);
        if self.placeholder_visible {
            let placeholder =
                measurer.content_height(self.placeholder_surface.styled_text(), width);
            self.placeholder_surface.set_content_height(placeholder);
            measured = measured.max(placeholder);
        }

        let height = self.bounds.clamp(measured);
        if self.height != Some(height) {
            log::debug!("height {:?} -> {height} (measured {measured})", self.height);
        }
        self.height = Some(height);
        height
    }

    /// Focuses the editing surface. Returns `true` if focus changed.
    pub fn focus(&mut self) -> bool {
        match self.editor.focus() {
            Some(event) => {
                self.coordinator.dispatch(event, &self.editor);
                true
            }
            None => false,
        }
    }

    /// Removes focus from the editing surface. Returns `true` if focus changed.
    pub fn blur(&mut self) -> bool {
        match self.editor.blur() {
            Some(event) => {
                self.coordinator.dispatch(event, &self.editor);
                true
            }
            None => false,
        }
    }

    /// Returns `true` while the editing surface has focus.
    pub fn is_editing(&self) -> bool {
        self.editor.is_editing()
    }

    /// Types `text` at the end of the editing surface.
    ///
    /// Like every edit, this first renders any pending write to the binding, so the edit
    /// applies to the current bound text.
    pub fn insert_str(&mut self, text: &str) -> Result<(), Error> {
        self.update_if_needed();
        let result = self.editor.insert_str(text);
        self.finish_edit(result)
    }

    /// Replaces `range` of the editing surface with `replacement`.
    pub fn replace_range(&mut self, range: Range<usize>, replacement: &str) -> Result<(), Error> {
        self.update_if_needed();
        let result = self.editor.replace_range(range, replacement);
        self.finish_edit(result)
    }

    /// Deletes `range` from the editing surface.
    pub fn delete_range(&mut self, range: Range<usize>) -> Result<(), Error> {
        self.update_if_needed();
        let result = self.editor.delete_range(range);
        self.finish_edit(result)
    }

    fn finish_edit(&mut self, result: Result<SurfaceEvent, Error>) -> Result<(), Error> {
        let event = result.inspect_err(|err| log::warn!("edit rejected: {err}"))?;
        self.coordinator.dispatch(event, &self.editor);
        self.update();
        Ok(())
    }
}
