// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editable text surface wrapped by the view.

use alloc::string::String;
use core::ops::Range;

use peniko::Color;

use crate::error::{ErrorKind, validate_range};
use crate::{Error, StyledText};

/// Focus state of a [`TextSurface`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    /// Not focused; edits are rejected.
    #[default]
    Idle,
    /// Focused and accepting edits.
    Editing,
}

/// Notifications produced by a [`TextSurface`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The user changed the text.
    TextChanged,
    /// The surface gained focus.
    FocusGained,
    /// The surface lost focus.
    FocusLost,
}

/// A text editing surface.
///
/// Holds the styled text currently displayed, whether it accepts input, and its focus state.
/// Programmatic assignment through [`set_styled_text`](Self::set_styled_text) never produces an
/// event; user edits and focus transitions do.
#[derive(Clone, Debug)]
pub struct TextSurface {
    styled: StyledText,
    editable: bool,
    tint_color: Option<Color>,
    state: EditState,
    content_height: Option<f32>,
}

impl TextSurface {
    /// An editable surface with no text.
    pub fn new(tint_color: Option<Color>) -> Self {
        Self {
            styled: StyledText::default(),
            editable: true,
            tint_color,
            state: EditState::Idle,
            content_height: None,
        }
    }

    /// A disabled surface. It never gains focus and rejects every edit.
    pub fn disabled() -> Self {
        Self {
            editable: false,
            ..Self::new(None)
        }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        self.styled.text()
    }

    /// The displayed styled text.
    pub fn styled_text(&self) -> &StyledText {
        &self.styled
    }

    /// Whether the surface accepts focus and input.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Caret and selection color.
    pub fn tint_color(&self) -> Option<Color> {
        self.tint_color
    }

    /// The current focus state.
    pub fn state(&self) -> EditState {
        self.state
    }

    /// Returns `true` while the surface has focus.
    pub fn is_editing(&self) -> bool {
        self.state == EditState::Editing
    }

    /// Content height from the most recent measurement, before clamping.
    pub fn content_height(&self) -> Option<f32> {
        self.content_height
    }

    pub(crate) fn set_content_height(&mut self, height: f32) {
        self.content_height = Some(height);
    }

    /// Replaces the displayed styled text.
    pub fn set_styled_text(&mut self, styled: StyledText) {
        self.styled = styled;
    }

    /// Moves focus to this surface.
    ///
    /// Returns [`SurfaceEvent::FocusGained`] on the `Idle → Editing` transition only.
    pub fn focus(&mut self) -> Option<SurfaceEvent> {
        if !self.editable || self.state == EditState::Editing {
            return None;
        }
        self.state = EditState::Editing;
        Some(SurfaceEvent::FocusGained)
    }

    /// Removes focus from this surface.
    ///
    /// Returns [`SurfaceEvent::FocusLost`] on the `Editing → Idle` transition only.
    pub fn blur(&mut self) -> Option<SurfaceEvent> {
        if self.state == EditState::Idle {
            return None;
        }
        self.state = EditState::Idle;
        Some(SurfaceEvent::FocusLost)
    }

    /// Inserts `text` at the end, as if typed.
    pub fn insert_str(&mut self, text: &str) -> Result<SurfaceEvent, Error> {
        let end = self.styled.len();
        self.replace_range(end..end, text)
    }

    /// Deletes `range`, as if erased by the user.
    pub fn delete_range(&mut self, range: Range<usize>) -> Result<SurfaceEvent, Error> {
        self.replace_range(range, "")
    }

    /// Replaces `range` with `replacement`, as if edited by the user.
    ///
    /// Attributes are dropped: the view restyles the new text on its next update.
    pub fn replace_range(
        &mut self,
        range: Range<usize>,
        replacement: &str,
    ) -> Result<SurfaceEvent, Error> {
        let len = self.styled.len();
        if !self.editable {
            return Err(Error::new(ErrorKind::NotEditable, range.start, range.end, len));
        }
        if self.state != EditState::Editing {
            return Err(Error::new(ErrorKind::NotEditing, range.start, range.end, len));
        }
        validate_range(self.styled.text(), &range)?;
        let mut text = String::from(self.styled.text());
        text.replace_range(range, replacement);
        self.styled = StyledText::new(text);
        Ok(SurfaceEvent::TextChanged)
    }
}
