// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use crate::{SurfaceEvent, TextBinding, TextSurface};

/// Host callback invoked with the editing surface.
pub type EditingCallback = Box<dyn FnMut(&TextSurface)>;

/// Receives the notifications of a [`TextSurface`].
///
/// All slots default to doing nothing.
pub trait SurfaceObserver {
    /// The user changed the text of `surface`.
    fn on_text_changed(&mut self, _surface: &TextSurface) {}

    /// `surface` gained focus.
    fn on_focus_gained(&mut self, _surface: &TextSurface) {}

    /// `surface` lost focus.
    fn on_focus_lost(&mut self, _surface: &TextSurface) {}

    /// Routes `event` to the matching slot.
    fn dispatch(&mut self, event: SurfaceEvent, surface: &TextSurface) {
        match event {
            SurfaceEvent::TextChanged => self.on_text_changed(surface),
            SurfaceEvent::FocusGained => self.on_focus_gained(surface),
            SurfaceEvent::FocusLost => self.on_focus_lost(surface),
        }
    }
}

/// Bridges the editing surface to the host.
///
/// Text changes are written back to the binding immediately. Focus changes invoke the host's
/// begin/end editing callbacks.
pub struct Coordinator {
    binding: TextBinding,
    on_begin_editing: Option<EditingCallback>,
    on_end_editing: Option<EditingCallback>,
}

impl fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("binding", &self.binding)
            .field("on_begin_editing", &self.on_begin_editing.is_some())
            .field("on_end_editing", &self.on_end_editing.is_some())
            .finish()
    }
}

impl Coordinator {
    /// Creates a coordinator writing to `binding`.
    pub fn new(
        binding: TextBinding,
        on_begin_editing: Option<EditingCallback>,
        on_end_editing: Option<EditingCallback>,
    ) -> Self {
        Self {
            binding,
            on_begin_editing,
            on_end_editing,
        }
    }

    /// The binding edits are written to.
    pub fn binding(&self) -> &TextBinding {
        &self.binding
    }
}

impl SurfaceObserver for Coordinator {
    fn on_text_changed(&mut self, surface: &TextSurface) {
        self.binding.set(surface.text());
    }

    fn on_focus_gained(&mut self, surface: &TextSurface) {
        log::debug!("began editing");
        if let Some(callback) = self.on_begin_editing.as_mut() {
            callback(surface);
        }
    }

    fn on_focus_lost(&mut self, surface: &TextSurface) {
        log::debug!("ended editing");
        if let Some(callback) = self.on_end_editing.as_mut() {
            callback(surface);
        }
    }
}
