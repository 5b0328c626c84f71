// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An auto-growing, multi-line text input with optional placeholder and mention highlighting.
//!
//! - [`build_styled_text`] turns plain text and a [`StyleConfig`] into [`StyledText`]: uniform
//!   font, line height and color, plus a recolored first token when it is the configured
//!   mention handle (see [`extract_mention`]).
//! - [`GrowingTextView`] binds a host-owned [`TextBinding`] to an editing [`TextSurface`],
//!   shows a placeholder while the text is empty, and sizes itself to the measured content
//!   height clamped to [`HeightBounds`].
//! - Focus and edit notifications travel through the [`SurfaceObserver`] interface; the
//!   [`Coordinator`] writes edits back to the binding and calls the host's begin/end editing
//!   callbacks.
//!
//! Measurement is delegated to a [`TextMeasurer`]. This crate does no text layout itself; the
//! `growing_text_parley` crate provides a Parley-backed measurer.
//!
//! ## Mentions
//!
//! Only the first token, split on the literal space character, is ever considered, and it must
//! equal the handle exactly. A mention later in the text is never highlighted.
//!
//! ## Indices
//!
//! All ranges are byte indices into UTF-8 text and must lie on character boundaries.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library in dependencies.
//! - `libm`: Use `libm` for float math in dependencies when `std` is disabled.
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

mod binding;
mod error;
mod height;
mod measure;
mod mention;
mod observer;
mod style;
mod styled;
mod surface;
mod view;

#[cfg(test)]
mod tests;

pub use crate::binding::TextBinding;
pub use crate::error::{Error, ErrorKind};
pub use crate::height::{DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT, HeightBounds, clamp_height};
pub use crate::measure::{FixedMeasurer, FnMeasurer, TextMeasurer};
pub use crate::mention::{MentionToken, extract_mention};
pub use crate::observer::{Coordinator, EditingCallback, SurfaceObserver};
pub use crate::style::{DEFAULT_MENTION_COLOR, FontSpec, StyleConfig, normalize_mention_handle};
pub use crate::styled::{StyledText, TextAttribute, build_styled_text};
pub use crate::surface::{EditState, SurfaceEvent, TextSurface};
pub use crate::view::{DEFAULT_PLACEHOLDER_COLOR, GrowingTextView, GrowingTextViewConfig};
