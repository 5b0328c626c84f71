// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Minimum height of the container unless configured otherwise, in logical pixels.
pub const DEFAULT_MIN_HEIGHT: f32 = 150.0;

/// Maximum height of the container unless configured otherwise, in logical pixels.
pub const DEFAULT_MAX_HEIGHT: f32 = 1000.0;

/// Raises `measured` to at least `min`, then caps it at `max`.
///
/// Unlike [`f32::clamp`] this never panics: a NaN measurement yields `min`, and if
/// `min > max` the result is `max`.
///
/// ```
/// use growing_text::clamp_height;
///
/// assert_eq!(clamp_height(500.0, 30.0, 150.0), 150.0);
/// assert_eq!(clamp_height(5.0, 30.0, 150.0), 30.0);
/// ```
#[must_use]
pub fn clamp_height(measured: f32, min: f32, max: f32) -> f32 {
    measured.max(min).min(max)
}

/// The closed interval the displayed height is kept in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeightBounds {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl Default for HeightBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_HEIGHT,
            max: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl HeightBounds {
    /// Creates bounds from `min` and `max`.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamps `measured` into these bounds.
    #[must_use]
    pub fn clamp(self, measured: f32) -> f32 {
        clamp_height(measured, self.min, self.max)
    }
}
