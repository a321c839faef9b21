// SPDX-License-Identifier: MPL-2.0
//! Scale bounds shared by every zoom input source.

use crate::config::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};

/// Inclusive `[min, max]` range for the viewer scale.
///
/// Construction normalizes the range so clamping never panics: swapped bounds
/// are reordered and non-positive or non-finite values fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min: f32,
    max: f32,
}

impl ScaleBounds {
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let min = positive_or(min, MIN_SCALE);
        let max = positive_or(max, MAX_SCALE);
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Clamps `scale` into the range. NaN collapses to the default scale
    /// (itself clamped).
    #[must_use]
    pub fn clamp(self, scale: f32) -> f32 {
        if scale.is_nan() {
            return DEFAULT_SCALE.clamp(self.min, self.max);
        }
        scale.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(self, scale: f32) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: MIN_SCALE,
            max: MAX_SCALE,
        }
    }
}

/// `value` if it is finite and strictly positive, else `fallback`.
pub(crate) fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
