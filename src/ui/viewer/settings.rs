// SPDX-License-Identifier: MPL-2.0
//! Validated viewer settings derived from the user configuration.

use crate::config::{
    ViewerConfig, DEFAULT_PINCH_SENSITIVITY, DEFAULT_SCALE, DEFAULT_WHEEL_SENSITIVITY,
};
use crate::ui::state::scale::positive_or;
use crate::ui::state::{FlipDuration, ScaleBounds};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub bounds: ScaleBounds,
    /// Always inside `bounds`.
    pub initial_scale: f32,
    pub pinch_sensitivity: f32,
    pub wheel_sensitivity: f32,
    pub flip_duration: FlipDuration,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&ViewerConfig::default())
    }
}

impl From<&ViewerConfig> for Settings {
    fn from(config: &ViewerConfig) -> Self {
        let bounds = ScaleBounds::new(config.min_scale, config.max_scale);
        let initial_scale = if config.initial_scale.is_finite() {
            bounds.clamp(config.initial_scale)
        } else {
            bounds.clamp(DEFAULT_SCALE)
        };
        Self {
            bounds,
            initial_scale,
            pinch_sensitivity: positive_or(config.pinch_sensitivity, DEFAULT_PINCH_SENSITIVITY),
            wheel_sensitivity: positive_or(config.wheel_sensitivity, DEFAULT_WHEEL_SENSITIVITY),
            flip_duration: FlipDuration::new(config.flip_duration_ms),
        }
    }
}
