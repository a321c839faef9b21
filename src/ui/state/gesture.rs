// SPDX-License-Identifier: MPL-2.0
//! Zoom gesture recognition.
//!
//! Two independent input sources feed the same scale value:
//! - two-finger pinch, tracked through the distance between the touch points
//! - mouse wheel while a zoom modifier (ctrl/meta) is held
//!
//! Anything else (single-finger drags, plain wheel scrolling) passes through
//! so the surrounding page keeps scrolling normally.

use super::scale::ScaleBounds;
use crate::config::{DEFAULT_PINCH_SENSITIVITY, DEFAULT_SCALE, DEFAULT_WHEEL_SENSITIVITY};
use iced::Point;
use log::trace;

/// Native touch behavior the surface should allow for the current scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    /// Zoomed in: native panning in every direction.
    Auto,
    /// At or below natural size: vertical page scrolling only.
    PanY,
}

/// Gesture recognizer state.
#[derive(Debug, Clone)]
pub struct State {
    scale: f32,
    bounds: ScaleBounds,
    pinch_sensitivity: f32,
    wheel_sensitivity: f32,
    /// Distance between the two touch points at the last pinch sample.
    /// Cleared whenever the touch count drops to zero.
    last_pinch_distance: Option<f32>,
}

/// Raw input forwarded by the viewer.
///
/// Touch messages carry every point currently on the surface, mirroring how
/// touch events report their full touch list.
#[derive(Debug, Clone)]
pub enum Message {
    TouchStart(Vec<Point>),
    TouchMove(Vec<Point>),
    TouchEnd { remaining: usize },
    Wheel { delta_y: f32, zoom_modifier: bool },
}

/// Effects produced by gesture handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Not a zoom gesture: let the platform handle it (page scroll).
    PassThrough,
    /// Zoom gesture consumed without changing the scale (already at a bound).
    Consumed,
    /// Zoom gesture consumed; carries the new scale.
    ScaleChanged(f32),
}

impl Effect {
    /// Whether the platform default (scrolling) must be suppressed.
    #[must_use]
    pub fn is_consumed(self) -> bool {
        !matches!(self, Effect::PassThrough)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            ScaleBounds::default(),
            DEFAULT_SCALE,
            DEFAULT_PINCH_SENSITIVITY,
            DEFAULT_WHEEL_SENSITIVITY,
        )
    }
}

impl State {
    #[must_use]
    pub fn new(
        bounds: ScaleBounds,
        initial_scale: f32,
        pinch_sensitivity: f32,
        wheel_sensitivity: f32,
    ) -> Self {
        Self {
            scale: bounds.clamp(initial_scale),
            bounds,
            pinch_sensitivity,
            wheel_sensitivity,
            last_pinch_distance: None,
        }
    }

    /// Handle a gesture message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::TouchStart(points) => {
                if let Some(distance) = pinch_distance(&points) {
                    self.last_pinch_distance = Some(distance);
                }
                Effect::PassThrough
            }
            Message::TouchMove(points) => {
                let (Some(distance), Some(last)) =
                    (pinch_distance(&points), self.last_pinch_distance)
                else {
                    return Effect::PassThrough;
                };
                self.last_pinch_distance = Some(distance);
                self.apply_delta((distance - last) * self.pinch_sensitivity)
            }
            Message::TouchEnd { remaining } => {
                if remaining == 0 {
                    self.last_pinch_distance = None;
                }
                Effect::PassThrough
            }
            Message::Wheel {
                delta_y,
                zoom_modifier,
            } => {
                if !zoom_modifier {
                    return Effect::PassThrough;
                }
                self.apply_delta(-delta_y * self.wheel_sensitivity)
            }
        }
    }

    fn apply_delta(&mut self, delta: f32) -> Effect {
        let previous = self.scale;
        self.scale = self.bounds.clamp(self.scale + delta);
        if (self.scale - previous).abs() < f32::EPSILON {
            trace!("zoom gesture at bound, scale stays {previous:.3}");
            Effect::Consumed
        } else {
            Effect::ScaleChanged(self.scale)
        }
    }

    /// Sets the scale directly (clamped).
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = self.bounds.clamp(scale);
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    #[must_use]
    pub fn last_pinch_distance(&self) -> Option<f32> {
        self.last_pinch_distance
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.last_pinch_distance.is_some()
    }

    #[must_use]
    pub fn touch_action(&self) -> TouchAction {
        if self.scale > 1.0 {
            TouchAction::Auto
        } else {
            TouchAction::PanY
        }
    }
}

/// Euclidean distance between the touch points, only for exactly two points.
fn pinch_distance(points: &[Point]) -> Option<f32> {
    match points {
        [a, b] => Some((b.x - a.x).hypot(b.y - a.y)),
        _ => None,
    }
}
