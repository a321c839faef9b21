// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Scale**: Zoom scale bounds and initial value
//! - **Gestures**: Pinch and wheel sensitivities
//! - **Flip**: Page-turn animation length

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale applied when a viewer is mounted (1.0 = page at its natural width).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Minimum allowed scale.
pub const MIN_SCALE: f32 = 0.8;

/// Maximum allowed scale.
pub const MAX_SCALE: f32 = 3.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Scale change per pixel of pinch distance change.
pub const DEFAULT_PINCH_SENSITIVITY: f32 = 0.01;

/// Scale change per pixel of wheel delta while the zoom modifier is held.
pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 0.001;

// ==========================================================================
// Flip Defaults
// ==========================================================================

/// Length of the page-turn animation (in milliseconds).
pub const DEFAULT_FLIP_DURATION_MS: u64 = 700;

/// Minimum flip duration (in milliseconds).
pub const MIN_FLIP_DURATION_MS: u64 = 100;

/// Maximum flip duration (in milliseconds).
pub const MAX_FLIP_DURATION_MS: u64 = 5_000;
