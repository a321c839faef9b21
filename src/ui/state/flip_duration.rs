// SPDX-License-Identifier: MPL-2.0
//! Flip duration domain type.
//!
//! Type-safe wrapper for the page-turn animation length in milliseconds.

use crate::config::{DEFAULT_FLIP_DURATION_MS, MAX_FLIP_DURATION_MS, MIN_FLIP_DURATION_MS};
use std::time::Duration;

/// Page-turn animation length in milliseconds.
///
/// The value is always within the valid range (100–5000 ms).
///
/// # Example
///
/// ```
/// use menu_flipbook::ui::state::FlipDuration;
///
/// let duration = FlipDuration::new(900);
/// assert_eq!(duration.millis(), 900);
///
/// // Values outside range are clamped
/// let too_long = FlipDuration::new(60_000);
/// assert_eq!(too_long.millis(), 5_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipDuration(u64);

impl FlipDuration {
    /// Creates a new flip duration, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_FLIP_DURATION_MS, MAX_FLIP_DURATION_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FlipDuration {
    fn default() -> Self {
        Self(DEFAULT_FLIP_DURATION_MS)
    }
}
