// SPDX-License-Identifier: MPL-2.0
//! Viewer state management modules
//!
//! Each concern of the page viewer lives in its own module, free of any
//! display surface, so it can be driven and tested in isolation.

pub mod flip;
pub mod flip_duration;
pub mod gesture;
pub mod scale;
pub mod sizer;

// Re-export commonly used types for convenience
pub use flip::{FlipDirection, FlipState, Phase, Transition};
pub use flip_duration::FlipDuration;
pub use gesture::TouchAction;
pub use scale::ScaleBounds;
pub use sizer::{compute_size, FlipbookSize, SizerState};
