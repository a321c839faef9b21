// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` assertion macro, which handles floating-point
//! precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons of values that went through a few
/// additions (scale deltas, size multipliers).
pub const F32_EPSILON: f32 = 1e-5;
