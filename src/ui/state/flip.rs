// SPDX-License-Identifier: MPL-2.0
//! Page-turn state machine.
//!
//! The machine is either idle or flipping in one direction. A request commits
//! the flip immediately (`swipe_progress` jumps to 1 and the renderer animates
//! the curl); the owner schedules [`FlipState::complete`] once the animation
//! length has elapsed. While a flip is in flight every further request is
//! rejected, so at most one transition exists at a time.

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipDirection {
    /// Towards higher page numbers.
    #[default]
    Forward,
    /// Towards lower page numbers.
    Backward,
}

/// Observable machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Flipping(FlipDirection),
}

/// Which CSS-like transition the renderer should run on the page layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Committed flip: ease-in-out over the flip duration.
    Turning,
    /// Settled: short ease-out back to rest.
    Settling,
}

/// Rotation applied to the curling page at full progress, in degrees.
const FULL_CURL_DEGREES: f32 = 180.0;
/// Shadow opacity at full progress.
const MAX_SHADOW_OPACITY: f32 = 0.5;
/// How much the shadow darkens the current page.
const SHADOW_DIMMING: f32 = 0.3;

/// Page position and flip progress for one document.
#[derive(Debug, Clone)]
pub struct FlipState {
    current_page: u32,
    total_pages: u32,
    is_flipping: bool,
    direction: FlipDirection,
    swipe_progress: f32,
}

impl Default for FlipState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            is_flipping: false,
            direction: FlipDirection::Forward,
            swipe_progress: 0.0,
        }
    }
}

impl FlipState {
    /// Applies the page count reported by the renderer and returns to page 1.
    pub fn document_loaded(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
        self.current_page = 1;
        self.is_flipping = false;
        self.swipe_progress = 0.0;
    }

    /// Starts a flip. Returns `false` (and changes nothing) when the request
    /// is rejected by a guard.
    pub fn request(&mut self, direction: FlipDirection) -> bool {
        let allowed = match direction {
            FlipDirection::Forward => self.can_go_next(),
            FlipDirection::Backward => self.can_go_prev(),
        };
        if !allowed {
            return false;
        }
        self.direction = direction;
        self.swipe_progress = 1.0;
        self.is_flipping = true;
        true
    }

    pub fn request_next(&mut self) -> bool {
        self.request(FlipDirection::Forward)
    }

    pub fn request_prev(&mut self) -> bool {
        self.request(FlipDirection::Backward)
    }

    /// Lands the in-flight flip on the adjacent page. Returns `false` when no
    /// flip was in flight.
    pub fn complete(&mut self) -> bool {
        if !self.is_flipping {
            return false;
        }
        self.current_page = self.target_page();
        self.swipe_progress = 0.0;
        self.is_flipping = false;
        true
    }

    /// Drops an in-flight flip without moving (used when the completion can
    /// no longer be delivered).
    pub fn abort(&mut self) {
        self.is_flipping = false;
        self.swipe_progress = 0.0;
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.is_flipping && self.current_page < self.total_pages
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        !self.is_flipping && self.current_page > 1
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_flipping {
            Phase::Flipping(self.direction)
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.is_flipping && self.swipe_progress == 0.0
    }

    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.total_pages > 0
    }

    #[must_use]
    pub fn is_flipping(&self) -> bool {
        self.is_flipping
    }

    #[must_use]
    pub fn direction(&self) -> FlipDirection {
        self.direction
    }

    #[must_use]
    pub fn swipe_progress(&self) -> f32 {
        self.swipe_progress
    }

    /// Page the in-flight flip lands on, or the page underneath the curl.
    #[must_use]
    pub fn target_page(&self) -> u32 {
        match self.direction {
            FlipDirection::Forward => (self.current_page + 1).min(self.total_pages.max(1)),
            FlipDirection::Backward => self.current_page.saturating_sub(1).max(1),
        }
    }

    /// Rotation of the curling page in degrees.
    #[must_use]
    pub fn curl_angle(&self) -> f32 {
        self.swipe_progress * FULL_CURL_DEGREES
    }

    #[must_use]
    pub fn shadow_opacity(&self) -> f32 {
        self.swipe_progress * MAX_SHADOW_OPACITY
    }

    /// Brightness filter for the current page (1.0 = unchanged).
    #[must_use]
    pub fn brightness(&self) -> f32 {
        1.0 - self.shadow_opacity() * SHADOW_DIMMING
    }

    /// The current page turns its back to the viewer past 90 degrees.
    #[must_use]
    pub fn current_layer_visible(&self) -> bool {
        self.curl_angle() < 90.0
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        if self.is_flipping && self.swipe_progress >= 1.0 {
            Transition::Turning
        } else {
            Transition::Settling
        }
    }
}
