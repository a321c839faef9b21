// SPDX-License-Identifier: MPL-2.0
//! Responsive flipbook sizing.
//!
//! The flipbook geometry is a pure function of the viewport dimensions. The
//! viewport is always passed in explicitly so the computation can run without
//! a display surface.

use iced::Size;

/// Horizontal breakpoint below which the layout is considered narrow (phones).
const NARROW_BREAKPOINT: f32 = 640.0;
/// Horizontal breakpoint below which the layout is considered medium (tablets).
const MEDIUM_BREAKPOINT: f32 = 1024.0;

const WIDE_MAX_WIDTH: f32 = 850.0;
const WIDE_MAX_HEIGHT: f32 = 1100.0;
const MEDIUM_MAX_WIDTH: f32 = 800.0;
const MEDIUM_MAX_HEIGHT: f32 = 1000.0;

/// Horizontal gutter on narrow and wide layouts.
const GUTTER: f32 = 32.0;
/// Horizontal gutter on medium layouts.
const MEDIUM_GUTTER: f32 = 64.0;
/// Vertical space reserved for page chrome (header, tabs, nav controls).
const WIDE_CHROME_HEIGHT: f32 = 200.0;
const COMPACT_CHROME_HEIGHT: f32 = 220.0;

const MIN_WIDTH: f32 = 380.0;
const MIN_HEIGHT: f32 = 500.0;

const NARROW_PAGE_RATIO: f32 = 0.95;
const WIDE_PAGE_RATIO: f32 = 0.55;

/// Pages are drawn slightly wider than the nominal page column.
const RENDER_WIDTH_FACTOR: f32 = 1.2;

/// Flipbook geometry in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipbookSize {
    pub width: f32,
    pub height: f32,
    pub page_width: f32,
}

impl Default for FlipbookSize {
    /// Geometry used before the first viewport report.
    fn default() -> Self {
        Self {
            width: 650.0,
            height: 900.0,
            page_width: 520.0,
        }
    }
}

/// Computes the flipbook geometry for a viewport.
#[must_use]
pub fn compute_size(viewport: Size) -> FlipbookSize {
    let vw = viewport.width;
    let vh = viewport.height;

    let (width, height) = if vw < NARROW_BREAKPOINT {
        (vw - GUTTER, vh - COMPACT_CHROME_HEIGHT)
    } else if vw < MEDIUM_BREAKPOINT {
        (
            MEDIUM_MAX_WIDTH.min(vw - MEDIUM_GUTTER),
            MEDIUM_MAX_HEIGHT.min(vh - COMPACT_CHROME_HEIGHT),
        )
    } else {
        (
            WIDE_MAX_WIDTH.min(vw - GUTTER),
            WIDE_MAX_HEIGHT.min(vh - WIDE_CHROME_HEIGHT),
        )
    };

    // Derived from the width before the minimum floor is applied.
    let page_width = if vw < NARROW_BREAKPOINT {
        width * NARROW_PAGE_RATIO
    } else {
        width * WIDE_PAGE_RATIO
    };

    FlipbookSize {
        width: width.max(MIN_WIDTH),
        height: height.max(MIN_HEIGHT),
        page_width,
    }
}

/// Last known viewport and the geometry derived from it.
#[derive(Debug, Clone, Default)]
pub struct SizerState {
    viewport: Option<Size>,
    size: FlipbookSize,
}

impl SizerState {
    /// Creates a sizer, computing the geometry right away when the viewport
    /// is already known.
    #[must_use]
    pub fn new(viewport: Option<Size>) -> Self {
        let mut state = Self::default();
        if let Some(viewport) = viewport {
            state.on_resize(viewport);
        }
        state
    }

    /// Recomputes the geometry. Returns `true` if it changed.
    pub fn on_resize(&mut self, viewport: Size) -> bool {
        self.viewport = Some(viewport);
        let size = compute_size(viewport);
        let changed = size != self.size;
        self.size = size;
        changed
    }

    #[must_use]
    pub fn size(&self) -> FlipbookSize {
        self.size
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// Width at which page surfaces should be rendered for `scale`.
    ///
    /// Never wider than the viewport minus its gutter, scaled the same way.
    #[must_use]
    pub fn render_width(&self, scale: f32) -> f32 {
        let nominal = self.size.page_width * RENDER_WIDTH_FACTOR * scale;
        match self.viewport {
            Some(viewport) => nominal.min((viewport.width - GUTTER) * scale),
            None => nominal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn wide_viewport_caps_width_and_height() {
        let size = compute_size(Size::new(1920.0, 1400.0));
        assert_abs_diff_eq!(size.width, 850.0);
        assert_abs_diff_eq!(size.height, 1100.0);
        assert_abs_diff_eq!(size.page_width, 467.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn wide_viewport_uses_200px_chrome_allowance() {
        let size = compute_size(Size::new(1280.0, 900.0));
        assert_abs_diff_eq!(size.width, 850.0);
        assert_abs_diff_eq!(size.height, 700.0);
    }

    #[test]
    fn medium_viewport_uses_larger_gutter() {
        let size = compute_size(Size::new(800.0, 1000.0));
        assert_abs_diff_eq!(size.width, 736.0);
        assert_abs_diff_eq!(size.height, 780.0);
        assert_abs_diff_eq!(size.page_width, 736.0 * 0.55, epsilon = F32_EPSILON);
    }

    #[test]
    fn medium_viewport_caps_at_800_by_1000() {
        let size = compute_size(Size::new(1000.0, 1600.0));
        assert_abs_diff_eq!(size.width, 800.0);
        assert_abs_diff_eq!(size.height, 1000.0);
    }

    #[test]
    fn narrow_viewport_fills_width() {
        let size = compute_size(Size::new(600.0, 900.0));
        assert_abs_diff_eq!(size.width, 568.0);
        assert_abs_diff_eq!(size.height, 680.0);
        assert_abs_diff_eq!(size.page_width, 568.0 * 0.95, epsilon = F32_EPSILON);
    }

    #[test]
    fn tiny_viewport_is_floored_but_page_width_is_not() {
        let size = compute_size(Size::new(360.0, 640.0));
        assert_abs_diff_eq!(size.width, 380.0);
        assert_abs_diff_eq!(size.height, 500.0);
        // 328 * 0.95, computed before the floor
        assert_abs_diff_eq!(size.page_width, 311.6, epsilon = 1e-3);
    }

    #[test]
    fn sizer_starts_with_default_geometry() {
        let sizer = SizerState::new(None);
        assert_eq!(sizer.size(), FlipbookSize::default());
        assert!(sizer.viewport().is_none());
    }

    #[test]
    fn on_resize_reports_changes_only() {
        let mut sizer = SizerState::new(Some(Size::new(1280.0, 900.0)));
        assert!(!sizer.on_resize(Size::new(1280.0, 900.0)));
        assert!(sizer.on_resize(Size::new(600.0, 900.0)));
        assert_abs_diff_eq!(sizer.size().width, 568.0);
    }

    #[test]
    fn render_width_is_limited_by_viewport() {
        let sizer = SizerState::new(Some(Size::new(1920.0, 1400.0)));
        // 467.5 * 1.2 * 2.0 = 1122 < (1920 - 32) * 2.0
        assert_abs_diff_eq!(sizer.render_width(2.0), 1122.0, epsilon = 1e-3);

        let narrow = SizerState::new(Some(Size::new(400.0, 800.0)));
        // 368 * 0.95 * 1.2 = 419.52 > 400 - 32 = 368
        assert_abs_diff_eq!(narrow.render_width(1.0), 368.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn render_width_without_viewport_uses_page_column() {
        let sizer = SizerState::new(None);
        assert_abs_diff_eq!(sizer.render_width(1.0), 624.0, epsilon = 1e-3);
    }
}
