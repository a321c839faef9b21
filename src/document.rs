// SPDX-License-Identifier: MPL-2.0
//! Boundary with the external document renderer.
//!
//! The viewer never rasterizes anything itself. It asks the renderer for the
//! page count of a [`DocumentSource`] and, once laid out, orders pages to be
//! drawn at a given width through [`DocumentRenderer::render_page`].

use crate::error::{Error, Result};
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Opaque reference to a bundled menu document (asset path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentSource(String);

impl DocumentSource {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which on-screen layer a page request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayer {
    /// The page currently shown (and curling away while a flip is in flight).
    Current,
    /// The adjacent page revealed underneath during a flip.
    Revealed,
}

/// A single draw order for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    pub layer: PageLayer,
    /// 1-indexed page number.
    pub page: u32,
    /// Target surface width in logical pixels.
    pub width: f32,
}

/// External document renderer.
pub trait DocumentRenderer {
    /// Opens `source` and reports its page count.
    fn load(&self, source: &DocumentSource) -> Result<u32>;

    /// Draws one page layer.
    fn render_page(&mut self, request: PageRequest);
}

/// Renderer backed by a fixed table of page counts.
///
/// Used by the command-line driver and tests; it records every draw order
/// instead of producing pixels.
#[derive(Debug, Default)]
pub struct StaticRenderer {
    page_counts: HashMap<DocumentSource, u32>,
    rendered: Vec<PageRequest>,
}

impl StaticRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `source` as a document with `pages` pages.
    #[must_use]
    pub fn with_document(mut self, source: DocumentSource, pages: u32) -> Self {
        self.page_counts.insert(source, pages);
        self
    }

    /// Draw orders received so far, oldest first.
    #[must_use]
    pub fn rendered(&self) -> &[PageRequest] {
        &self.rendered
    }
}

impl DocumentRenderer for StaticRenderer {
    fn load(&self, source: &DocumentSource) -> Result<u32> {
        self.page_counts
            .get(source)
            .copied()
            .ok_or_else(|| Error::DocumentLoad(format!("unknown document: {source}")))
    }

    fn render_page(&mut self, request: PageRequest) {
        debug!(
            "render {:?} page {} at {:.0}px",
            request.layer, request.page, request.width
        );
        self.rendered.push(request);
    }
}
