// SPDX-License-Identifier: MPL-2.0
//! Menu page: tab selection between the food and beverage documents.
//!
//! Every tab selection builds a brand-new [`Viewer`]. The previous viewer is
//! unmounted first, so its pending flip completion is cancelled before the new
//! instance exists and the two never share state.
//!
//! Native events are translated here rather than in the viewer: modifier keys
//! and fingers belong to the window, and a key held across a tab switch must
//! still count for the next viewer.

use crate::document::{DocumentRenderer, DocumentSource};
use crate::error::Error;
use crate::ui::viewer::events::InputTracker;
use crate::ui::viewer::{self, Effect, FlipTimer, Settings, Viewer};
use iced::Size;
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

/// Menu documents offered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuTab {
    #[default]
    Food,
    Beverage,
}

impl MenuTab {
    pub const ALL: [MenuTab; 2] = [MenuTab::Food, MenuTab::Beverage];

    /// Heading shown above the viewer.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            MenuTab::Food => "Food Menu",
            MenuTab::Beverage => "Beverage Menu",
        }
    }

    /// Label of the tab button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuTab::Food => "Food",
            MenuTab::Beverage => "Beverages",
        }
    }

    /// Bundled document presented by this tab.
    #[must_use]
    pub fn source(self) -> DocumentSource {
        match self {
            MenuTab::Food => DocumentSource::new("assets/menu/food.pdf"),
            MenuTab::Beverage => DocumentSource::new("assets/menu/drinks.pdf"),
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            MenuTab::Food => "food",
            MenuTab::Beverage => "beverage",
        }
    }
}

impl fmt::Display for MenuTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MenuTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Some(tab) = MenuTab::ALL.into_iter().find(|tab| tab.key() == key) {
            return Ok(tab);
        }
        match key.as_str() {
            "beverages" | "drinks" => Ok(MenuTab::Beverage),
            other => Err(Error::InvalidArgument(format!("unknown menu tab: {other}"))),
        }
    }
}

/// The menu page with its single active viewer.
pub struct MenuPage<T: FlipTimer> {
    active: MenuTab,
    viewer: Viewer<T>,
    settings: Settings,
    viewport: Option<Size>,
    input: InputTracker,
    make_timer: Box<dyn FnMut() -> T>,
}

impl<T: FlipTimer> MenuPage<T> {
    /// Opens the page on the food tab. `make_timer` supplies the flip timer
    /// of every viewer the page creates.
    pub fn new(
        settings: Settings,
        viewport: Option<Size>,
        mut make_timer: impl FnMut() -> T + 'static,
    ) -> Self {
        let active = MenuTab::default();
        let viewer = Viewer::mount(active.source(), settings, viewport, make_timer());
        Self {
            active,
            viewer,
            settings,
            viewport,
            input: InputTracker::default(),
            make_timer: Box::new(make_timer),
        }
    }

    /// Switches to `tab`. Returns `false` if it was already active.
    ///
    /// The new viewer starts unloaded; call [`MenuPage::load_active`] next.
    pub fn select_tab(&mut self, tab: MenuTab) -> bool {
        if tab == self.active {
            return false;
        }
        debug!("switching menu tab {} -> {}", self.active, tab);
        self.viewer.unmount();
        let timer = (self.make_timer)();
        // The old, already unmounted viewer is dropped here.
        self.viewer = Viewer::mount(tab.source(), self.settings, self.viewport, timer);
        self.active = tab;
        true
    }

    /// Asks the renderer for the active document and feeds the outcome to
    /// the viewer.
    pub fn load_active<R: DocumentRenderer>(&mut self, renderer: &R) -> Effect {
        let message = match renderer.load(self.viewer.source()) {
            Ok(page_count) => viewer::Message::DocumentLoaded { page_count },
            Err(err) => viewer::Message::DocumentFailed(err.to_string()),
        };
        self.viewer.handle(message)
    }

    /// Routes a message to the active viewer.
    ///
    /// Raw events go through the page's input tracker first. Flip completions
    /// issued by a viewer that has since been replaced are dropped here.
    pub fn handle(&mut self, msg: viewer::Message) -> Effect {
        let msg = match msg {
            viewer::Message::RawEvent(event) => match self.input.translate(&event) {
                Some(translated) => translated,
                None => return Effect::None,
            },
            other => other,
        };
        match &msg {
            viewer::Message::FlipElapsed(ticket) if ticket.viewer != self.viewer.id() => {
                trace!("dropping ticket of replaced viewer {}", ticket.viewer.value());
                return Effect::None;
            }
            viewer::Message::ViewportResized(size) => {
                self.viewport = Some(*size);
            }
            _ => {}
        }
        self.viewer.handle(msg)
    }

    /// Sends the current draw orders to the renderer.
    pub fn render<R: DocumentRenderer>(&self, renderer: &mut R) {
        for request in self.viewer.render_plan() {
            renderer.render_page(request);
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> MenuTab {
        self.active
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.active.title()
    }

    #[must_use]
    pub fn viewer(&self) -> &Viewer<T> {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut Viewer<T> {
        &mut self.viewer
    }
}
