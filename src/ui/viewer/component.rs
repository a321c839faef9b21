// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! One [`Viewer`] presents one document. It composes the flip state machine,
//! the gesture recognizer and the sizer, and it owns the timer of the single
//! flip completion that may be outstanding.
//!
//! # Lifecycle
//!
//! A viewer is alive from [`Viewer::mount`] until [`Viewer::unmount`] (or
//! drop). Unmounting cancels the pending completion and marks the viewer dead;
//! from then on every message is ignored, including a completion ticket that
//! slipped through before the cancellation.

use super::events::InputTracker;
use super::settings::Settings;
use super::timer::{FlipTicket, FlipTimer, ViewerId};
use crate::document::{DocumentSource, PageLayer, PageRequest};
use crate::ui::state::{gesture, FlipDirection, FlipState, FlipbookSize, SizerState, TouchAction};
use iced::{event, Size};
use log::{debug, error, trace};

/// Messages handled by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Previous/next navigation control activated.
    ChangePage(FlipDirection),
    /// A scheduled flip completion came due.
    FlipElapsed(FlipTicket),
    /// The renderer opened the document.
    DocumentLoaded { page_count: u32 },
    /// The renderer could not open the document.
    DocumentFailed(String),
    ViewportResized(Size),
    Gesture(gesture::Message),
    /// Native event, translated through the viewer's input tracker. Hosts
    /// that replace viewers translate at their own level instead, see
    /// [`crate::ui::menu::MenuPage::handle`].
    RawEvent(event::Event),
}

/// Side effects the host should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// A flip was committed; the host should animate towards `target_page`.
    FlipStarted {
        direction: FlipDirection,
        target_page: u32,
    },
    /// A flip landed.
    PageChanged { current_page: u32, total_pages: u32 },
    /// The document is ready for navigation.
    DocumentReady { total_pages: u32 },
    /// The flipbook geometry changed.
    LayoutChanged(FlipbookSize),
    /// A zoom gesture changed the scale; the native default must be suppressed.
    ScaleChanged(f32),
    /// A zoom gesture was consumed without changing the scale; the native
    /// default must still be suppressed.
    InputConsumed,
}

/// Page viewer for one document.
#[derive(Debug)]
pub struct Viewer<T: FlipTimer> {
    id: ViewerId,
    source: DocumentSource,
    settings: Settings,
    flip: FlipState,
    gesture: gesture::State,
    sizer: SizerState,
    input: InputTracker,
    timer: T,
    /// Ticket of the single outstanding flip completion.
    pending: Option<FlipTicket>,
    next_sequence: u64,
    alive: bool,
}

impl<T: FlipTimer> Viewer<T> {
    /// Creates a live viewer for `source`. The document starts unloaded
    /// (`total_pages == 0`) until [`Message::DocumentLoaded`] arrives.
    pub fn mount(
        source: DocumentSource,
        settings: Settings,
        viewport: Option<Size>,
        timer: T,
    ) -> Self {
        let id = ViewerId::next();
        debug!("mount viewer {} for {}", id.value(), source);
        Self {
            id,
            source,
            settings,
            flip: FlipState::default(),
            gesture: gesture::State::new(
                settings.bounds,
                settings.initial_scale,
                settings.pinch_sensitivity,
                settings.wheel_sensitivity,
            ),
            sizer: SizerState::new(viewport),
            input: InputTracker::default(),
            timer,
            pending: None,
            next_sequence: 0,
            alive: true,
        }
    }

    /// Tears the viewer down: cancels the pending completion and stops
    /// accepting messages. Idempotent.
    pub fn unmount(&mut self) {
        if !self.alive {
            return;
        }
        debug!("unmount viewer {}", self.id.value());
        self.alive = false;
        self.cancel_pending();
    }

    /// Handle a viewer message.
    ///
    /// Never fails: rejected intents and stale completions yield
    /// [`Effect::None`].
    pub fn handle(&mut self, msg: Message) -> Effect {
        if !self.alive {
            trace!("viewer {} is unmounted, ignoring {:?}", self.id.value(), msg);
            return Effect::None;
        }

        match msg {
            Message::ChangePage(direction) => self.change_page(direction),
            Message::FlipElapsed(ticket) => self.flip_elapsed(ticket),
            Message::DocumentLoaded { page_count } => {
                self.cancel_pending();
                self.flip.document_loaded(page_count);
                debug!("{} loaded with {} pages", self.source, page_count);
                Effect::DocumentReady {
                    total_pages: page_count,
                }
            }
            Message::DocumentFailed(reason) => {
                error!("failed to load {}: {}", self.source, reason);
                Effect::None
            }
            Message::ViewportResized(size) => {
                if self.sizer.on_resize(size) {
                    Effect::LayoutChanged(self.sizer.size())
                } else {
                    Effect::None
                }
            }
            Message::Gesture(gesture_msg) => match self.gesture.handle(gesture_msg) {
                gesture::Effect::PassThrough => Effect::None,
                gesture::Effect::Consumed => Effect::InputConsumed,
                gesture::Effect::ScaleChanged(scale) => Effect::ScaleChanged(scale),
            },
            Message::RawEvent(event) => match self.input.translate(&event) {
                Some(translated) => self.handle(translated),
                None => Effect::None,
            },
        }
    }

    fn change_page(&mut self, direction: FlipDirection) -> Effect {
        // A pending ticket means a completion is still owed, even if the
        // state machine would allow another request.
        if self.pending.is_some() || !self.flip.request(direction) {
            trace!(
                "viewer {} rejected {:?} on page {}/{}",
                self.id.value(),
                direction,
                self.flip.current_page(),
                self.flip.total_pages()
            );
            return Effect::None;
        }

        let ticket = FlipTicket {
            viewer: self.id,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.pending = Some(ticket);
        self.timer
            .schedule(ticket, self.settings.flip_duration.as_duration());

        let target_page = self.flip.target_page();
        debug!(
            "viewer {} flipping {:?} to page {}",
            self.id.value(),
            direction,
            target_page
        );
        Effect::FlipStarted {
            direction,
            target_page,
        }
    }

    fn flip_elapsed(&mut self, ticket: FlipTicket) -> Effect {
        if self.pending != Some(ticket) {
            trace!(
                "viewer {} ignoring stale ticket {:?}",
                self.id.value(),
                ticket
            );
            return Effect::None;
        }
        self.pending = None;

        if self.flip.complete() {
            Effect::PageChanged {
                current_page: self.flip.current_page(),
                total_pages: self.flip.total_pages(),
            }
        } else {
            Effect::None
        }
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            self.timer.cancel();
            self.flip.abort();
        }
    }

    /// Draw orders for the current frame: the current page, plus the page
    /// revealed underneath while a flip is animating. Empty until loaded.
    #[must_use]
    pub fn render_plan(&self) -> Vec<PageRequest> {
        if !self.flip.is_loaded() {
            return Vec::new();
        }
        let width = self.render_width();
        let mut plan = vec![PageRequest {
            layer: PageLayer::Current,
            page: self.flip.current_page(),
            width,
        }];
        if self.flip.swipe_progress() > 0.0 {
            plan.push(PageRequest {
                layer: PageLayer::Revealed,
                page: self.flip.target_page(),
                width,
            });
        }
        plan
    }

    /// `"current / total"`, or `None` while the document is still loading.
    #[must_use]
    pub fn page_indicator(&self) -> Option<String> {
        self.flip.is_loaded().then(|| {
            format!(
                "{} / {}",
                self.flip.current_page(),
                self.flip.total_pages()
            )
        })
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.alive && self.pending.is_none() && self.flip.can_go_prev()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.alive && self.pending.is_none() && self.flip.can_go_next()
    }

    /// Whether the loading placeholder should be shown instead of pages.
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        !self.flip.is_loaded()
    }

    #[must_use]
    pub fn render_width(&self) -> f32 {
        self.sizer.render_width(self.gesture.scale())
    }

    #[must_use]
    pub fn id(&self) -> ViewerId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn flip(&self) -> &FlipState {
        &self.flip
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.gesture.scale()
    }

    #[must_use]
    pub fn touch_action(&self) -> TouchAction {
        self.gesture.touch_action()
    }

    #[must_use]
    pub fn size(&self) -> FlipbookSize {
        self.sizer.size()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn pending_ticket(&self) -> Option<FlipTicket> {
        self.pending
    }

    #[must_use]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}

impl<T: FlipTimer> Drop for Viewer<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}
