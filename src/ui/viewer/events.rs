// SPDX-License-Identifier: MPL-2.0
//! Translation of native Iced events into viewer messages.
//!
//! Iced reports touches one finger at a time, while the gesture recognizer
//! works on the full list of points on the surface. The tracker keeps that
//! list, plus the modifier state needed to tell a zoom wheel from a scroll.

use super::component::Message;
use crate::ui::state::gesture;
use iced::{event, keyboard, mouse, touch, window, Point};

/// Pixels per wheel line, so line-based and pixel-based wheels zoom alike.
const WHEEL_PIXELS_PER_LINE: f32 = 100.0;

#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    /// Active fingers in the order they touched down.
    fingers: Vec<(touch::Finger, Point)>,
    modifiers: keyboard::Modifiers,
}

impl InputTracker {
    /// Maps a native event to a viewer message, or `None` if the viewer does
    /// not care about it.
    pub fn translate(&mut self, event: &event::Event) -> Option<Message> {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::ViewportResized(*size))
            }
            event::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                self.modifiers = *modifiers;
                None
            }
            event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                Some(Message::Gesture(gesture::Message::Wheel {
                    delta_y: wheel_delta_y(delta),
                    zoom_modifier: self.zoom_modifier(),
                }))
            }
            event::Event::Touch(touch_event) => self.translate_touch(touch_event),
            _ => None,
        }
    }

    fn translate_touch(&mut self, event: &touch::Event) -> Option<Message> {
        let message = match *event {
            touch::Event::FingerPressed { id, position } => {
                self.upsert(id, position);
                gesture::Message::TouchStart(self.points())
            }
            touch::Event::FingerMoved { id, position } => {
                self.upsert(id, position);
                gesture::Message::TouchMove(self.points())
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                self.fingers.retain(|(finger, _)| *finger != id);
                gesture::Message::TouchEnd {
                    remaining: self.fingers.len(),
                }
            }
        };
        Some(Message::Gesture(message))
    }

    fn upsert(&mut self, id: touch::Finger, position: Point) {
        match self.fingers.iter_mut().find(|(finger, _)| *finger == id) {
            Some((_, point)) => *point = position,
            None => self.fingers.push((id, position)),
        }
    }

    fn points(&self) -> Vec<Point> {
        self.fingers.iter().map(|(_, point)| *point).collect()
    }

    /// Ctrl on every platform, plus Cmd (logo) for macOS trackpads.
    #[must_use]
    pub fn zoom_modifier(&self) -> bool {
        self.modifiers.control() || self.modifiers.logo()
    }

    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.fingers.len()
    }
}

/// Converts an Iced wheel delta (positive = up) into a DOM-style delta
/// (positive = scroll down) in pixels.
fn wheel_delta_y(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => -*y * WHEEL_PIXELS_PER_LINE,
        mouse::ScrollDelta::Pixels { y, .. } => -*y,
    }
}
