// SPDX-License-Identifier: MPL-2.0
//! Scripted interaction for the command-line driver.
//!
//! Each command-line action maps to either a viewer intent or a burst of
//! native Iced events, so the driver exercises the same input path as a
//! windowed host.

use crate::error::{Error, Result};
use crate::ui::menu::MenuTab;
use iced::{event, keyboard, mouse, touch, Point, Size};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Next,
    Prev,
    /// Let the runtime run for a fixed time, delivering completions as they
    /// come due.
    Wait(Duration),
    /// Wait until the active viewer has no flip outstanding.
    Settle,
    Tab(MenuTab),
    Resize(Size),
    /// Two-finger pinch passing through the listed finger distances.
    Pinch(Vec<f32>),
    /// Wheel with the zoom modifier held. DOM convention: positive scrolls
    /// down.
    Wheel(f32),
    /// Wheel without modifier.
    Scroll(f32),
}

impl Action {
    /// Native events that reproduce this action, empty for actions that are
    /// not raw input.
    #[must_use]
    pub fn input_events(&self) -> Vec<event::Event> {
        match self {
            Action::Pinch(distances) => pinch_events(distances),
            Action::Wheel(delta_y) => vec![
                modifiers(keyboard::Modifiers::CTRL),
                wheel(*delta_y),
                modifiers(keyboard::Modifiers::default()),
            ],
            Action::Scroll(delta_y) => vec![wheel(*delta_y)],
            _ => Vec::new(),
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let value = || arg.ok_or_else(|| Error::InvalidArgument(format!("{name} needs a value")));

        match name {
            "next" => Ok(Action::Next),
            "prev" => Ok(Action::Prev),
            "settle" => Ok(Action::Settle),
            "wait" => {
                let millis = value()?
                    .parse::<u64>()
                    .map_err(|err| Error::InvalidArgument(format!("wait: {err}")))?;
                Ok(Action::Wait(Duration::from_millis(millis)))
            }
            "tab" => Ok(Action::Tab(value()?.parse()?)),
            "resize" => Ok(Action::Resize(parse_size(value()?)?)),
            "pinch" => {
                let distances = value()?
                    .split(',')
                    .map(parse_f32)
                    .collect::<Result<Vec<_>>>()?;
                if distances.len() < 2 {
                    return Err(Error::InvalidArgument(
                        "pinch needs at least two distances".to_string(),
                    ));
                }
                Ok(Action::Pinch(distances))
            }
            "wheel" => Ok(Action::Wheel(parse_f32(value()?)?)),
            "scroll" => Ok(Action::Scroll(parse_f32(value()?)?)),
            other => Err(Error::InvalidArgument(format!("unknown action: {other}"))),
        }
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `1280x900`.
pub fn parse_size(s: &str) -> Result<Size> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| Error::InvalidArgument(format!("expected WxH, got {s}")))?;
    let width = parse_f32(width)?;
    let height = parse_f32(height)?;
    if width <= 0.0 || height <= 0.0 {
        return Err(Error::InvalidArgument(format!("viewport must be positive: {s}")));
    }
    Ok(Size::new(width, height))
}

fn parse_f32(s: &str) -> Result<f32> {
    let value = s
        .trim()
        .parse::<f32>()
        .map_err(|err| Error::InvalidArgument(format!("{s}: {err}")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(format!("{s} is not finite")))
    }
}

fn pinch_events(distances: &[f32]) -> Vec<event::Event> {
    let Some((first, rest)) = distances.split_first() else {
        return Vec::new();
    };
    let at = |x: f32| Point::new(x, 0.0);
    let mut events = vec![
        event::Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: at(0.0),
        }),
        event::Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(2),
            position: at(*first),
        }),
    ];
    events.extend(rest.iter().map(|distance| {
        event::Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(2),
            position: at(*distance),
        })
    }));
    let last = distances.last().copied().unwrap_or(*first);
    events.push(event::Event::Touch(touch::Event::FingerLifted {
        id: touch::Finger(2),
        position: at(last),
    }));
    events.push(event::Event::Touch(touch::Event::FingerLifted {
        id: touch::Finger(1),
        position: at(0.0),
    }));
    events
}

fn modifiers(modifiers: keyboard::Modifiers) -> event::Event {
    event::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers))
}

fn wheel(delta_y: f32) -> event::Event {
    // Iced reports upward scrolling as positive
    event::Event::Mouse(mouse::Event::WheelScrolled {
        delta: mouse::ScrollDelta::Pixels { x: 0.0, y: -delta_y },
    })
}
