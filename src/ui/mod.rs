// SPDX-License-Identifier: MPL-2.0
//! User interface state and update logic.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles messages, and reports effects to its host.
//!
//! - [`menu`] - Food/beverage tab selection, one viewer per selection
//! - [`viewer`] - Page viewer with flip navigation and zoom gestures
//! - [`state`] - Display-independent state machines (flip, gesture, sizing)

pub mod menu;
pub mod state;
pub mod viewer;
