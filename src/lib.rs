// SPDX-License-Identifier: MPL-2.0
//! `menu_flipbook` drives the page-flip viewer used to present restaurant menu
//! documents (food and beverage).
//!
//! The crate owns the interaction engine only: the page-turn state machine,
//! pinch and wheel zoom recognition, responsive sizing, and the lifecycle that
//! keeps deferred flip completions from touching a torn-down viewer. Document
//! rasterization is an external collaborator reached through
//! [`document::DocumentRenderer`].

pub mod config;
pub mod document;
pub mod error;
pub mod script;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
