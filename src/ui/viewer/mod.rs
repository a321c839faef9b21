// SPDX-License-Identifier: MPL-2.0
//! Document page viewer: flip navigation, zoom gestures and layout for one
//! menu document.
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── state::flip     - Page-turn state machine
//!     ├── state::gesture  - Pinch and wheel zoom
//!     ├── state::sizer    - Responsive geometry
//!     ├── events          - Native Iced event translation
//!     └── timer           - Cancellable flip completion
//! ```

pub mod component;
pub mod events;
pub mod settings;
pub mod timer;

pub use component::{Effect, Message, Viewer};
pub use settings::Settings;
pub use timer::{FlipTicket, FlipTimer, ManualFlipTimer, TokioFlipTimer, ViewerId};
