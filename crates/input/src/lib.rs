//! Terminal input module (engine-facing).
//!
//! Does not depend on the simulation. Maps
//! `crossterm` key events into [`crate::types::Control`]s and folds them into
//! per-frame [`crate::types::Intents`], including on terminals that never
//! report key releases.

pub mod handler;
pub mod map;

pub use tui_raycaster_types as types;

pub use handler::IntentTracker;
pub use map::{map_key, should_quit};
