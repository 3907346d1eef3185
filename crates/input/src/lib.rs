//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. A tilt is a
//! single discrete action, so there is no auto-repeat handling: terminal key
//! repeat events are ignored by the caller and every press is one tilt.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
