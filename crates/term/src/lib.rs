//! Terminal "game renderer" module.
//!
//! Renders the board into a simple framebuffer that is then flushed to a
//! terminal backend. Keeping the view pure means `core` stays deterministic
//! and the drawing code can be tested without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
