//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under stable `tui_2048::{core,input,term,types}`
//! paths. The rules live in `crates/core`; this package adds the terminal
//! runner and its command-line handling.

pub mod cli;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
