//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the sliding-tile merge puzzle (2048).
//! It has **no dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function over a [`Grid`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: N x N tile storage with checked access
//! - [`tilt`]: The tilt engine: slide and merge every line toward one wall
//! - [`rules`]: Game-over predicates (`has_max_tile`, `has_any_move`)
//! - [`game_state`]: Score, best score, random tiles, game lifecycle
//! - [`rng`]: Seeded tile placement
//! - [`config`]: Board size, target tile, seed
//!
//! # Game Rules
//!
//! - A tilt slides every tile as far as it goes toward the chosen wall
//! - Two equal tiles pushed together merge into one tile of twice the value,
//!   and the new value is added to the score
//! - A tile produced by a merge does not merge again in the same tilt
//! - With three equal tiles in a line, the two nearest the wall merge
//! - After a tilt that changed the board, a 2 (90%) or 4 (10%) appears on a
//!   random empty cell
//! - The game ends when a tile reaches the target or no tilt can change the board
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{tilt, Grid};
//! use tui_2048_core::types::Direction;
//!
//! let grid = Grid::from_rows(&[
//!     [2, 2, 2, 2],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ]).unwrap();
//!
//! let out = tilt(&grid, Direction::West);
//! assert_eq!(out.score_delta, 8);
//! assert_eq!(out.grid.get(0, 3), Ok(Some(4)));
//! assert_eq!(out.grid.get(1, 3), Ok(Some(4)));
//! assert_eq!(out.grid.get(2, 3), Ok(None));
//!
//! // The input grid is untouched.
//! assert_eq!(grid.get(3, 3), Ok(Some(2)));
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod tilt;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{ConfigError, GridError, GridResult};
pub use game_state::GameState;
pub use grid::Grid;
pub use rng::{SimpleRng, Spawn, TileSpawner};
pub use rules::{has_any_move, has_max_tile, is_game_over};
pub use snapshot::GameSnapshot;
pub use tilt::{line_position, slide_line, tilt, TiltOutcome};
