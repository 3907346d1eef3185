//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Cells are addressed as `(col, row)`:
//!
//! - **col** grows left to right (0 is the west edge)
//! - **row** grows bottom to top (0 is the south edge)
//!
//! # Board and Tile Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 4 | Side length of a standard board |
//! | `MAX_BOARD_SIZE` | 16 | Largest supported side length |
//! | `MAX_PIECE` | 2048 | Default winning tile |
//! | `MAX_TILE_VALUE` | 2^30 | Largest value a cell may hold |
//! | `FOUR_CHANCE_PERCENT` | 10 | Chance a spawned tile is a 4 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, is_valid_tile};
//!
//! // Parse a direction (case-insensitive, full name or initial)
//! let dir = Direction::from_str("n").unwrap();
//! assert_eq!(dir, Direction::North);
//! assert_eq!(dir.opposite(), Direction::South);
//!
//! // Parse a game action
//! let action = GameAction::from_str("tiltWest").unwrap();
//! assert_eq!(action, GameAction::Tilt(Direction::West));
//!
//! // Tile values are powers of two >= 2
//! assert!(is_valid_tile(8));
//! assert!(!is_valid_tile(6));
//! ```

/// Side length of a standard board (4x4)
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest supported board side length
///
/// Lines are processed in fixed-capacity buffers of this length.
pub const MAX_BOARD_SIZE: usize = 16;

/// Default winning tile value
pub const MAX_PIECE: u32 = 2048;

/// Largest value a single cell may hold (2^30)
///
/// Two tiles of this value never merge, so a tilt cannot push a cell past it.
pub const MAX_TILE_VALUE: u32 = 1 << 30;

/// Chance (in percent) that a newly spawned tile is a 4 instead of a 2
pub const FOUR_CHANCE_PERCENT: u8 = 10;

/// Number of tiles placed on an empty board when a game starts
pub const INITIAL_TILES: usize = 2;

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(value)`: Tile holding `value` (a power of two >= 2)
pub type Cell = Option<u32>;

/// Check whether `value` may be stored on the board.
///
/// # Examples
///
/// ```
/// use tui_2048_types::{is_valid_tile, MAX_TILE_VALUE};
///
/// assert!(is_valid_tile(2));
/// assert!(is_valid_tile(MAX_TILE_VALUE));
/// assert!(!is_valid_tile(0));
/// assert!(!is_valid_tile(1));
/// assert!(!is_valid_tile(12));
/// ```
pub fn is_valid_tile(value: u32) -> bool {
    value >= 2 && value.is_power_of_two() && value <= MAX_TILE_VALUE
}

/// The four tilt directions
///
/// The direction names the wall tiles move toward:
/// - **North**: toward the top row (`row = size - 1`)
/// - **South**: toward the bottom row (`row = 0`)
/// - **East**: toward the rightmost column (`col = size - 1`)
/// - **West**: toward the leftmost column (`col = 0`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order starting at North
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction pointing at the opposite wall
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::North.opposite(), Direction::South);
    /// assert_eq!(Direction::East.opposite(), Direction::West);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// True for North/South, whose lines are columns
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "east" | "e" => Some(Direction::East),
            "south" | "s" => Some(Direction::South),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

/// Game actions that can be applied to a running game
///
/// Produced by the input layer and consumed by `GameState::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Tilt the board toward a wall
    Tilt(Direction),
    /// Clear the board and start over (keeps the best score)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("tiltNorth"), Some(GameAction::Tilt(Direction::North)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tiltnorth" => Some(GameAction::Tilt(Direction::North)),
            "tilteast" => Some(GameAction::Tilt(Direction::East)),
            "tiltsouth" => Some(GameAction::Tilt(Direction::South)),
            "tiltwest" => Some(GameAction::Tilt(Direction::West)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Tilt(Direction::North) => "tiltNorth",
            GameAction::Tilt(Direction::East) => "tiltEast",
            GameAction::Tilt(Direction::South) => "tiltSouth",
            GameAction::Tilt(Direction::West) => "tiltWest",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(DEFAULT_BOARD_SIZE, 4);
        assert_eq!(MAX_PIECE, 2048);
        assert!(is_valid_tile(MAX_PIECE));
        assert!(MAX_BOARD_SIZE >= DEFAULT_BOARD_SIZE);
        assert!(FOUR_CHANCE_PERCENT <= 100);
    }

    #[test]
    fn direction_roundtrips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
        assert_eq!(Direction::from_str("up"), None);
    }

    #[test]
    fn vertical_directions() {
        assert!(Direction::North.is_vertical());
        assert!(Direction::South.is_vertical());
        assert!(!Direction::East.is_vertical());
        assert!(!Direction::West.is_vertical());
    }

    #[test]
    fn action_names() {
        for dir in Direction::ALL {
            let action = GameAction::Tilt(dir);
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::Restart.as_str(), "restart");
    }

    #[test]
    fn tile_validation_rejects_out_of_range() {
        assert!(!is_valid_tile(MAX_TILE_VALUE * 2));
        assert!(!is_valid_tile(u32::MAX));
        assert!(is_valid_tile(4));
    }
}
