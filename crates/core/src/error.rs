//! Error types for the rules core
//!
//! Normal gameplay outcomes (a tilt that moves nothing, a full board) are
//! encoded in return values. These errors cover caller mistakes only.

/// Errors raised at the grid mutation/access boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Coordinate outside `[0, size)`
    #[error("cell ({col}, {row}) is outside a {size}x{size} grid")]
    OutOfBounds { col: usize, row: usize, size: usize },

    /// Value is zero, not a power of two, or above the maximum tile
    #[error("invalid tile value {value}: tiles must be powers of two >= 2")]
    InvalidTile { value: u32 },

    /// Grid side length outside `[1, MAX_BOARD_SIZE]`
    #[error("invalid grid size {size}")]
    InvalidSize { size: usize },

    /// Tile insertion onto a cell that already holds a tile
    #[error("cell ({col}, {row}) is already occupied")]
    Occupied { col: usize, row: usize },
}

/// Errors raised when validating a [`GameConfig`](crate::GameConfig)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be between 1 and {max}, got {size}")]
    InvalidSize { size: usize, max: usize },

    #[error("target tile must be a power of two >= 4, got {target}")]
    InvalidTarget { target: u32 },

    #[error("four-tile chance must be a percentage, got {percent}")]
    InvalidFourChance { percent: u8 },

    #[error("{tiles} initial tiles do not fit on a board with {cells} cells")]
    TooManyInitialTiles { tiles: usize, cells: usize },
}

/// Result type alias for grid operations
pub type GridResult<T> = Result<T, GridError>;
