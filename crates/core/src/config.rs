//! Game configuration
//!
//! Everything a new game needs to know up front. Defaults give the classic
//! 4x4 board played to 2048.

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_BOARD_SIZE, FOUR_CHANCE_PERCENT, INITIAL_TILES, MAX_BOARD_SIZE, MAX_PIECE,
    MAX_TILE_VALUE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Cells per side
    pub size: usize,
    /// Reaching a tile of at least this value ends the game as a win
    pub target_tile: u32,
    /// Seed for tile placement
    pub seed: u32,
    /// Tiles placed when a game starts
    pub initial_tiles: usize,
    /// Chance that a spawned tile is a 4
    pub four_chance_percent: u8,
}

impl GameConfig {
    /// Default configuration with a different board size
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidSize {
                size: self.size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.target_tile < 4 || !self.target_tile.is_power_of_two() || self.target_tile > MAX_TILE_VALUE {
            return Err(ConfigError::InvalidTarget {
                target: self.target_tile,
            });
        }
        if self.four_chance_percent > 100 {
            return Err(ConfigError::InvalidFourChance {
                percent: self.four_chance_percent,
            });
        }
        let cells = self.size * self.size;
        if self.initial_tiles > cells {
            return Err(ConfigError::TooManyInitialTiles {
                tiles: self.initial_tiles,
                cells,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            target_tile: MAX_PIECE,
            seed: 1,
            initial_tiles: INITIAL_TILES,
            four_chance_percent: FOUR_CHANCE_PERCENT,
        }
    }
}
