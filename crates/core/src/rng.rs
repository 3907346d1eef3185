//! RNG module - random tile placement
//!
//! New tiles go on a uniformly chosen empty cell and are a 4 with a fixed
//! probability, otherwise a 2. Randomness comes from a small seeded LCG so
//! that a game is reproducible from its seed.

use crate::grid::Grid;
use crate::types::FOUR_CHANCE_PERCENT;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// A tile placed by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub col: usize,
    pub row: usize,
    pub value: u32,
}

/// Chooses where new tiles appear and what they are worth
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: SimpleRng,
    four_chance_percent: u8,
}

impl TileSpawner {
    /// Create a spawner with the default 4-tile chance
    pub fn new(seed: u32) -> Self {
        Self::with_four_chance(seed, FOUR_CHANCE_PERCENT)
    }

    /// Create a spawner where a new tile is a 4 with `percent`% probability
    pub fn with_four_chance(seed: u32, percent: u8) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            four_chance_percent: percent.min(100),
        }
    }

    /// Pick the next tile for `grid`, or `None` if the grid is full.
    ///
    /// The grid is not modified; the caller places the tile.
    pub fn next_tile(&mut self, grid: &Grid) -> Option<Spawn> {
        let empty = grid.count_empty();
        if empty == 0 {
            return None;
        }

        let pick = self.rng.next_range(empty as u32) as usize;
        let (col, row) = grid.empty_cells().nth(pick)?;
        let value = if self.rng.next_range(100) < self.four_chance_percent as u32 {
            4
        } else {
            2
        };
        Some(Spawn { col, row, value })
    }

    /// Get the current RNG state (for restarting a game with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}
