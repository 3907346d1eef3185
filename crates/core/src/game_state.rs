//! Game state module - the caller side of the rules core
//!
//! `GameState` holds the board together with everything the pure tilt
//! engine leaves to its caller: score and best score, random tile
//! placement after a successful tilt, and the game-over flag, which is
//! recomputed from the grid after every mutation.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::GameConfig;
use crate::error::{ConfigError, GridError, GridResult};
use crate::grid::Grid;
use crate::rng::{Spawn, TileSpawner};
use crate::rules::{has_max_tile, is_game_over};
use crate::snapshot::GameSnapshot;
use crate::tilt::tilt;
use crate::types::{Direction, GameAction};

/// Complete game state
///
/// Two states compare equal when their grid, score, best score and
/// game-over flag match. Counters, config and RNG position are ignored.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    spawner: TileSpawner,
    score: u64,
    /// Best score seen so far; updated when a game ends.
    max_score: u64,
    /// Score gained by the most recent tilt.
    last_score_delta: u64,
    game_over: bool,
    started: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Tilts that changed the board in the current episode.
    moves: u32,
}

impl GameState {
    /// Create a new 4x4 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let config = GameConfig {
            seed,
            ..GameConfig::default()
        };
        Self::from_parts(config, Grid::default())
    }

    /// Create a game from a validated configuration
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.size).map_err(|_| ConfigError::InvalidSize {
            size: config.size,
            max: crate::types::MAX_BOARD_SIZE,
        })?;
        Ok(Self::from_parts(config, grid))
    }

    /// Resume a game from a known position.
    ///
    /// The game counts as started and `game_over` is taken as given, not
    /// recomputed. Tile placement uses the default seed.
    pub fn from_grid(grid: Grid, score: u64, max_score: u64, game_over: bool) -> Self {
        let config = GameConfig::with_size(grid.size());
        let mut state = Self::from_parts(config, grid);
        state.score = score;
        state.max_score = max_score;
        state.game_over = game_over;
        state.started = true;
        state
    }

    fn from_parts(config: GameConfig, grid: Grid) -> Self {
        Self {
            spawner: TileSpawner::with_four_chance(config.seed, config.four_chance_percent),
            config,
            grid,
            score: 0,
            max_score: 0,
            last_score_delta: 0,
            game_over: false,
            started: false,
            episode_id: 0,
            moves: 0,
        }
    }

    /// Start the game and place the initial tiles
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_initial_tiles();
        log::debug!(
            "game started: episode={} size={} seed={}",
            self.episode_id,
            self.grid.size(),
            self.config.seed
        );
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// True if a tile has reached the configured target
    pub fn won(&self) -> bool {
        has_max_tile(&self.grid, self.config.target_tile)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    pub fn last_score_delta(&self) -> u64 {
        self.last_score_delta
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Size of one side of the board
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        out.score = self.score;
        out.max_score = self.max_score;
        out.last_score_delta = self.last_score_delta;
        out.target_tile = self.config.target_tile;
        out.game_over = self.game_over;
        out.won = self.won();
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.seed = self.spawner.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Empty the board and reset the score. The best score is kept.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.last_score_delta = 0;
        self.moves = 0;
        self.game_over = false;
    }

    /// Place a tile on an empty cell
    pub fn add_tile(&mut self, col: usize, row: usize, value: u32) -> GridResult<()> {
        if self.grid.get(col, row)?.is_some() {
            log::warn!("rejected tile {} at occupied cell ({}, {})", value, col, row);
            return Err(GridError::Occupied { col, row });
        }
        self.grid.set(col, row, Some(value))?;
        self.check_game_over();
        Ok(())
    }

    /// Place a random tile on a random empty cell
    ///
    /// Returns the placed tile, or `None` if the board is full.
    pub fn spawn_tile(&mut self) -> Option<Spawn> {
        let spawn = self.spawner.next_tile(&self.grid)?;
        self.grid.put(spawn.col, spawn.row, Some(spawn.value));
        log::debug!("spawned {} at ({}, {})", spawn.value, spawn.col, spawn.row);
        self.check_game_over();
        Some(spawn)
    }

    fn spawn_initial_tiles(&mut self) {
        for _ in 0..self.config.initial_tiles {
            if self.spawn_tile().is_none() {
                break;
            }
        }
    }

    /// Tilt the board toward `direction`. Returns true iff the board changed.
    ///
    /// Adds the merge score and re-evaluates game over. No tile is spawned;
    /// see [`apply_action`](Self::apply_action) for a full turn.
    pub fn tilt(&mut self, direction: Direction) -> bool {
        let outcome = tilt(&self.grid, direction);
        self.last_score_delta = outcome.score_delta;
        if outcome.changed {
            self.grid = outcome.grid;
            self.score += outcome.score_delta;
        }
        self.check_game_over();
        outcome.changed
    }

    /// Apply a game action
    ///
    /// A tilt that changes the board is followed by one random tile. Tilts
    /// are ignored once the game is over or before it has started.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Tilt(direction) => {
                if !self.started || self.game_over {
                    return false;
                }
                let changed = self.tilt(direction);
                if changed {
                    self.moves += 1;
                    self.spawn_tile();
                }
                changed
            }
            GameAction::Restart => {
                self.clear();
                self.episode_id = self.episode_id.wrapping_add(1);
                self.started = true;
                self.spawn_initial_tiles();
                log::debug!("game restarted: episode={}", self.episode_id);
                true
            }
        }
    }

    fn check_game_over(&mut self) {
        let over = is_game_over(&self.grid, self.config.target_tile);
        if over && !self.game_over {
            log::debug!(
                "game over: score={} best_tile={:?} won={}",
                self.score,
                self.grid.max_value(),
                self.won()
            );
        }
        self.game_over = over;
        if over {
            self.max_score = self.max_score.max(self.score);
        }
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.score == other.score
            && self.max_score == other.max_score
            && self.game_over == other.game_over
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
        self.score.hash(state);
        self.max_score.hash(state);
        self.game_over.hash(state);
    }
}

/// Board followed by `] score (max: best) (game is over|not over)`.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[")?;
        write!(f, "{}", self.grid)?;
        let over = if self.game_over { "over" } else { "not over" };
        writeln!(f, "] {} (max: {}) (game is {}) ", self.score, self.max_score, over)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.max_score, 0);
        assert_eq!(state.episode_id, 0);
        assert_eq!(state.grid.size(), 4);
        assert_eq!(state.grid.count_empty(), 16);
    }

    #[test]
    fn test_game_start_places_initial_tiles() {
        let mut state = GameState::new(12345);
        state.start();
        assert!(state.started);
        assert_eq!(state.grid.count_empty(), 14);

        // Starting twice is a no-op.
        state.start();
        assert_eq!(state.grid.count_empty(), 14);
    }

    #[test]
    fn test_restart_increments_episode_id() {
        let mut state = GameState::new(12345);
        state.start();
        assert_eq!(state.episode_id, 0);
        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.episode_id, 1);
        assert_eq!(state.grid.count_empty(), 14);
    }

    #[test]
    fn test_tilt_before_start_is_ignored() {
        let mut state = GameState::new(1);
        assert!(!state.apply_action(GameAction::Tilt(Direction::North)));
    }

    #[test]
    fn test_game_over_updates_max_score() {
        let mut state = GameState::new(1);
        state.score = 500;
        state.grid = Grid::from_rows(&[[2, 4], [4, 2]]).unwrap();
        state.check_game_over();
        assert!(state.game_over);
        assert_eq!(state.max_score, 500);

        state.clear();
        assert_eq!(state.score, 0);
        assert_eq!(state.max_score, 500);
        assert!(!state.game_over);
    }
}
