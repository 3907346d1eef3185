use crate::grid::Grid;

/// Plain-data copy of everything a renderer needs from a [`GameState`](crate::GameState)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u64,
    pub max_score: u64,
    pub last_score_delta: u64,
    pub target_tile: u32,
    pub game_over: bool,
    pub won: bool,
    pub episode_id: u32,
    pub moves: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Largest tile currently on the board (0 when empty)
    pub fn best_tile(&self) -> u32 {
        self.grid.max_value().unwrap_or(0)
    }
}
