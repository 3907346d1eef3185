//! Command-line arguments for the terminal runner.

use anyhow::Result;
use clap::Parser;

use crate::core::GameConfig;
use crate::types::{DEFAULT_BOARD_SIZE, MAX_PIECE};

const KEYS_HELP: &str = "\
keys: arrows / wasd / hjkl tilt, r restart, q quit
logging: set RUST_LOG (e.g. RUST_LOG=debug) and redirect stderr";

#[derive(Parser, Debug)]
#[command(name = "tui-2048", about = "Terminal 2048", after_help = KEYS_HELP)]
pub struct Args {
    /// Cells per side.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,
    /// Winning tile, a power of two.
    #[arg(long, default_value_t = MAX_PIECE)]
    pub target: u32,
    /// Seed for tile placement (default: time based).
    #[arg(long)]
    pub seed: Option<u32>,
}

impl Args {
    /// Build a validated configuration; `default_seed` fills in a missing `--seed`.
    pub fn into_config(self, default_seed: u32) -> Result<GameConfig> {
        let config = GameConfig {
            size: self.size,
            target_tile: self.target,
            seed: self.seed.unwrap_or(default_seed),
            ..GameConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}
