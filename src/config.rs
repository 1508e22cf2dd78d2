//! Defaults and runtime configuration

use std::env;

use crate::solver::SolverLimits;

/// Board size used when none is given
pub const DEFAULT_GRID_SIZE: usize = 4;
/// Smallest playable board
pub const MIN_GRID_SIZE: usize = 2;
// Keeps every tile value within two digits
/// Largest playable board
pub const MAX_GRID_SIZE: usize = 9;

/// Random moves applied by `play` and `solve` when no shuffle level is given
pub const DEFAULT_SHUFFLE_MOVES: usize = 50;

/// Nodes the solver may expand before giving up
pub const DEFAULT_NODE_LIMIT: u64 = 20_000_000;

// Hints run between key presses, so they get a much smaller budget
/// Nodes a single interactive hint may expand
pub const DEFAULT_HINT_NODE_LIMIT: u64 = 1_000_000;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings resolved from the environment and the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: usize,
    /// `None` means "ask" for `print` and [`DEFAULT_SHUFFLE_MOVES`] elsewhere.
    pub shuffle_moves: Option<usize>,
    pub seed: Option<u64>,
    /// Explicit row-major layout that replaces shuffling.
    pub board: Option<Vec<u32>>,
    pub limits: SolverLimits,
    pub hint_limits: SolverLimits,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            shuffle_moves: None,
            seed: None,
            board: None,
            limits: SolverLimits::default(),
            hint_limits: SolverLimits {
                max_nodes: DEFAULT_HINT_NODE_LIMIT,
            },
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `FIFTEEN_SIZE`, `FIFTEEN_SHUFFLE`, `FIFTEEN_SEED` and `RUST_LOG`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let grid_size = env::var("FIFTEEN_SIZE")
            .ok()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(defaults.grid_size);

        let shuffle_moves = env::var("FIFTEEN_SHUFFLE")
            .ok()
            .and_then(|raw| raw.trim().parse::<usize>().ok());

        let seed = env::var("FIFTEEN_SEED")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok());

        let log_level = env::var("RUST_LOG")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or(defaults.log_level);

        Self {
            grid_size,
            shuffle_moves,
            seed,
            log_level,
            ..defaults
        }
    }

    pub fn shuffle_or_default(&self) -> usize {
        self.shuffle_moves.unwrap_or(DEFAULT_SHUFFLE_MOVES)
    }
}

/// Log filter for a `-v` count, or `None` to keep the configured one.
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
