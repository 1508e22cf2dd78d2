//! Error type shared by the engine and the binary

use thiserror::Error;

use crate::direction::SlidingDirection;

pub type Result<T, E = GameError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid direction '{0}', expected one of U, D, L, R")]
    InvalidDirection(char),

    #[error("invalid direction '{0}'")]
    InvalidDirectionName(String),

    #[error("position ({row}, {column}) is outside a {size}x{size} grid")]
    PositionOutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },

    #[error("tile value {value} must be in the 0-{max} range")]
    TileOutOfRange { value: u32, max: u32 },

    #[error("grid size {size} is not supported (expected {min}-{max})")]
    InvalidGridSize { size: usize, min: usize, max: usize },

    #[error("no tile {0} on the board")]
    UnknownTile(u32),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("invalid shuffle level '{0}', expected a non-negative integer")]
    InvalidShuffleLevel(String),

    #[error("puzzle is not solvable")]
    Unsolvable,

    #[error("search gave up after {nodes} nodes")]
    SearchLimitReached { nodes: u64 },

    #[error("move {direction} is not possible at step {step}")]
    IllegalMove {
        direction: SlidingDirection,
        step: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
