//! Sliding-tile puzzle engine (the "Game of Fifteen") with an optimal solver
//! and a terminal front-end.
//!
//! A board starts solved and is shuffled with random legal moves, so every
//! shuffled board can be solved again.

pub mod cli;
pub mod config;
pub mod direction;
pub mod error;
pub mod position;
pub mod puzzle;
pub mod render;
pub mod session;
pub mod solver;
pub mod terminal;
pub mod tile;

pub use direction::SlidingDirection;
pub use error::{GameError, Result};
pub use position::Position;
pub use puzzle::GameBoard;
pub use tile::Tile;
