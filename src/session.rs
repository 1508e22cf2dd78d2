//! Interactive game state, independent of any terminal

use rand::{rngs::StdRng, SeedableRng};

use crate::config::GameConfig;
use crate::direction::SlidingDirection;
use crate::error::{GameError, Result};
use crate::puzzle::GameBoard;
use crate::render;
use crate::solver::{self, SolverLimits};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Slide(SlidingDirection),
    SlideTile(u32),
    Hint,
    NewGame,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved,
    Blocked,
    Solved,
    /// The board is already solved and waits for a new game.
    Ignored,
    Hint(SlidingDirection),
    HintUnavailable(String),
    Rejected(String),
    NewGame,
    Quit,
}

pub struct Session {
    board: GameBoard,
    size: usize,
    shuffle_moves: usize,
    hint_limits: SolverLimits,
    rng: StdRng,
    status: Option<String>,
}

impl Session {
    /// Starts from the configured layout, or a freshly shuffled board.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let shuffle_moves = config.shuffle_or_default();

        let board = match &config.board {
            Some(values) => {
                let board = GameBoard::from_values(config.grid_size, values)?;
                if !board.is_solvable() {
                    return Err(GameError::Unsolvable);
                }
                board
            }
            None => GameBoard::with_rng(config.grid_size, shuffle_moves, &mut rng)?,
        };

        tracing::info!(
            size = config.grid_size,
            shuffle_moves,
            seed = ?config.seed,
            "Session started"
        );

        Ok(Self {
            board,
            size: config.grid_size,
            shuffle_moves,
            hint_limits: config.hint_limits,
            rng,
            status: None,
        })
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::Quit => return Outcome::Quit,
            Command::NewGame => self.new_game(),
            _ if self.board.is_solved() => return Outcome::Ignored,
            Command::Slide(direction) => {
                let moved = self.board.move_tile(direction);
                self.after_move(moved)
            }
            Command::SlideTile(value) => match self.board.slide_tile(value) {
                Ok(moved) => self.after_move(moved),
                Err(err) => Outcome::Rejected(err.to_string()),
            },
            Command::Hint => match solver::hint(&self.board, self.hint_limits) {
                Ok(Some(direction)) => Outcome::Hint(direction),
                Ok(None) => Outcome::Ignored,
                Err(err) => {
                    tracing::warn!(error = %err, "Hint unavailable");
                    Outcome::HintUnavailable(err.to_string())
                }
            },
        };

        self.status = match &outcome {
            Outcome::Solved => Some(render::win_message(self.board.moves_made())),
            Outcome::Blocked => Some("That tile cannot move.".to_string()),
            Outcome::Hint(direction) => Some(self.describe_hint(*direction)),
            Outcome::HintUnavailable(reason) => Some(format!("No hint: {}", reason)),
            Outcome::Rejected(reason) => Some(reason.clone()),
            _ => None,
        };
        outcome
    }

    fn after_move(&self, moved: bool) -> Outcome {
        if !moved {
            Outcome::Blocked
        } else if self.board.is_solved() {
            Outcome::Solved
        } else {
            Outcome::Moved
        }
    }

    fn describe_hint(&self, direction: SlidingDirection) -> String {
        let tile = self
            .board
            .empty_position()
            .next(direction)
            .and_then(|position| self.board.tile_at(&position));
        match tile {
            Some(tile) => format!("Hint: slide {} {}", tile.value(), direction),
            None => format!("Hint: slide {}", direction),
        }
    }

    fn new_game(&mut self) -> Outcome {
        match GameBoard::with_rng(self.size, self.shuffle_moves, &mut self.rng) {
            Ok(board) => {
                self.board = board;
                Outcome::NewGame
            }
            Err(err) => Outcome::Rejected(err.to_string()),
        }
    }
}
