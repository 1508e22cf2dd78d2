use std::fmt;

use crate::error::{GameError, Result};
use crate::position::Position;

/// A numbered tile and the cell it currently sits in. Value 0 is the empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    value: u32,
}

impl Tile {
    pub fn new(position: Position, value: u32) -> Result<Self> {
        let cells = (position.size() * position.size()) as u32;
        if value >= cells {
            return Err(GameError::TileOutOfRange {
                value,
                max: cells - 1,
            });
        }
        Ok(Self { position, value })
    }

    pub(crate) fn new_unchecked(position: Position, value: u32) -> Self {
        Self { position, value }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Where this tile belongs in the solved layout.
    pub fn correct_position(&self) -> Position {
        let size = self.position.size();
        if self.value == 0 {
            return Position::last(size);
        }
        Position::from_index(self.value as usize - 1, size)
    }

    pub fn is_correct(&self) -> bool {
        self.correct_position() == self.position
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile {} at {} (expected {})",
            self.value,
            self.position,
            self.correct_position()
        )
    }
}
