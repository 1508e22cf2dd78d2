use std::fmt;

use crate::direction::SlidingDirection;
use crate::error::{GameError, Result};

/// A cell inside a `size` x `size` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    column: usize,
    size: usize,
}

impl Position {
    pub fn new(row: usize, column: usize, size: usize) -> Result<Self> {
        if row >= size || column >= size {
            return Err(GameError::PositionOutOfBounds { row, column, size });
        }
        Ok(Self { row, column, size })
    }

    /// Bottom-right cell, where the empty cell lives when the puzzle is solved.
    pub(crate) fn last(size: usize) -> Self {
        Self {
            row: size - 1,
            column: size - 1,
            size,
        }
    }

    pub(crate) fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            column: index % size,
            size,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major index of this cell.
    pub fn index(&self) -> usize {
        self.row * self.size + self.column
    }

    /// The cell whose tile would slide into this one when moving in `direction`.
    pub fn next(&self, direction: SlidingDirection) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let column = self.column.checked_add_signed(dc)?;

        if row < self.size && column < self.size {
            Some(Position {
                row,
                column,
                size: self.size,
            })
        } else {
            None
        }
    }

    /// Directions a tile could slide into this cell from.
    pub fn enabled_moves(&self) -> Vec<SlidingDirection> {
        SlidingDirection::ALL
            .into_iter()
            .filter(|&dir| self.next(dir).is_some())
            .collect()
    }

    /// Direction a tile here slides to reach `to`, if both share a row or column.
    pub fn direction_to(&self, to: &Position) -> Option<SlidingDirection> {
        if self == to {
            return None;
        }

        if self.row == to.row {
            if self.column < to.column {
                Some(SlidingDirection::Right)
            } else {
                Some(SlidingDirection::Left)
            }
        } else if self.column == to.column {
            if self.row < to.row {
                Some(SlidingDirection::Down)
            } else {
                Some(SlidingDirection::Up)
            }
        } else {
            None
        }
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
