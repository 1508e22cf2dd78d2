use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, Result};

/// Direction a tile slides into the empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlidingDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SlidingDirection {
    pub const ALL: [SlidingDirection; 4] = [
        SlidingDirection::Up,
        SlidingDirection::Down,
        SlidingDirection::Left,
        SlidingDirection::Right,
    ];

    /// Parses `U`, `D`, `L` or `R`, ignoring case.
    pub fn from_char(direction: char) -> Result<Self> {
        match direction.to_ascii_uppercase() {
            'U' => Ok(SlidingDirection::Up),
            'D' => Ok(SlidingDirection::Down),
            'L' => Ok(SlidingDirection::Left),
            'R' => Ok(SlidingDirection::Right),
            _ => Err(GameError::InvalidDirection(direction)),
        }
    }

    /// (row, column) offset from the empty cell to the tile that moves.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            SlidingDirection::Up => (1, 0),
            SlidingDirection::Down => (-1, 0),
            SlidingDirection::Left => (0, 1),
            SlidingDirection::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            SlidingDirection::Up => SlidingDirection::Down,
            SlidingDirection::Down => SlidingDirection::Up,
            SlidingDirection::Left => SlidingDirection::Right,
            SlidingDirection::Right => SlidingDirection::Left,
        }
    }
}

impl FromStr for SlidingDirection {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "up" => Ok(SlidingDirection::Up),
            "down" => Ok(SlidingDirection::Down),
            "left" => Ok(SlidingDirection::Left),
            "right" => Ok(SlidingDirection::Right),
            _ => Err(GameError::InvalidDirectionName(trimmed.to_string())),
        }
    }
}

impl fmt::Display for SlidingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            SlidingDirection::Up => "Up",
            SlidingDirection::Down => "Down",
            SlidingDirection::Left => "Left",
            SlidingDirection::Right => "Right",
        };
        write!(f, "{}", s)
    }
}
