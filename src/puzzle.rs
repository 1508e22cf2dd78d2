use std::fmt;

use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::config::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::direction::SlidingDirection;
use crate::error::{GameError, Result};
use crate::position::Position;
use crate::render;
use crate::solver;
use crate::tile::Tile;

/// Board state and the rules for sliding tiles around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    size: usize,
    // Row-major, 0 is the empty cell
    cells: Vec<u32>,
    empty: Position,
    correct_cells: usize,
    moves_made: usize,
}

impl GameBoard {
    /// A 4x4 board shuffled with `shuffle_moves` random moves.
    pub fn new(shuffle_moves: usize) -> Self {
        let mut board = Self::goal(DEFAULT_GRID_SIZE);
        board.shuffle(shuffle_moves, &mut thread_rng());
        board
    }

    pub fn with_rng<R: Rng + ?Sized>(size: usize, shuffle_moves: usize, rng: &mut R) -> Result<Self> {
        let mut board = Self::solved(size)?;
        board.shuffle(shuffle_moves, rng);
        Ok(board)
    }

    pub fn solved(size: usize) -> Result<Self> {
        check_size(size)?;
        Ok(Self::goal(size))
    }

    /// Builds a board from row-major values. Solvability is not checked.
    pub fn from_values(size: usize, values: &[u32]) -> Result<Self> {
        check_size(size)?;

        let cells = size * size;
        if values.len() != cells {
            return Err(GameError::InvalidLayout(format!(
                "expected {} values for a {size}x{size} board, got {}",
                cells,
                values.len()
            )));
        }

        let mut seen = vec![false; cells];
        for &value in values {
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                GameError::InvalidLayout(format!("value {value} is outside 0-{}", cells - 1))
            })?;
            if *slot {
                return Err(GameError::InvalidLayout(format!("value {value} appears twice")));
            }
            *slot = true;
        }

        let empty_index = values
            .iter()
            .position(|&v| v == 0)
            .ok_or_else(|| GameError::InvalidLayout("no empty cell".to_string()))?;

        let mut board = Self {
            size,
            cells: values.to_vec(),
            empty: Position::from_index(empty_index, size),
            correct_cells: 0,
            moves_made: 0,
        };
        board.correct_cells = board.count_correct_cells();
        Ok(board)
    }

    fn goal(size: usize) -> Self {
        let cells = size * size;
        let values = (1..=cells as u32).map(|v| v % cells as u32).collect();

        Self {
            size,
            cells: values,
            empty: Position::last(size),
            correct_cells: cells,
            moves_made: 0,
        }
    }

    /// Random walk from the current state. Every reachable state stays solvable.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, movements: usize, rng: &mut R) {
        for _ in 0..movements {
            let moves = self.enabled_moves();
            if let Some(&direction) = moves.choose(rng) {
                if let Some(moving) = self.empty.next(direction) {
                    self.slide_into_empty(moving);
                }
            }
        }
        self.moves_made = 0;

        tracing::debug!(
            size = self.size,
            movements,
            correct_cells = self.correct_cells,
            "Board shuffled"
        );
    }

    /// Slides the tile next to the empty cell in `direction`. Returns `false` if there is none.
    pub fn move_tile(&mut self, direction: SlidingDirection) -> bool {
        let Some(moving) = self.empty.next(direction) else {
            return false;
        };

        self.slide_into_empty(moving);
        self.moves_made += 1;
        true
    }

    /// Slides the tile with `value` if it touches the empty cell.
    pub fn slide_tile(&mut self, value: u32) -> Result<bool> {
        if value == 0 {
            return Err(GameError::UnknownTile(value));
        }
        let tile = self.get(value).ok_or(GameError::UnknownTile(value))?;

        if !tile.position().is_adjacent(&self.empty) {
            return Ok(false);
        }
        match tile.position().direction_to(&self.empty) {
            Some(direction) => Ok(self.move_tile(direction)),
            None => Ok(false),
        }
    }

    /// Applies moves in order, stopping at the first one that is not possible.
    pub fn apply_moves<I>(&mut self, moves: I) -> Result<()>
    where
        I: IntoIterator<Item = SlidingDirection>,
    {
        for (step, direction) in moves.into_iter().enumerate() {
            if !self.move_tile(direction) {
                return Err(GameError::IllegalMove { direction, step });
            }
        }
        Ok(())
    }

    pub fn is_solved(&self) -> bool {
        self.correct_cells == self.cells.len()
    }

    pub fn is_solvable(&self) -> bool {
        solver::is_solvable(&self.cells, self.size)
    }

    /// Directions a tile can currently slide in.
    pub fn enabled_moves(&self) -> Vec<SlidingDirection> {
        self.empty.enabled_moves()
    }

    /// Directions available from the cell holding `value`, as if it were empty.
    pub fn enabled_moves_for(&self, value: u32) -> Result<Vec<SlidingDirection>> {
        let tile = self.get(value).ok_or(GameError::UnknownTile(value))?;
        Ok(tile.position().enabled_moves())
    }

    pub fn get(&self, value: u32) -> Option<Tile> {
        self.cells
            .iter()
            .position(|&v| v == value)
            .map(|index| Tile::new_unchecked(Position::from_index(index, self.size), value))
    }

    pub fn tile_at(&self, position: &Position) -> Option<Tile> {
        if position.size() != self.size {
            return None;
        }
        let value = *self.cells.get(position.index())?;
        Some(Tile::new_unchecked(*position, value))
    }

    pub fn tiles(&self) -> Vec<Vec<Tile>> {
        self.cells
            .chunks(self.size)
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(column, &value)| {
                        let position = Position::from_index(row * self.size + column, self.size);
                        Tile::new_unchecked(position, value)
                    })
                    .collect()
            })
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.size)
    }

    pub fn values(&self) -> &[u32] {
        &self.cells
    }

    pub fn empty_position(&self) -> Position {
        self.empty
    }

    pub fn grid_size(&self) -> usize {
        self.size
    }

    pub fn correct_cells(&self) -> usize {
        self.correct_cells
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    fn slide_into_empty(&mut self, moving: Position) {
        let from = moving.index();
        let to = self.empty.index();

        self.correct_cells -= self.is_correct_at(from) as usize + self.is_correct_at(to) as usize;
        self.cells.swap(from, to);
        self.correct_cells += self.is_correct_at(from) as usize + self.is_correct_at(to) as usize;

        self.empty = moving;
    }

    fn is_correct_at(&self, index: usize) -> bool {
        match self.cells[index] {
            0 => index == self.cells.len() - 1,
            value => value as usize == index + 1,
        }
    }

    fn count_correct_cells(&self) -> usize {
        (0..self.cells.len())
            .filter(|&index| self.is_correct_at(index))
            .count()
    }
}

fn check_size(size: usize) -> Result<()> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::InvalidGridSize {
            size,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        })
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::board_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_count_tracks_incremental_moves() {
        let mut board = GameBoard::solved(4).unwrap();
        board.move_tile(SlidingDirection::Right);
        board.move_tile(SlidingDirection::Down);
        board.move_tile(SlidingDirection::Left);
        assert_eq!(board.correct_cells(), board.count_correct_cells());
    }

    #[test]
    fn goal_places_empty_last() {
        let board = GameBoard::goal(3);
        assert_eq!(board.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert!(board.is_correct_at(8));
    }
}
