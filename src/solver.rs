//! Solvability check and optimal IDA* solver

use crate::config::{DEFAULT_NODE_LIMIT, MAX_GRID_SIZE};
use crate::direction::SlidingDirection;
use crate::error::{GameError, Result};
use crate::position::Position;
use crate::puzzle::GameBoard;

/// Budget for a single solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverLimits {
    pub max_nodes: u64,
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_NODE_LIMIT,
        }
    }
}

/// Pairs of tiles that appear in the opposite order to the solved layout, ignoring the empty cell.
pub fn count_inversions(values: &[u32]) -> usize {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            values[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

pub fn is_solvable(values: &[u32], size: usize) -> bool {
    let inversions = count_inversions(values);

    if size % 2 == 1 {
        inversions % 2 == 0
    } else {
        // Each vertical move flips the inversion parity and the empty row parity together
        let empty_row = values.iter().position(|&v| v == 0).map_or(0, |i| i / size);
        (inversions + empty_row) % 2 == (size - 1) % 2
    }
}

/// Shortest sequence of moves that solves `board`.
pub fn solve(board: &GameBoard, limits: SolverLimits) -> Result<Vec<SlidingDirection>> {
    if !board.is_solvable() {
        return Err(GameError::Unsolvable);
    }

    let mut search = Search::new(board, limits);
    let mut bound = search.heuristic();

    loop {
        tracing::debug!(bound, nodes = search.nodes, "Deepening search");

        match search.descend(0, bound, None)? {
            Step::Found => {
                tracing::info!(
                    moves = search.path.len(),
                    nodes = search.nodes,
                    "Found optimal solution"
                );
                return Ok(search.path);
            }
            Step::Exceeded(next) => {
                if next == usize::MAX {
                    return Err(GameError::Unsolvable);
                }
                bound = next;
            }
        }
    }
}

/// First move of an optimal solution, or `None` when already solved.
pub fn hint(board: &GameBoard, limits: SolverLimits) -> Result<Option<SlidingDirection>> {
    Ok(solve(board, limits)?.first().copied())
}

enum Step {
    Found,
    Exceeded(usize),
}

struct Search {
    size: usize,
    cells: Vec<u32>,
    empty: usize,
    // Manhattan distance of `cells`, kept current by `slide`
    distance: usize,
    path: Vec<SlidingDirection>,
    nodes: u64,
    max_nodes: u64,
}

impl Search {
    fn new(board: &GameBoard, limits: SolverLimits) -> Self {
        let size = board.grid_size();
        let cells = board.values().to_vec();
        Self {
            size,
            distance: manhattan_distance(&cells, size),
            cells,
            empty: board.empty_position().index(),
            path: Vec::new(),
            nodes: 0,
            max_nodes: limits.max_nodes,
        }
    }

    fn descend(
        &mut self,
        g: usize,
        bound: usize,
        last_move: Option<SlidingDirection>,
    ) -> Result<Step> {
        self.nodes += 1;
        if self.nodes > self.max_nodes {
            return Err(GameError::SearchLimitReached { nodes: self.nodes });
        }

        let h = self.heuristic();
        let f = g + h;
        if f > bound {
            return Ok(Step::Exceeded(f));
        }
        // Zero distance means every tile is home
        if h == 0 {
            return Ok(Step::Found);
        }

        let mut min = usize::MAX;
        for dir in SlidingDirection::ALL {
            if last_move == Some(dir.opposite()) {
                continue;
            }
            let Some(target) = self.neighbour(dir) else {
                continue;
            };

            let previous = self.empty;
            self.slide(target);
            self.path.push(dir);

            match self.descend(g + 1, bound, Some(dir))? {
                Step::Found => return Ok(Step::Found),
                Step::Exceeded(t) => min = min.min(t),
            }

            self.path.pop();
            self.slide(previous);
        }

        Ok(Step::Exceeded(min))
    }

    fn neighbour(&self, dir: SlidingDirection) -> Option<usize> {
        Position::from_index(self.empty, self.size)
            .next(dir)
            .map(|p| p.index())
    }

    fn slide(&mut self, target: usize) {
        let value = self.cells[target];
        self.distance = self.distance + tile_distance(value, self.empty, self.size)
            - tile_distance(value, target, self.size);
        self.cells.swap(self.empty, target);
        self.empty = target;
    }

    fn heuristic(&self) -> usize {
        self.distance + 2 * linear_conflicts(&self.cells, self.size)
    }
}

fn manhattan_distance(cells: &[u32], size: usize) -> usize {
    cells
        .iter()
        .enumerate()
        .map(|(index, &value)| tile_distance(value, index, size))
        .sum()
}

fn tile_distance(value: u32, index: usize, size: usize) -> usize {
    if value == 0 {
        return 0;
    }
    let target = value as usize - 1;
    (index / size).abs_diff(target / size) + (index % size).abs_diff(target % size)
}

/// Extra moves forced by tiles sharing their goal row or column in the wrong order.
fn linear_conflicts(cells: &[u32], size: usize) -> usize {
    let mut conflicts = 0;
    let mut goals = [0usize; MAX_GRID_SIZE];

    for line in 0..size {
        let mut len = 0;
        for col in 0..size {
            let value = cells[line * size + col];
            if value != 0 && (value as usize - 1) / size == line {
                goals[len] = (value as usize - 1) % size;
                len += 1;
            }
        }
        conflicts += len - longest_increasing_run(&goals[..len]);

        len = 0;
        for row in 0..size {
            let value = cells[row * size + line];
            if value != 0 && (value as usize - 1) % size == line {
                goals[len] = (value as usize - 1) / size;
                len += 1;
            }
        }
        conflicts += len - longest_increasing_run(&goals[..len]);
    }

    conflicts
}

// Length of the longest strictly increasing subsequence of one line
fn longest_increasing_run(goals: &[usize]) -> usize {
    let mut best = [1usize; MAX_GRID_SIZE];
    let mut longest = 0;
    for i in 0..goals.len() {
        for j in 0..i {
            if goals[j] < goals[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
        longest = longest.max(best[i]);
    }
    longest
}
