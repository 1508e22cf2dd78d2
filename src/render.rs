//! Plain-text views of a board

use std::fmt::Write;

use crate::puzzle::GameBoard;

/// Characters used by one tile number, never fewer than two.
pub fn cell_width(size: usize) -> usize {
    let largest = size * size - 1;
    largest.to_string().len().max(2)
}

/// One line per row: zero-padded values, blanks for the empty cell.
pub fn board_to_string(board: &GameBoard) -> String {
    let width = cell_width(board.grid_size());
    let mut result = String::new();

    for row in board.rows() {
        for &value in row {
            if value == 0 {
                result.push_str(&" ".repeat(width + 1));
            } else {
                // Writing to a String cannot fail
                let _ = write!(result, "{:0width$} ", value, width = width);
            }
        }
        result.push('\n');
    }
    result
}

pub fn move_counter(moves: usize) -> String {
    format!("Moves: {}", moves)
}

pub fn win_message(moves: usize) -> String {
    if moves == 1 {
        "Solved in 1 move!".to_string()
    } else {
        format!("Solved in {} moves!", moves)
    }
}
