//! Text rendering of boards and status lines

use fifteen::render::{board_to_string, cell_width, move_counter, win_message};
use fifteen::GameBoard;

#[test]
fn cells_are_at_least_two_wide() {
    assert_eq!(cell_width(2), 2);
    assert_eq!(cell_width(4), 2);
    assert_eq!(cell_width(9), 2);
}

#[test]
fn empty_cell_is_blank() {
    let board = GameBoard::from_values(2, &[0, 1, 2, 3]).unwrap();
    assert_eq!(board_to_string(&board), "   01 \n02 03 \n");
}

#[test]
fn status_lines() {
    assert_eq!(move_counter(7), "Moves: 7");
    assert_eq!(win_message(1), "Solved in 1 move!");
    assert_eq!(win_message(12), "Solved in 12 moves!");
}
