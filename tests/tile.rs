//! Tile values and their home positions

use fifteen::{GameError, Position, Tile};

#[test]
fn empty_tile_belongs_bottom_right() {
    let tile = Tile::new(Position::new(0, 0, 4).unwrap(), 0).unwrap();
    assert!(tile.is_empty());
    assert_eq!(tile.correct_position(), Position::new(3, 3, 4).unwrap());
    assert!(!tile.is_correct());
}

#[test]
fn numbered_tiles_belong_in_row_major_order() {
    let home = Position::new(1, 2, 4).unwrap();
    let tile = Tile::new(home, 7).unwrap();
    assert_eq!(tile.correct_position(), home);
    assert!(tile.is_correct());

    let misplaced = Tile::new(Position::new(0, 0, 4).unwrap(), 15).unwrap();
    assert_eq!(misplaced.correct_position(), Position::new(3, 2, 4).unwrap());
    assert!(!misplaced.is_correct());
}

#[test]
fn rejects_values_beyond_the_grid() {
    let position = Position::new(0, 0, 4).unwrap();
    assert!(matches!(
        Tile::new(position, 16),
        Err(GameError::TileOutOfRange { value: 16, max: 15 })
    ));
    assert!(Tile::new(position, 15).is_ok());
}
