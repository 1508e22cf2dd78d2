//! Parsing and geometry of sliding directions

use fifteen::{GameError, SlidingDirection};

#[test]
fn parses_direction_chars_ignoring_case() {
    assert_eq!(SlidingDirection::from_char('U').unwrap(), SlidingDirection::Up);
    assert_eq!(SlidingDirection::from_char('d').unwrap(), SlidingDirection::Down);
    assert_eq!(SlidingDirection::from_char('l').unwrap(), SlidingDirection::Left);
    assert_eq!(SlidingDirection::from_char('R').unwrap(), SlidingDirection::Right);
}

#[test]
fn rejects_unknown_direction_char() {
    assert!(matches!(
        SlidingDirection::from_char('x'),
        Err(GameError::InvalidDirection('x'))
    ));
}

#[test]
fn parses_words_and_single_letters() {
    assert_eq!("up".parse::<SlidingDirection>().unwrap(), SlidingDirection::Up);
    assert_eq!(" RIGHT ".parse::<SlidingDirection>().unwrap(), SlidingDirection::Right);
    assert_eq!("l".parse::<SlidingDirection>().unwrap(), SlidingDirection::Left);
    assert!("sideways".parse::<SlidingDirection>().is_err());
}

#[test]
fn opposite_directions_cancel_offsets() {
    for dir in SlidingDirection::ALL {
        let (r, c) = dir.offset();
        let (or, oc) = dir.opposite().offset();
        assert_eq!((r + or, c + oc), (0, 0), "{dir} and its opposite should cancel");
        assert_eq!(dir.opposite().opposite(), dir);
    }
}

#[test]
fn displays_full_names() {
    let names: Vec<String> = SlidingDirection::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["Up", "Down", "Left", "Right"]);
}
