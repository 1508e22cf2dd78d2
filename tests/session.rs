//! Interactive session commands, independent of the terminal

use fifteen::config::GameConfig;
use fifteen::session::{Command, Outcome, Session};
use fifteen::solver::SolverLimits;
use fifteen::{GameError, SlidingDirection};

// 3x3 board one move away from solved: 8 slides left
fn almost_solved() -> GameConfig {
    GameConfig {
        grid_size: 3,
        shuffle_moves: Some(20),
        seed: Some(11),
        board: Some(vec![1, 2, 3, 4, 5, 6, 7, 0, 8]),
        ..GameConfig::default()
    }
}

#[test]
fn sliding_the_last_tile_wins() {
    let mut session = Session::new(&almost_solved()).unwrap();

    assert_eq!(session.handle(Command::Slide(SlidingDirection::Left)), Outcome::Solved);
    assert!(session.board().is_solved());
    assert_eq!(session.status(), Some("Solved in 1 move!"));
}

#[test]
fn clicking_a_neighbour_tile_moves_it() {
    let mut session = Session::new(&almost_solved()).unwrap();
    assert_eq!(session.handle(Command::SlideTile(8)), Outcome::Solved);
}

#[test]
fn distant_tiles_and_walls_block() {
    let mut session = Session::new(&almost_solved()).unwrap();

    assert_eq!(session.handle(Command::SlideTile(1)), Outcome::Blocked);
    assert_eq!(session.handle(Command::Slide(SlidingDirection::Up)), Outcome::Blocked);
    assert_eq!(session.status(), Some("That tile cannot move."));
    assert_eq!(session.board().moves_made(), 0);
}

#[test]
fn unknown_tiles_are_rejected() {
    let mut session = Session::new(&almost_solved()).unwrap();
    assert!(matches!(session.handle(Command::SlideTile(42)), Outcome::Rejected(_)));
}

#[test]
fn ordinary_moves_clear_the_status() {
    let mut session = Session::new(&almost_solved()).unwrap();
    session.handle(Command::SlideTile(1));

    assert_eq!(session.handle(Command::Slide(SlidingDirection::Right)), Outcome::Moved);
    assert_eq!(session.status(), None);
    assert_eq!(session.board().moves_made(), 1);
}

#[test]
fn hint_names_the_tile_to_move() {
    let mut session = Session::new(&almost_solved()).unwrap();

    assert_eq!(
        session.handle(Command::Hint),
        Outcome::Hint(SlidingDirection::Left)
    );
    assert_eq!(session.status(), Some("Hint: slide 8 Left"));
}

#[test]
fn hint_gives_up_within_its_own_budget() {
    let config = GameConfig {
        hint_limits: SolverLimits { max_nodes: 1 },
        ..almost_solved()
    };
    let mut session = Session::new(&config).unwrap();

    assert!(matches!(
        session.handle(Command::Hint),
        Outcome::HintUnavailable(_)
    ));
    assert_eq!(session.status(), Some("No hint: search gave up after 2 nodes"));
    assert!(!session.board().is_solved());
}

#[test]
fn default_hint_budget_is_smaller_than_the_solver_budget() {
    let config = GameConfig::default();
    assert!(config.hint_limits.max_nodes < config.limits.max_nodes);
}

#[test]
fn solved_board_ignores_moves_until_new_game() {
    let mut session = Session::new(&almost_solved()).unwrap();
    session.handle(Command::Slide(SlidingDirection::Left));

    assert_eq!(session.handle(Command::Slide(SlidingDirection::Right)), Outcome::Ignored);
    assert_eq!(session.handle(Command::Hint), Outcome::Ignored);
    assert!(session.board().is_solved());

    assert_eq!(session.handle(Command::NewGame), Outcome::NewGame);
    assert_eq!(session.status(), None);
    assert_eq!(session.board().grid_size(), 3);
    assert_eq!(session.board().moves_made(), 0);
    assert!(session.board().is_solvable());
}

#[test]
fn seeded_sessions_shuffle_identically() {
    let config = GameConfig {
        shuffle_moves: Some(60),
        seed: Some(5),
        ..GameConfig::default()
    };
    let a = Session::new(&config).unwrap();
    let b = Session::new(&config).unwrap();
    assert_eq!(a.board(), b.board());
}

#[test]
fn unsolvable_layouts_cannot_be_played() {
    let config = GameConfig {
        grid_size: 3,
        board: Some(vec![2, 1, 3, 4, 5, 6, 7, 8, 0]),
        ..GameConfig::default()
    };
    assert!(matches!(Session::new(&config), Err(GameError::Unsolvable)));
}

#[test]
fn quit_ends_the_session() {
    let mut session = Session::new(&almost_solved()).unwrap();
    assert_eq!(session.handle(Command::Quit), Outcome::Quit);
}
