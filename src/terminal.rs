//! Raw-mode terminal front-end for [`Session`]

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};

use crate::direction::SlidingDirection;
use crate::error::Result;
use crate::render;
use crate::session::{Command, Outcome, Session};

const HELP: &str = "arrows/WASD slide, number+Enter slide tile, h hint, n new game, q quit";

/// Restores the terminal even when the game loop bails out early.
struct RawModeGuard {
    restore: fn(),
}

impl RawModeGuard {
    fn enter(stdout: &mut Stdout) -> Result<Self> {
        Self::arm(
            terminal::enable_raw_mode,
            move || execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide),
            restore_terminal,
        )
    }

    /// The guard exists as soon as `enable` succeeds, so a failing `setup` still restores.
    fn arm(
        enable: impl FnOnce() -> io::Result<()>,
        setup: impl FnOnce() -> io::Result<()>,
        restore: fn(),
    ) -> Result<Self> {
        enable()?;
        let guard = Self { restore };
        setup()?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

pub fn run(session: &mut Session) -> Result<()> {
    let mut stdout = io::stdout();
    let _guard = RawModeGuard::enter(&mut stdout)?;

    let mut pending = String::new();
    loop {
        draw(&mut stdout, session, &pending)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(command) = command_for_key(key, &mut pending) else {
            continue;
        };

        let outcome = session.handle(command);
        tracing::debug!(?command, ?outcome, "Handled key");
        if outcome == Outcome::Quit {
            return Ok(());
        }
    }
}

/// Maps a key press to a command. Digits collect in `pending` until Enter.
pub fn command_for_key(key: KeyEvent, pending: &mut String) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Slide(SlidingDirection::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Slide(SlidingDirection::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Slide(SlidingDirection::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Slide(SlidingDirection::Right))
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            pending.push(c);
            None
        }
        KeyCode::Backspace => {
            pending.pop();
            None
        }
        KeyCode::Enter => {
            let value = pending.parse().ok();
            pending.clear();
            value.map(Command::SlideTile)
        }
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::Hint),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewGame),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn draw(stdout: &mut Stdout, session: &Session, pending: &str) -> Result<()> {
    let board = session.board();
    queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    // Raw mode needs explicit line starts
    for line in render::board_to_string(board).lines() {
        queue!(stdout, Print(line), cursor::MoveToNextLine(1))?;
    }
    queue!(
        stdout,
        cursor::MoveToNextLine(1),
        Print(render::move_counter(board.moves_made())),
        cursor::MoveToNextLine(1)
    )?;

    if let Some(status) = session.status() {
        queue!(stdout, Print(status), cursor::MoveToNextLine(1))?;
    }
    if !pending.is_empty() {
        queue!(stdout, Print(format!("Tile: {}", pending)), cursor::MoveToNextLine(1))?;
    }
    queue!(stdout, cursor::MoveToNextLine(1), Print(HELP))?;

    stdout.flush()?;
    Ok(())
}
