//! Command-line arguments and the non-interactive modes

use std::io::{BufRead, Write};

use clap::{ArgAction, Parser, Subcommand};
use rand::{rngs::StdRng, thread_rng, SeedableRng};

use crate::config::{verbosity_level, GameConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::error::{GameError, Result};
use crate::puzzle::GameBoard;
use crate::session::Session;
use crate::solver;
use crate::terminal;

#[derive(Debug, Parser)]
#[command(name = "fifteen")]
#[command(author, version, about = "Play and solve the Game of Fifteen")]
pub struct Cli {
    /// Board width and height
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Number of random moves used to shuffle the board
    #[arg(short, long, value_parser = parse_shuffle_level, allow_negative_numbers = true)]
    pub shuffle: Option<usize>,

    /// Random seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Explicit row-major layout, 0 for the empty cell (e.g. "1,2,3,4,5,6,7,8,0")
    #[arg(long, value_name = "VALUES")]
    pub board: Option<String>,

    /// Nodes the solver may expand before giving up
    #[arg(long)]
    pub node_limit: Option<u64>,

    /// Nodes a single in-game hint may expand
    #[arg(long)]
    pub hint_limit: Option<u64>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub enum Mode {
    /// Play interactively in the terminal
    #[default]
    Play,
    /// Print a shuffled board and exit
    Print,
    /// Print an optimal solution for the board
    Solve,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    /// Environment defaults overridden by any flag that was given.
    pub fn config(&self) -> Result<GameConfig> {
        let mut config = GameConfig::from_env();

        if let Some(size) = self.size {
            config.grid_size = size;
        }
        if self.shuffle.is_some() {
            config.shuffle_moves = self.shuffle;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(raw) = &self.board {
            let values = parse_board_values(raw)?;
            // A square layout implies its size unless one was given
            if self.size.is_none() {
                if let Some(size) = square_side(values.len()) {
                    config.grid_size = size;
                }
            }
            config.board = Some(values);
        }
        if let Some(max_nodes) = self.node_limit {
            config.limits.max_nodes = max_nodes;
        }
        if let Some(max_nodes) = self.hint_limit {
            config.hint_limits.max_nodes = max_nodes;
        }
        if let Some(level) = verbosity_level(self.verbose) {
            config.log_level = level.to_string();
        }

        Ok(config)
    }
}

/// Splits on commas and whitespace.
pub fn parse_board_values(raw: &str) -> Result<Vec<u32>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| GameError::InvalidLayout(format!("'{part}' is not a tile value")))
        })
        .collect()
}

fn square_side(cells: usize) -> Option<usize> {
    (MIN_GRID_SIZE..=MAX_GRID_SIZE).find(|side| side * side == cells)
}

pub fn parse_shuffle_level(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| GameError::InvalidShuffleLevel(trimmed.to_string()))
}

/// One-line message for a failed run.
pub fn report(err: &GameError) -> String {
    format!("error: {err}")
}

pub fn run(mode: Mode, config: &GameConfig) -> Result<()> {
    match mode {
        Mode::Play => {
            let mut session = Session::new(config)?;
            terminal::run(&mut session)
        }
        Mode::Print => {
            let stdin = std::io::stdin();
            run_print(config, &mut stdin.lock(), &mut std::io::stdout())
        }
        Mode::Solve => run_solve(config, &mut std::io::stdout()),
    }
}

/// Prompts for a shuffle level when none is configured, then prints the board.
pub fn run_print<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let board = match config.board {
        Some(_) => build_board(config, 0)?,
        None => {
            let shuffle_moves = match config.shuffle_moves {
                Some(moves) => moves,
                None => prompt_shuffle_level(input, out)?,
            };
            build_board(config, shuffle_moves)?
        }
    };

    writeln!(out, "{}", board)?;
    Ok(())
}

pub fn run_solve<W: Write>(config: &GameConfig, out: &mut W) -> Result<()> {
    let board = build_board(config, config.shuffle_or_default())?;
    writeln!(out, "Puzzle:\n{}", board)?;

    let solution = solver::solve(&board, config.limits)?;
    writeln!(out, "Found optimal solution with {} moves", solution.len())?;

    let mut replay = board;
    for direction in solution {
        replay.apply_moves([direction])?;
        writeln!(out, "{}\n{}", direction, replay)?;
    }
    Ok(())
}

fn prompt_shuffle_level<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<usize> {
    write!(out, "Enter shuffle level: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_shuffle_level(&line)
}

fn build_board(config: &GameConfig, shuffle_moves: usize) -> Result<GameBoard> {
    match &config.board {
        Some(values) => GameBoard::from_values(config.grid_size, values),
        None => match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                GameBoard::with_rng(config.grid_size, shuffle_moves, &mut rng)
            }
            None => GameBoard::with_rng(config.grid_size, shuffle_moves, &mut thread_rng()),
        },
    }
}
