use std::process::ExitCode;

use clap::Parser;
use fifteen::cli::{self, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "Run failed");
            eprintln!("{}", cli::report(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> fifteen::Result<()> {
    let config = cli.config()?;

    // Logs go to stderr so they never mix with the board on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_level))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        mode = ?cli.mode(),
        size = config.grid_size,
        shuffle = ?config.shuffle_moves,
        seed = ?config.seed,
        "Starting fifteen"
    );

    cli::run(cli.mode(), &config)
}
