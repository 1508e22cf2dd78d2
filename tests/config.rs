//! Environment defaults and how command-line flags override them

use std::env;

use clap::Parser;
use fifteen::cli::Cli;
use fifteen::config::{GameConfig, DEFAULT_GRID_SIZE, DEFAULT_LOG_LEVEL};

const VARS: [&str; 4] = ["FIFTEEN_SIZE", "FIFTEEN_SHUFFLE", "FIFTEEN_SEED", "RUST_LOG"];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

// Environment edits are process-wide, so every case runs in this one test
#[test]
fn environment_supplies_defaults_that_flags_override() {
    clear_vars();
    assert_eq!(GameConfig::from_env(), GameConfig::default());
    assert_eq!(GameConfig::from_env().log_level, DEFAULT_LOG_LEVEL);

    env::set_var("FIFTEEN_SIZE", "5");
    env::set_var("FIFTEEN_SHUFFLE", " 12 ");
    env::set_var("FIFTEEN_SEED", "99");
    env::set_var("RUST_LOG", "error");
    let config = GameConfig::from_env();
    assert_eq!(config.grid_size, 5);
    assert_eq!(config.shuffle_moves, Some(12));
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.log_level, "error");

    let cli = Cli::try_parse_from(["fifteen"]).unwrap();
    let config = cli.config().unwrap();
    assert_eq!(config.grid_size, 5);
    assert_eq!(config.log_level, "error");

    let cli = Cli::try_parse_from(["fifteen", "--size", "3", "-s", "4", "--seed", "1", "-v"])
        .unwrap();
    let config = cli.config().unwrap();
    assert_eq!(config.grid_size, 3);
    assert_eq!(config.shuffle_moves, Some(4));
    assert_eq!(config.seed, Some(1));
    assert_eq!(config.log_level, "info");

    env::set_var("FIFTEEN_SIZE", "big");
    env::set_var("FIFTEEN_SHUFFLE", "-1");
    env::set_var("FIFTEEN_SEED", "");
    env::set_var("RUST_LOG", "   ");
    let config = GameConfig::from_env();
    assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
    assert_eq!(config.shuffle_moves, None);
    assert_eq!(config.seed, None);
    assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

    clear_vars();
}
