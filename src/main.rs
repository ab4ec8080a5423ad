//! Strictly Dots - console Dots and Boxes.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_dots::{GameConfig, SessionEnd, run_session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut game = config.build_game()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let end = run_session(&mut game, stdin.lock(), stdout.lock())
        .context("Console session failed")?;

    match end {
        SessionEnd::Completed(outcome) => info!(?outcome, "Game finished"),
        SessionEnd::Quit => info!("Game abandoned"),
    }
    Ok(())
}

/// Merges the config file (if any) with command-line overrides.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(&cli.config)?.with_overrides(
        cli.rows.map(usize::from),
        cli.cols.map(usize::from),
        cli.player_one.clone(),
        cli.player_two.clone(),
    );
    config.validate()?;
    info!(
        rows = config.rows(),
        cols = config.cols(),
        player_one = %config.player_one(),
        player_two = %config.player_two(),
        "Configuration resolved"
    );
    Ok(config)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
