//! Command-line interface for strictly_dots.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Dots - two-player Dots and Boxes at the console
#[derive(Parser, Debug)]
#[command(name = "strictly_dots")]
#[command(about = "Play Dots and Boxes in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (ignored if missing)
    #[arg(short, long, default_value = "dots.toml")]
    pub config: PathBuf,

    /// Rows of boxes (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: Option<u16>,

    /// Columns of boxes (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub cols: Option<u16>,

    /// Name of the player who moves first (overrides config)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the player who moves second (overrides config)
    #[arg(long)]
    pub player_two: Option<String>,
}
