//! Command-line interface for scalable_tictactoe.

use clap::Parser;
use scalable_tictactoe::Mode;
use std::path::PathBuf;

/// Scalable Tic Tac Toe - N×N tic-tac-toe at the console
#[derive(Parser, Debug)]
#[command(name = "scalable_tictactoe")]
#[command(about = "Play N×N tic-tac-toe against a friend or a random CPU", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Board size (2-11)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Skip the main menu and start a match in this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Seed for the CPU player's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}
