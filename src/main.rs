//! Scalable Tic Tac Toe - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use scalable_tictactoe::{AppConfig, Console, MenuController, Mode, RandomPlayer, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .and_then(|config| config.with_overrides(cli.size, cli.mode, cli.seed))
        .with_context(|| format!("Invalid configuration in {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "Starting scalable tic-tac-toe");

    let cpu = RandomPlayer::from_seed("CPU", *config.seed());
    let session = Session::new(
        (*config.start_mode()).unwrap_or(Mode::Multiplayer),
        *config.board_size(),
        cpu,
    );
    let mut controller = MenuController::new(session);

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    let mut console = Console::new(&mut input, &mut output);
    controller.run(&mut console, *config.start_mode())
}
