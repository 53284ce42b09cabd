//! Scalable tic-tac-toe console front-end.
//!
//! A thin view/controller shell over the [`t3sc`] rules engine: it renders
//! the board, reads moves, supplies a random CPU opponent and keeps a win
//! tally. All rules decisions are made by [`t3sc::GameState`].
//!
//! # Architecture
//!
//! - **Menu**: screen state machine (main menu, match, results)
//! - **Session**: mode, board size, tally and the match loop
//! - **Players**: human console input and the random CPU
//! - **Config**: TOML settings with CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod menu;
mod players;
mod session;
mod tally;

pub use config::{AppConfig, BOARD_SIZES, ConfigError};
pub use console::Console;
pub use menu::MenuController;
pub use players::{Action, Contestant, HumanPlayer, RandomPlayer};
pub use session::{MatchResult, Mode, Session};
pub use tally::WinTally;
