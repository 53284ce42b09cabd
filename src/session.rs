//! A sitting at the console: mode, board size, tally and the match loop.

use crate::players::{Action, Contestant, HumanPlayer, RandomPlayer};
use crate::{Console, WinTally};
use anyhow::Result;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use t3sc::{GameState, Player, TurnResult};
use tracing::{debug, info, instrument, warn};

/// Who sits in the Player 2 seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Player 2 is the random CPU.
    #[strum(to_string = "Singleplayer")]
    SinglePlayer,
    /// Both players share the console.
    #[strum(to_string = "Multiplayer")]
    Multiplayer,
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The given player completed a line.
    Won(Player),
    /// The board filled up without a line.
    Draw,
    /// A player left for the main menu before the match finished.
    Abandoned,
}

/// State that outlives a single match.
#[derive(Debug, Getters)]
pub struct Session {
    /// Current mode.
    mode: Mode,
    /// Board side length for the next match.
    size: usize,
    /// Wins since the last visit to the main menu.
    tally: WinTally,
    #[getter(skip)]
    cpu: RandomPlayer,
}

impl Session {
    /// Creates a session with an empty tally.
    #[instrument(skip(cpu))]
    pub fn new(mode: Mode, size: usize, cpu: RandomPlayer) -> Self {
        info!("Creating session");
        Self {
            mode,
            size,
            tally: WinTally::new(),
            cpu,
        }
    }

    /// Sets the mode for the next match.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Sets the board size for the next match.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Clears the win tally.
    pub fn reset_tally(&mut self) {
        debug!(tally = %self.tally, "Resetting tally");
        self.tally.reset();
    }

    /// Plays one match to completion and records the winner in the tally.
    ///
    /// Rejected moves are reported and the same player is asked again. An
    /// abandoned match leaves the tally as it was.
    ///
    /// # Errors
    ///
    /// Fails if the board size is invalid or the console input is closed.
    #[instrument(skip(self, console), fields(mode = %self.mode, size = self.size))]
    pub fn play_match(&mut self, console: &mut Console<'_>) -> Result<MatchResult> {
        let mut game = GameState::new(self.size)?;
        let mut humans = [HumanPlayer::new("Player 1"), HumanPlayer::new("Player 2")];

        console.say(format!("Tic Tac Toe | {}", self.mode))?;
        info!("Match started");

        loop {
            let mover = game.current_turn();
            console.say("")?;
            console.render(&game)?;
            console.say(format!("{mover} turn    {}", self.tally))?;

            let seat: &mut dyn Contestant = match (self.mode, mover) {
                (Mode::SinglePlayer, Player::Two) => &mut self.cpu,
                (_, Player::One) => &mut humans[0],
                (_, Player::Two) => &mut humans[1],
            };
            let coord = match seat.choose_move(&game, console)? {
                Action::Place(coord) => coord,
                Action::Abandon => {
                    info!(moves = game.history().len(), "Match abandoned");
                    return Ok(MatchResult::Abandoned);
                }
            };

            match game.make_move(coord.row, coord.col) {
                TurnResult::Success => {
                    if let Some(last) = game.history().last() {
                        console.say(format!(
                            "{} played row {}, column {}",
                            last.player,
                            last.coord.row + 1,
                            last.coord.col + 1
                        ))?;
                    }
                }
                TurnResult::Failure => {
                    warn!(%coord, "Move rejected by engine");
                    console.say("That cell is taken or off the board, try again.")?;
                }
                TurnResult::Winner(winner) => {
                    self.tally.record(winner);
                    info!(?winner, tally = %self.tally, "Match won");
                    console.say("")?;
                    console.say(game.board())?;
                    return Ok(MatchResult::Won(winner));
                }
                TurnResult::Draw => {
                    info!(tally = %self.tally, "Match drawn");
                    console.say("")?;
                    console.say(game.board())?;
                    return Ok(MatchResult::Draw);
                }
            }
        }
    }
}
