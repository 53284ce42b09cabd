//! Contestant trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::Console;
use anyhow::Result;
use t3sc::{Coord, GameState};

/// What a contestant wants to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given cell. Not guaranteed to be legal; the engine decides.
    Place(Coord),
    /// Give up the match and go back to the main menu.
    Abandon,
}

/// Anything that can pick a cell to play: a person at the console or the CPU.
pub trait Contestant {
    /// Chooses the next action for the player whose turn it is.
    fn choose_move(&mut self, game: &GameState, console: &mut Console<'_>) -> Result<Action>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
