//! Running win count for the current sitting.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use t3sc::Player;

/// Wins per player since the last return to the main menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    player_one: u32,
    player_two: u32,
}

impl WinTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one win for `winner`.
    pub fn record(&mut self, winner: Player) {
        match winner {
            Player::One => self.player_one += 1,
            Player::Two => self.player_two += 1,
        }
    }

    /// Returns the number of wins for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Clears both counts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for WinTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Player::iter()
            .map(|p| format!("P{}: {}", p.number(), self.get(p)))
            .collect();
        write!(f, "{}", parts.join("/"))
    }
}
