//! CPU player that picks a uniformly random empty cell.

use super::{Action, Contestant};
use crate::Console;
use anyhow::{Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use t3sc::GameState;
use tracing::{debug, instrument};

/// CPU player choosing among empty cells with equal probability.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a CPU player with the given RNG.
    pub fn new(name: impl Into<String>, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Creates a CPU player, seeded for reproducible games or from the OS otherwise.
    pub fn from_seed(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(name, rng)
    }
}

impl Contestant for RandomPlayer {
    #[instrument(skip(self, game, _console), fields(player = %self.name))]
    fn choose_move(&mut self, game: &GameState, _console: &mut Console<'_>) -> Result<Action> {
        let choices = game.empty_cells();
        let coord = choices
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow!("No empty cells left for {}", self.name))?;
        debug!(%coord, options = choices.len(), "CPU chose cell");
        Ok(Action::Place(coord))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Cursor;

    #[test]
    fn test_picks_only_empty_cells() {
        let mut game = GameState::new(2).unwrap();
        let _ = game.make_move(0, 0);
        let _ = game.make_move(1, 1);

        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let mut cpu = RandomPlayer::from_seed("CPU", Some(7));
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let Action::Place(coord) = cpu.choose_move(&game, &mut console).unwrap() else {
                panic!("CPU never abandons");
            };
            assert!(game.board().is_empty(coord.row, coord.col));
            seen.insert(coord);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let game = GameState::new(5).unwrap();
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let mut a = RandomPlayer::from_seed("A", Some(42));
        let mut b = RandomPlayer::from_seed("B", Some(42));
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&game, &mut console).unwrap(),
                b.choose_move(&game, &mut console).unwrap()
            );
        }
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut game = GameState::new(1).unwrap();
        let _ = game.make_move(0, 0);

        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let mut cpu = RandomPlayer::from_seed("CPU", Some(1));
        assert!(cpu.choose_move(&game, &mut console).is_err());
    }
}
