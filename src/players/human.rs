//! Human player reading moves from the console.

use super::{Action, Contestant};
use crate::Console;
use anyhow::{Result, bail};
use t3sc::{Coord, GameState};
use tracing::{debug, instrument, warn};

/// Typed at the move prompt to leave the match.
const MENU_COMMAND: &str = "menu";

/// Human player typing `row col` at the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Asks whether to leave the match; anything but `y`/`yes` keeps playing.
    fn confirm_abandon(&self, console: &mut Console<'_>) -> Result<bool> {
        let Some(answer) = console.prompt("End game and return to the main menu? (y/n): ")? else {
            bail!("Input closed while waiting for {}", self.name);
        };
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

impl Contestant for HumanPlayer {
    #[instrument(skip(self, game, console), fields(player = %self.name))]
    fn choose_move(&mut self, game: &GameState, console: &mut Console<'_>) -> Result<Action> {
        let size = game.size();
        let prompt = format!("Enter row and column (1-{size}), or \"{MENU_COMMAND}\": ");
        loop {
            let Some(line) = console.prompt(&prompt)? else {
                bail!("Input closed while waiting for {}", self.name);
            };
            if line.eq_ignore_ascii_case(MENU_COMMAND) {
                if self.confirm_abandon(console)? {
                    debug!("Human chose to abandon");
                    return Ok(Action::Abandon);
                }
                continue;
            }
            match parse_coord(&line) {
                Some(coord) => {
                    debug!(%coord, "Human chose cell");
                    return Ok(Action::Place(coord));
                }
                None => {
                    warn!(input = %line, "Unparsable move");
                    console.say(format!("Enter two numbers between 1 and {size}, e.g. \"2 3\"."))?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses 1-based `row col` (space or comma separated) into a zero-based coordinate.
///
/// Range checks against the board are left to the engine.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row == 0 || col == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("1 1"), Some(Coord::new(0, 0)));
        assert_eq!(parse_coord("3,2"), Some(Coord::new(2, 1)));
        assert_eq!(parse_coord(" 11 , 4 "), Some(Coord::new(10, 3)));
        assert_eq!(parse_coord("0 1"), None);
        assert_eq!(parse_coord("1"), None);
        assert_eq!(parse_coord("1 2 3"), None);
        assert_eq!(parse_coord("a b"), None);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let game = GameState::new(3).unwrap();
        let mut input = Cursor::new(b"nope\n2 3\n".to_vec());
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let mut human = HumanPlayer::new("Player 1");
        let action = human.choose_move(&game, &mut console).unwrap();
        assert_eq!(action, Action::Place(Coord::new(1, 2)));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Enter two numbers between 1 and 3"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let game = GameState::new(3).unwrap();
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let mut human = HumanPlayer::new("Player 2");
        assert!(human.choose_move(&game, &mut console).is_err());
    }

    #[test]
    fn test_menu_asks_before_abandoning() {
        let game = GameState::new(3).unwrap();
        let mut input = Cursor::new(b"menu\nn\n1 1\nMENU\ny\n".to_vec());
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let mut human = HumanPlayer::new("Player 1");
        assert_eq!(
            human.choose_move(&game, &mut console).unwrap(),
            Action::Place(Coord::new(0, 0))
        );
        assert_eq!(human.choose_move(&game, &mut console).unwrap(), Action::Abandon);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("End game and return to the main menu?").count(), 2);
    }

    #[test]
    fn test_eof_during_confirmation_is_an_error() {
        let game = GameState::new(3).unwrap();
        let mut input = Cursor::new(b"menu\n".to_vec());
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let mut human = HumanPlayer::new("Player 1");
        assert!(human.choose_move(&game, &mut console).is_err());
    }
}
