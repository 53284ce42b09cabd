//! Menu controller: the screen state machine around the match loop.

use crate::config::BOARD_SIZES;
use crate::{Console, MatchResult, Mode, Session};
use anyhow::Result;
use tracing::{debug, info, instrument, warn};

/// Where the controller goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    /// Size selection and mode buttons; returning here resets the tally.
    MainMenu,
    /// A match in the session's current mode.
    InGame,
    /// Outcome of the last match with replay options.
    Results(MatchResult),
    /// Leave the application.
    Quit,
}

/// Drives the screens until the player exits or input runs out.
#[derive(Debug)]
pub struct MenuController {
    session: Session,
}

impl MenuController {
    /// Creates a controller around a session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the screen loop, optionally skipping the main menu.
    #[instrument(skip(self, console))]
    pub fn run(&mut self, console: &mut Console<'_>, start: Option<Mode>) -> Result<()> {
        let mut screen = match start {
            Some(mode) => {
                self.session.set_mode(mode);
                Screen::InGame
            }
            None => Screen::MainMenu,
        };

        loop {
            debug!(?screen, "Entering screen");
            screen = match screen {
                Screen::MainMenu => self.main_menu(console)?,
                Screen::InGame => match self.session.play_match(console)? {
                    MatchResult::Abandoned => Screen::MainMenu,
                    result => Screen::Results(result),
                },
                Screen::Results(result) => self.results(console, result)?,
                Screen::Quit => {
                    info!(tally = %self.session.tally(), "Exiting");
                    return Ok(());
                }
            };
        }
    }

    fn main_menu(&mut self, console: &mut Console<'_>) -> Result<Screen> {
        self.session.reset_tally();

        loop {
            console.say("")?;
            console.say("Tic Tac Toe | Main Menu")?;
            console.say(format!("Board Size: {}", self.session.size()))?;
            console.say("  1) Singleplayer")?;
            console.say("  2) Multiplayer")?;
            console.say(format!(
                "  3) Change board size ({}-{})",
                BOARD_SIZES.start(),
                BOARD_SIZES.end()
            ))?;
            console.say("  4) Exit")?;

            let Some(choice) = console.prompt("> ")? else {
                return Ok(Screen::Quit);
            };
            match choice.as_str() {
                "1" => {
                    self.session.set_mode(Mode::SinglePlayer);
                    return Ok(Screen::InGame);
                }
                "2" => {
                    self.session.set_mode(Mode::Multiplayer);
                    return Ok(Screen::InGame);
                }
                "3" => self.choose_size(console)?,
                "4" => return Ok(Screen::Quit),
                other => {
                    warn!(choice = other, "Unknown main menu choice");
                    console.say("Please choose 1-4.")?;
                }
            }
        }
    }

    fn choose_size(&mut self, console: &mut Console<'_>) -> Result<()> {
        let prompt = format!("Board size ({}-{}): ", BOARD_SIZES.start(), BOARD_SIZES.end());
        let Some(answer) = console.prompt(&prompt)? else {
            return Ok(());
        };
        match answer.parse::<usize>() {
            Ok(size) if BOARD_SIZES.contains(&size) => {
                debug!(size, "Board size changed");
                self.session.set_size(size);
            }
            _ => {
                warn!(input = %answer, "Rejected board size");
                console.say(format!(
                    "Board size must be a number from {} to {}.",
                    BOARD_SIZES.start(),
                    BOARD_SIZES.end()
                ))?;
            }
        }
        Ok(())
    }

    fn results(&mut self, console: &mut Console<'_>, result: MatchResult) -> Result<Screen> {
        console.say("")?;
        console.say("Tic Tac Toe | Results")?;
        match result {
            MatchResult::Won(winner) => console.say(format!("{winner} won!"))?,
            MatchResult::Draw => console.say("Draw...")?,
            MatchResult::Abandoned => console.say("Match abandoned.")?,
        }
        console.say("Total Wins:")?;
        console.say(self.session.tally())?;

        loop {
            console.say("  1) Play Again?")?;
            console.say("  2) Main Menu")?;
            console.say("  3) Exit")?;
            let Some(choice) = console.prompt("> ")? else {
                return Ok(Screen::Quit);
            };
            match choice.as_str() {
                "1" => return Ok(Screen::InGame),
                "2" => return Ok(Screen::MainMenu),
                "3" => return Ok(Screen::Quit),
                other => {
                    warn!(choice = other, "Unknown results choice");
                    console.say("Please choose 1-3.")?;
                }
            }
        }
    }
}
