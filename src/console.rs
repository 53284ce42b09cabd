//! Line-oriented console I/O shared by menus and human players.

use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use t3sc::GameState;
use tracing::instrument;

/// Borrowed input and output streams.
///
/// Menus, the match loop and human players all read from the same input, so
/// the console is passed down rather than owned by any one of them.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    /// Creates a console over the given streams.
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write to console")
    }

    /// Writes `prompt` and reads one trimmed line.
    ///
    /// Returns `None` once the input is exhausted.
    #[instrument(skip(self))]
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Draws the board with 1-based row and column labels.
    pub fn render(&mut self, game: &GameState) -> Result<()> {
        let size = game.size();
        let mut header = String::from("   ");
        for col in 1..=size {
            header.push_str(&format!("{col:>3}"));
        }
        self.say(header)?;

        for (idx, row) in game.board().rows().enumerate() {
            let mut line = format!("{:>3}", idx + 1);
            for cell in row {
                let symbol = cell.player().map_or('.', |p| p.mark());
                line.push_str(&format!("{symbol:>3}"));
            }
            self.say(line)?;
        }
        Ok(())
    }
}
