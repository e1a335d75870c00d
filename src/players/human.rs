//! Human player reading squares from a line-oriented input.

use super::Player;
use crate::games::tictactoe::{Board, Position};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Human player typing square numbers (1-9) or labels.
///
/// Input and output are generic so the CLI can use stdin/stdout and tests
/// can use in-memory buffers.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        writeln!(self.output, "\n{}\n", board.display())?;

        loop {
            write!(self.output, "{}, choose a square (1-9): ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} chose a move", self.name);
            }

            match Position::from_label_or_number(&line) {
                Some(pos) if board.is_empty(pos) => return Ok(pos),
                Some(pos) => {
                    debug!(position = %pos, "Human picked an occupied square");
                    writeln!(self.output, "{} is already taken.", pos.label())?;
                }
                None => {
                    debug!(input = %line.trim(), "Unrecognized square");
                    writeln!(self.output, "Enter a number from 1 to 9.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
