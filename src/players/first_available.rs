//! Baseline player that takes the first open square.

use super::Player;
use crate::games::tictactoe::{Board, Position};
use anyhow::Result;
use tracing::debug;

/// Picks the first empty square in row-major order.
pub struct FirstAvailable {
    name: String,
}

impl FirstAvailable {
    /// Creates a new first-available player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for FirstAvailable {
    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        let Some(pos) = board.legal_moves().first().copied() else {
            anyhow::bail!("No valid moves available")
        };
        debug!(player = %self.name, position = %pos, "Chose first open square");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
