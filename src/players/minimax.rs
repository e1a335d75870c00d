//! Player backed by the minimax search engine.

use super::Player;
use crate::games::tictactoe::{Board, Position};
use crate::search::Minimax;
use anyhow::{Context, Result};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

/// Plays the move recommended by an exhaustive minimax search.
pub struct MinimaxPlayer<R = StdRng> {
    name: String,
    engine: Minimax<R>,
}

impl<R: Rng> MinimaxPlayer<R> {
    /// Creates a player around an existing engine.
    pub fn new(name: impl Into<String>, engine: Minimax<R>) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }
}

impl<R: Rng> Player for MinimaxPlayer<R> {
    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        let result = self
            .engine
            .search(board)
            .context("Search failed to apply a generated move")?;
        let pos = result
            .best_move
            .ok_or_else(|| anyhow::anyhow!("No move available on a finished board"))?;
        debug!(
            player = %self.name,
            position = %pos,
            score = result.score,
            nodes = result.nodes,
            "Engine chose move"
        );
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
