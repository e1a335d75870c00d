//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Applying one yields a
//! fresh board so sibling lines of play never observe each other.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Invalid move: {} is already occupied", _0)]
    InvalidMove(Position),
}

impl std::error::Error for MoveError {}

impl Board {
    /// Returns every empty position.
    ///
    /// Callers should treat the result as a set; the search shuffles it.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns a new board with the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::InvalidMove` if the square is already occupied.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(&self, pos: Position) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::InvalidMove(pos));
        }

        let mut next = *self;
        next.set(pos, Square::Occupied(self.current_player()));
        Ok(next)
    }
}
