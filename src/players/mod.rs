//! Player trait and implementations.

mod first_available;
mod human;
mod minimax;

pub use first_available::FirstAvailable;
pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::games::tictactoe::{Board, Position};
use anyhow::Result;

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses a move for the player to move on `board`.
    ///
    /// The orchestrator only asks on non-terminal boards.
    fn choose_move(&mut self, board: &Board) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
