//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine can query them at every node.

pub mod draw;
pub mod score;
pub mod turn;
pub mod win;

pub use draw::{is_full, is_terminal};
pub use score::{GameStatus, Score, score, status};
pub use turn::current_player;
pub use win::check_winner;

use super::{Board, Player};

// ─────────────────────────────────────────────────────────────
//  Board helper methods
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        current_player(self)
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    /// Checks if the game is over.
    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }

    /// Utility of the board from X's point of view.
    pub fn score(&self) -> Score {
        score(self)
    }

    /// Derives the game status.
    pub fn status(&self) -> GameStatus {
        status(self)
    }
}
