//! Outcome and utility of a board.

use super::super::{Board, Player};
use super::draw::is_full;
use super::win::check_winner;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Signed outcome from X's point of view: +1, -1 or 0.
pub type Score = i8;

/// Best possible score for X.
pub const X_WINS: Score = 1;

/// Best possible score for O.
pub const O_WINS: Score = -1;

/// Score of a draw, or of any board without a winner.
pub const DRAW: Score = 0;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Derives the game status from the board.
#[instrument(level = "trace")]
pub fn status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

/// Utility of a board: +1 if X has a line, -1 if O has one, 0 otherwise.
///
/// Only meaningful on terminal boards.
#[instrument(level = "trace")]
pub fn score(board: &Board) -> Score {
    match check_winner(board) {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}
