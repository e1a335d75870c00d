//! Turn derivation for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns the player whose turn it is.
///
/// The empty board belongs to X. Otherwise the side with fewer marks
/// moves; with equal counts X moves.
#[instrument(level = "trace")]
pub fn current_player(board: &Board) -> Player {
    if *board == Board::new() {
        return Player::X;
    }

    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}
