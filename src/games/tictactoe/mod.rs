//! Tic-tac-toe board model.

mod action;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rules::{GameStatus, Score};
pub use types::{Board, ParseBoardError, Player, Square};
