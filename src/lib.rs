//! Strictly Minimax - perfect-play tic-tac-toe
//!
//! This library computes optimal tic-tac-toe moves by exhaustive minimax
//! search down to terminal boards.
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe board model (turns, legal moves, wins, scores)
//! - **Search**: mutually recursive maximize/minimize over the full game tree
//! - **Players**: engine, baseline and human players behind one trait
//! - **Orchestrator**: plays two players against each other
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Minimax, Position};
//!
//! # fn example() -> anyhow::Result<()> {
//! let board: Board = "XX./OO./...".parse()?;
//! let mut engine = Minimax::seeded(42);
//! assert_eq!(engine.best_move(&board)?, Some(Position::TopRight));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;
mod search;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameStatus, Move, MoveError, ParseBoardError, Player as TicTacToePlayer, Position,
    Score, Square, rules,
};

// Crate-level exports - Search engine
pub use search::{Evaluation, Minimax, SearchResult};

// Crate-level exports - Players and orchestration
pub use orchestrator::{GameRecord, Orchestrator};
pub use players::{FirstAvailable, HumanPlayer, MinimaxPlayer, Player};
