//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::{Board, TicTacToePlayer};

/// Strictly Minimax - perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Exhaustive minimax search for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to engine configuration file (TOML)
    #[arg(long, global = true, default_value = "strictly_minimax.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend a move for the player to move
    BestMove {
        /// Board in row-major notation, e.g. "X.O/.X./..O" ('.' is empty)
        board: Board,

        /// Seed for move-order shuffling (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the search result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play against itself
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Seed for move-order shuffling (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print each game record as a JSON line
        #[arg(long)]
        json: bool,
    },

    /// Play against the engine in the terminal
    Play {
        /// Mark you play (X moves first; overrides config)
        #[arg(long)]
        human_mark: Option<TicTacToePlayer>,

        /// Seed for move-order shuffling (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
}
