//! Game orchestration between players.

use crate::games::tictactoe::{Board, GameStatus, Move, Player as Mark};
use crate::players::Player;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete record of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Final board.
    pub board: Board,
    /// How the game ended.
    pub status: GameStatus,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator<'a> {
    player_x: &'a mut dyn Player,
    player_o: &'a mut dyn Player,
}

impl<'a> Orchestrator<'a> {
    /// Creates a new orchestrator. `player_x` moves first.
    pub fn new(player_x: &'a mut dyn Player, player_o: &'a mut dyn Player) -> Self {
        Self { player_x, player_o }
    }

    /// Plays a game from the empty board to completion.
    pub fn run(&mut self) -> Result<GameRecord> {
        self.run_observed(|_, _| {})
    }

    /// Plays a game, calling `on_move` after every move with the move and the
    /// resulting board.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move or chooses an occupied square.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run_observed<F>(&mut self, mut on_move: F) -> Result<GameRecord>
    where
        F: FnMut(&Move, &Board),
    {
        info!("Starting game");

        let mut board = Board::new();
        let mut moves = Vec::with_capacity(9);

        while !board.is_terminal() {
            let mark = board.current_player();
            let player = match mark {
                Mark::X => &mut *self.player_x,
                Mark::O => &mut *self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let position = player.choose_move(&board)?;
            board = board
                .apply_move(position)
                .with_context(|| format!("{} chose an illegal square", player.name()))?;

            let mv = Move::new(mark, position);
            info!(player = %player.name(), %mv, "Move made");
            on_move(&mv, &board);
            moves.push(mv);
        }

        let status = board.status();
        info!(%status, moves = moves.len(), "Game over");

        Ok(GameRecord {
            moves,
            board,
            status,
        })
    }
}
