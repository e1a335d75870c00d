//! Mutually recursive maximize/minimize search.

use crate::games::tictactoe::rules::score::{O_WINS, X_WINS};
use crate::games::tictactoe::{Board, MoveError, Player, Position, Score};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value of a node together with a move that achieves it.
///
/// `best_move` is `None` at terminal boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Minimax value from X's point of view.
    pub score: Score,
    /// A move reaching that value.
    pub best_move: Option<Position>,
}

impl Evaluation {
    fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Result of a search from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The recommended move (None if the game is already over).
    pub best_move: Option<Position>,
    /// Minimax value of the root from X's point of view.
    pub score: Score,
    /// Number of boards visited.
    pub nodes: u64,
}

/// Exhaustive minimax engine.
///
/// Candidate moves are shuffled at every node, so among equally good
/// moves the engine does not always play the same line. Seed the RNG
/// for reproducible choices.
#[derive(Debug, Clone)]
pub struct Minimax<R = StdRng> {
    rng: R,
    nodes: u64,
}

impl Minimax<StdRng> {
    /// Creates an engine seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an engine with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a seeded engine when a seed is given, an entropy-seeded one otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for Minimax<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Minimax<R> {
    /// Creates an engine drawing move order from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, nodes: 0 }
    }

    /// Boards visited since the last call to [`Minimax::search`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches the full game tree below `board`.
    ///
    /// A terminal board yields no move and its own score.
    ///
    /// # Errors
    ///
    /// Propagates `MoveError` from move application. Moves are drawn from
    /// the board's legal moves, so this signals a bug rather than bad input.
    #[instrument(skip(self, board), fields(board = %board.notation()))]
    pub fn search(&mut self, board: &Board) -> Result<SearchResult, MoveError> {
        self.nodes = 0;

        if board.is_terminal() {
            debug!(status = %board.status(), "Board is terminal, no move to search");
            return Ok(SearchResult {
                best_move: None,
                score: board.score(),
                nodes: 0,
            });
        }

        let evaluation = match board.current_player() {
            Player::X => self.maximize(board)?,
            Player::O => self.minimize(board)?,
        };

        debug!(
            best_move = ?evaluation.best_move,
            score = evaluation.score,
            nodes = self.nodes,
            "Search complete"
        );

        Ok(SearchResult {
            best_move: evaluation.best_move,
            score: evaluation.score,
            nodes: self.nodes,
        })
    }

    /// Returns an optimal move for the player to move, or `None` if the game is over.
    pub fn best_move(&mut self, board: &Board) -> Result<Option<Position>, MoveError> {
        Ok(self.search(board)?.best_move)
    }

    /// Best achievable score for X, assuming O replies optimally.
    ///
    /// Stops at the first move that forces a win, since nothing scores higher.
    pub fn maximize(&mut self, board: &Board) -> Result<Evaluation, MoveError> {
        self.nodes += 1;
        if board.is_terminal() {
            return Ok(Evaluation::leaf(board.score()));
        }

        let mut best = Evaluation::leaf(Score::MIN);
        let mut moves = board.legal_moves();
        moves.shuffle(&mut self.rng);

        for mv in moves {
            let reply = self.minimize(&board.apply_move(mv)?)?;
            if reply.score > best.score {
                best = Evaluation {
                    score: reply.score,
                    best_move: Some(mv),
                };
            }

            if best.score == X_WINS {
                break;
            }
        }

        Ok(best)
    }

    /// Best achievable score for O, assuming X replies optimally.
    ///
    /// Stops at the first move that forces a win for O.
    pub fn minimize(&mut self, board: &Board) -> Result<Evaluation, MoveError> {
        self.nodes += 1;
        if board.is_terminal() {
            return Ok(Evaluation::leaf(board.score()));
        }

        let mut best = Evaluation::leaf(Score::MAX);
        let mut moves = board.legal_moves();
        moves.shuffle(&mut self.rng);

        for mv in moves {
            let reply = self.maximize(&board.apply_move(mv)?)?;
            if reply.score < best.score {
                best = Evaluation {
                    score: reply.score,
                    best_move: Some(mv),
                };
            }

            if best.score == O_WINS {
                break;
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_has_no_move() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let mut engine = Minimax::seeded(7);
        let result = engine.search(&board).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, X_WINS);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_maximize_at_terminal_returns_leaf() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut engine = Minimax::seeded(1);
        assert_eq!(engine.maximize(&board).unwrap(), Evaluation::leaf(0));
        assert_eq!(engine.minimize(&board).unwrap(), Evaluation::leaf(0));
    }

    #[test]
    fn test_x_takes_immediate_win() {
        // X to move with the top row open at the right.
        let board: Board = "XX./OO./...".parse().unwrap();
        for seed in 0..10 {
            let mut engine = Minimax::seeded(seed);
            let eval = engine.maximize(&board).unwrap();
            assert_eq!(eval.score, X_WINS);
        }
    }

    #[test]
    fn test_o_blocks_or_wins() {
        // O to move; O can win on the middle row.
        let board: Board = "XX./OO./X..".parse().unwrap();
        let mut engine = Minimax::seeded(3);
        let result = engine.search(&board).unwrap();
        assert_eq!(result.best_move, Some(Position::MiddleRight));
        assert_eq!(result.score, O_WINS);
    }

    #[test]
    fn test_nodes_counted() {
        let board: Board = "XOX/XOO/OX.".parse().unwrap();
        let mut engine = Minimax::seeded(0);
        let result = engine.search(&board).unwrap();
        assert_eq!(result.best_move, Some(Position::BottomRight));
        // Root plus the single child.
        assert_eq!(result.nodes, 2);
        assert_eq!(engine.nodes(), 2);
    }

    #[test]
    fn test_maximize_stops_at_first_win() {
        // Every open square completes a line for X.
        let board: Board = "X.X/OXO/.O.".parse().unwrap();
        for seed in 0..5 {
            let mut engine = Minimax::seeded(seed);
            let result = engine.search(&board).unwrap();
            assert_eq!(result.score, X_WINS);
            // Root plus the first child; the other two are never visited.
            assert_eq!(result.nodes, 2);
        }
    }

    #[test]
    fn test_minimize_stops_at_first_win() {
        // Both open squares complete a line for O.
        let board: Board = "OO./OXX/.XX".parse().unwrap();
        for seed in 0..5 {
            let mut engine = Minimax::seeded(seed);
            let result = engine.search(&board).unwrap();
            assert_eq!(result.score, O_WINS);
            assert_eq!(result.nodes, 2);
        }
    }

    #[test]
    fn test_equal_moves_vary_with_seed() {
        let board: Board = "X.X/OXO/.O.".parse().unwrap();
        let winning = [Position::TopCenter, Position::BottomLeft, Position::BottomRight];

        let chosen: std::collections::HashSet<Position> = (0..20)
            .map(|seed| Minimax::seeded(seed).best_move(&board).unwrap().unwrap())
            .collect();

        assert!(chosen.iter().all(|pos| winning.contains(pos)));
        assert!(chosen.len() > 1, "always chose {:?}", chosen);
    }
}
