//! Tests for the tic-tac-toe board model.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use strictly_minimax::rules::win::LINES;
use strictly_minimax::{Board, MoveError, Position, Square, TicTacToePlayer as Player};

/// Plays uniformly random legal moves until the game ends, returning every board seen.
fn random_playout(seed: u64) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut seen = vec![board];
    while !board.is_terminal() {
        let pos = *board.legal_moves().choose(&mut rng).unwrap();
        board = board.apply_move(pos).unwrap();
        seen.push(board);
    }
    seen
}

#[test]
fn test_initial_board_is_empty() {
    let board = Board::new();
    assert!(board.squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(board.legal_moves().len(), 9);
    assert_eq!(board.current_player(), Player::X);
    assert_eq!(board.winner(), None);
    assert!(!board.is_terminal());
}

#[test]
fn test_apply_move_never_mutates_original() {
    let board: Board = "X.O/.X./...".parse().unwrap();
    let snapshot = board;
    for pos in board.legal_moves() {
        let next = board.apply_move(pos).unwrap();
        assert_ne!(next, board);
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_apply_move_on_occupied_square_fails() {
    let board: Board = "X........".parse().unwrap();
    let err = board.apply_move(Position::TopLeft).unwrap_err();
    assert_eq!(err, MoveError::InvalidMove(Position::TopLeft));
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_turns_alternate_along_random_games() {
    for seed in 0..50 {
        let boards = random_playout(seed);
        for (ply, board) in boards.iter().enumerate() {
            let (x, o) = (board.count(Player::X), board.count(Player::O));
            assert!(x == o || x == o + 1, "seed {seed} ply {ply}: {x} X vs {o} O");
            assert_eq!(x + o, ply);

            let expected = if ply % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(board.current_player(), expected, "seed {seed} ply {ply}");
        }
    }
}

#[test]
fn test_terminal_iff_winner_or_full() {
    for seed in 0..50 {
        for board in random_playout(seed) {
            let full = board.squares().iter().all(|s| *s != Square::Empty);
            assert_eq!(board.is_terminal(), board.winner().is_some() || full);
        }
    }
}

#[test]
fn test_each_line_reports_its_mark() {
    for (i, line) in LINES.iter().enumerate() {
        let mut board = Board::new();
        for pos in line {
            board.set(*pos, Square::Occupied(Player::O));
        }
        assert_eq!(board.winner(), Some(Player::O), "line {i}");
        assert_eq!(board.score(), -1);
        assert!(board.is_terminal());
    }
}

#[test]
fn test_full_board_without_line() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(board.is_terminal());
    assert_eq!(board.winner(), None);
    assert_eq!(board.score(), 0);
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_eight_filled_without_line_is_ongoing() {
    let board: Board = "XOX/XOO/OX.".parse().unwrap();
    assert_eq!(board.winner(), None);
    assert!(!board.is_terminal());
    assert_eq!(board.legal_moves(), vec![Position::BottomRight]);
}

#[test]
fn test_top_row_x() {
    let mut board = Board::new();
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        board.set(pos, Square::Occupied(Player::X));
    }
    assert_eq!(board.winner(), Some(Player::X));
    assert_eq!(board.score(), 1);
    assert!(board.is_terminal());
}

#[test]
fn test_no_line_means_no_winner_at_any_fill() {
    let board: Board = "XO./..X/O..".parse().unwrap();
    assert_eq!(board.winner(), None);
    assert_eq!(board.score(), 0);
}

#[test]
fn test_board_serializes_as_json() {
    let board: Board = "X...O....".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
