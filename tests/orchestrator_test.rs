//! Tests for players and game orchestration.

use std::io::Cursor;
use strictly_minimax::{
    Board, FirstAvailable, GameStatus, HumanPlayer, Minimax, MinimaxPlayer, Orchestrator, Player,
    Position, TicTacToePlayer as Mark,
};

#[test]
fn test_scripted_human_beats_baseline() {
    let input = Cursor::new("abc\n5\n1\n3\n7\n");
    let mut human = HumanPlayer::new("Alice", input, Vec::new());
    let mut baseline = FirstAvailable::new("Baseline");

    let record = Orchestrator::new(&mut human, &mut baseline).run().unwrap();

    assert_eq!(record.status, GameStatus::Won(Mark::X));
    let positions: Vec<Position> = record.moves.iter().map(|mv| mv.position).collect();
    assert_eq!(
        positions,
        vec![
            Position::Center,
            Position::TopLeft,
            Position::TopRight,
            Position::TopCenter,
            Position::BottomLeft,
        ]
    );

    let transcript = String::from_utf8(human.into_output()).unwrap();
    assert!(transcript.contains("Enter a number from 1 to 9."));
    assert!(transcript.contains("Top-left is already taken."));
}

#[test]
fn test_human_input_closed_is_an_error() {
    let mut human = HumanPlayer::new("Bob", Cursor::new(""), Vec::new());
    let err = human.choose_move(&Board::new()).unwrap_err();
    assert!(err.to_string().contains("Input closed"));
}

#[test]
fn test_moves_alternate_and_observer_sees_each() {
    let mut x = MinimaxPlayer::new("X engine", Minimax::seeded(3));
    let mut o = FirstAvailable::new("Baseline");

    let mut seen = Vec::new();
    let record = Orchestrator::new(&mut x, &mut o)
        .run_observed(|mv, board| seen.push((*mv, *board)))
        .unwrap();

    assert_eq!(seen.len(), record.moves.len());
    assert_eq!(seen.last().map(|(_, b)| *b), Some(record.board));
    for (ply, mv) in record.moves.iter().enumerate() {
        let expected = if ply % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(mv.player, expected);
    }
    assert!(record.board.is_terminal());
}

#[test]
fn test_engine_self_play_draws() {
    let mut x = MinimaxPlayer::new("X", Minimax::seeded(8));
    let mut o = MinimaxPlayer::new("O", Minimax::seeded(9));
    let record = Orchestrator::new(&mut x, &mut o).run().unwrap();
    assert_eq!(record.status, GameStatus::Draw);
    assert_eq!(record.moves.len(), 9);
}

#[test]
fn test_game_record_json() {
    let mut x = FirstAvailable::new("X");
    let mut o = FirstAvailable::new("O");
    let record = Orchestrator::new(&mut x, &mut o).run().unwrap();

    // Both sides fill squares in order; X completes the anti-diagonal.
    assert_eq!(record.status, GameStatus::Won(Mark::X));

    let json = serde_json::to_string(&record).unwrap();
    let back: strictly_minimax::GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
