//! Strictly Minimax - Unified CLI
//!
//! Perfect-play tic-tac-toe from the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use strictly_minimax::{
    Board, EngineConfig, GameRecord, GameStatus, HumanPlayer, Minimax, MinimaxPlayer,
    Orchestrator, TicTacToePlayer,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(&cli.config)?;
    initialize_tracing(&config);

    match cli.command {
        Command::BestMove { board, seed, json } => {
            run_best_move(board, config.with_seed_override(seed), json)
        }
        Command::SelfPlay { games, seed, json } => {
            run_self_play(games, config.with_seed_override(seed), json)
        }
        Command::Play { human_mark, seed } => run_play(
            config
                .with_seed_override(seed)
                .with_human_mark_override(human_mark),
        ),
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the configured filter.
fn initialize_tracing(config: &EngineConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
}

/// Print the recommended move for a board
#[instrument(skip(board, config), fields(board = %board.notation()))]
fn run_best_move(board: Board, config: EngineConfig, json: bool) -> Result<()> {
    let mut engine = Minimax::from_seed(*config.seed());
    let result = engine.search(&board)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    match result.best_move {
        Some(pos) => println!(
            "{} to move: play {} (score {}, {} nodes)",
            board.current_player(),
            pos,
            result.score,
            result.nodes
        ),
        None => println!("Game over ({}): no move", board.status()),
    }

    Ok(())
}

/// Let the engine play itself and tally the results
#[instrument(skip(config))]
fn run_self_play(games: u32, config: EngineConfig, json: bool) -> Result<()> {
    // One seeded stream per side keeps whole runs reproducible.
    let (seed_x, seed_o) = match *config.seed() {
        Some(seed) => (Some(seed), Some(seed.wrapping_add(1))),
        None => (None, None),
    };
    let mut player_x = MinimaxPlayer::new("Minimax X", Minimax::from_seed(seed_x));
    let mut player_o = MinimaxPlayer::new("Minimax O", Minimax::from_seed(seed_o));

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for game in 1..=games {
        let record = Orchestrator::new(&mut player_x, &mut player_o).run()?;

        match record.status {
            GameStatus::Won(TicTacToePlayer::X) => x_wins += 1,
            GameStatus::Won(TicTacToePlayer::O) => o_wins += 1,
            _ => draws += 1,
        }

        if json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            print_record(game, &record);
        }
    }

    info!(x_wins, o_wins, draws, "Self-play finished");
    if !json {
        println!("\nX wins: {x_wins}  O wins: {o_wins}  Draws: {draws}");
    }

    Ok(())
}

fn print_record(game: u32, record: &GameRecord) {
    let line = record
        .moves
        .iter()
        .map(|mv| format!("{}{}", mv.player, mv.position.to_index() + 1))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Game {game}: {line} => {}", record.status);
}

/// Interactive game against the engine on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: EngineConfig) -> Result<()> {
    let human_mark = *config.human_mark();
    let mut human = HumanPlayer::new("You", io::stdin().lock(), io::stdout());
    let mut engine = MinimaxPlayer::new("Minimax", Minimax::from_seed(*config.seed()));

    let mut orchestrator = match human_mark {
        TicTacToePlayer::X => Orchestrator::new(&mut human, &mut engine),
        TicTacToePlayer::O => Orchestrator::new(&mut engine, &mut human),
    };

    let record = orchestrator.run_observed(|mv, _board| {
        if mv.player != human_mark {
            println!("Engine plays {}", mv.position);
        }
    })?;

    let mut out = io::stdout();
    writeln!(out, "\n{}\n", record.board.display())?;
    let verdict = match record.status {
        GameStatus::Won(mark) if mark == human_mark => "You win!".to_string(),
        GameStatus::Won(_) => "The engine wins.".to_string(),
        status => format!("Game over: {status}"),
    };
    writeln!(out, "{verdict}").context("Failed to write result")?;

    Ok(())
}
