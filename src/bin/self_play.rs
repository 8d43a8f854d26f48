//! Engine-vs-engine self play from the command line.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --depth 3 --black random`
//! `RUST_LOG=mailbox_chess=debug cargo run --release --bin self_play`

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mailbox_chess::engines::engine_negamax::NegamaxEngine;
use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::game_state::chess_errors::ChessResult;
use mailbox_chess::game_state::chess_types::*;
use mailbox_chess::game_state::game_state::GameStatus;
use mailbox_chess::search::negamax::{SearchConfig, DEFAULT_DEPTH};
use mailbox_chess::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Random,
    Negamax,
}

#[derive(Debug, Parser)]
#[command(name = "self_play", about = "Play two engines against each other")]
struct Cli {
    /// Search depth in plies for negamax players.
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Stop after this many plies if the game has not ended.
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Seed for move shuffling and random players. Omit for a fresh game each run.
    #[arg(long)]
    seed: Option<u64>,

    /// Search moves in generation order instead of shuffling them.
    #[arg(long)]
    no_shuffle: bool,

    /// Start from this FEN instead of the standard position.
    #[arg(long)]
    fen: Option<String>,

    #[arg(long, value_enum, default_value_t = EngineKind::Negamax)]
    white: EngineKind,

    #[arg(long, value_enum, default_value_t = EngineKind::Negamax)]
    black: EngineKind,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn build_engine(kind: EngineKind, config: SearchConfig) -> Box<dyn Engine> {
    match kind {
        EngineKind::Random => Box::new(RandomEngine::new(config.seed)),
        EngineKind::Negamax => Box::new(NegamaxEngine::new(config)),
    }
}

fn main() -> ChessResult<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SearchConfig {
        depth: cli.depth,
        shuffle_moves: !cli.no_shuffle,
        seed: cli.seed,
    };
    // Offset the second seed so two seeded players do not mirror each other.
    let black_config = SearchConfig {
        seed: config.seed.map(|seed| seed.wrapping_add(1)),
        ..config
    };
    let mut white = build_engine(cli.white, config);
    let mut black = build_engine(cli.black, black_config);

    let mut game = match cli.fen.as_deref() {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };

    info!(
        white = white.name(),
        black = black.name(),
        depth = cli.depth,
        "starting self play"
    );

    while game.ply_count() < cli.max_plies {
        let engine = if game.white_to_move() {
            &mut white
        } else {
            &mut black
        };
        let out = engine.choose_move(&mut game)?;
        let Some(mv) = out.best_move else {
            break;
        };

        let ply = game.ply_count() + 1;
        match out.score {
            Some(score) => println!("{ply:>3}. {mv} ({score}, {} nodes)", out.nodes),
            None => println!("{ply:>3}. {mv}"),
        }
        game.make_move(&mv);
    }

    // Refresh the terminal flags for the final position.
    game.valid_moves();
    let status = game.status();

    println!();
    println!("{}", render_game_state(&game));
    println!("{}", game.to_fen());
    match status {
        GameStatus::Checkmate { winner } => println!("checkmate, {winner:?} wins"),
        GameStatus::Stalemate => println!("stalemate"),
        GameStatus::InProgress { .. } => println!("stopped after {} plies", game.ply_count()),
    }
    info!(
        plies = game.ply_count(),
        finished = status.is_terminal(),
        "self play ended"
    );

    Ok(())
}
