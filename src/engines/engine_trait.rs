//! Engine abstraction layer.
//!
//! Move-selection strategies sit behind a single trait so the self-play
//! driver and benchmarks can pick one at runtime.

use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal moves.
    pub best_move: Option<ChessMove>,
    /// Mover-relative score, for engines that compute one.
    pub score: Option<i32>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        Err(ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    /// Choose a move for the side to move. The game is borrowed mutably for
    /// move generation and search but is left unchanged.
    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput>;
}
