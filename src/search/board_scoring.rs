//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Scores are white-positive; `score_for_side` converts them to the
//! perspective a negamax node needs.

use crate::game_state::chess_types::*;

/// Magnitude of a decided game. Material totals can never reach it.
pub const CHECKMATE: i32 = 1000;
pub const STALEMATE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// White-positive static score of a position whose terminal flags are
    /// current (see `GameState::valid_moves`).
    fn score_board(&self, game_state: &GameState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Light material minus dark material.
    pub fn score_material(board: &Board) -> i32 {
        board
            .grid()
            .iter()
            .flatten()
            .flatten()
            .map(|piece| piece.color.turn_multiplier() * Self::piece_value(piece.kind))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score_board(&self, game_state: &GameState) -> i32 {
        if game_state.is_checkmate() {
            // The side to move has been mated.
            return -game_state.side_to_move().turn_multiplier() * CHECKMATE;
        }
        if game_state.is_stalemate() {
            return STALEMATE;
        }
        Self::score_material(game_state.board())
    }
}

/// Score from `color`'s point of view.
#[inline]
pub fn score_for_side<S: BoardScorer>(scorer: &S, game_state: &GameState, color: Color) -> i32 {
    color.turn_multiplier() * scorer.score_board(game_state)
}

/// Side-to-move score of a search leaf `ply` plies below the root. A mate
/// loses one point per ply so the search prefers the quickest win and the
/// slowest loss.
pub fn score_at_ply<S: BoardScorer>(scorer: &S, game_state: &GameState, ply: u8) -> i32 {
    if game_state.is_checkmate() {
        return -(CHECKMATE - i32::from(ply));
    }
    score_for_side(scorer, game_state, game_state.side_to_move())
}
