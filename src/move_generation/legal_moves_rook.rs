//! Rook move generation along ranks and files.
//!
//! Each ray stops at the first occupied square; an enemy piece there is
//! captured, a friendly piece blocks.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_slider_moves, ROOK_DIRECTIONS};
use crate::moves::chess_move::ChessMove;

pub fn generate_rook_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<ChessMove>) {
    push_slider_moves(board, from, piece, &ROOK_DIRECTIONS, out);
}
