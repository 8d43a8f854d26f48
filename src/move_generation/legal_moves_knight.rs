use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_step_moves, KNIGHT_OFFSETS};
use crate::moves::chess_move::ChessMove;

pub fn generate_knight_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<ChessMove>) {
    push_step_moves(board, from, piece, &KNIGHT_OFFSETS, out);
}
