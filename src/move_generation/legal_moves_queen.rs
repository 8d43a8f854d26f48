use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    push_slider_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::moves::chess_move::ChessMove;

pub fn generate_queen_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<ChessMove>) {
    push_slider_moves(board, from, piece, &ROOK_DIRECTIONS, out);
    push_slider_moves(board, from, piece, &BISHOP_DIRECTIONS, out);
}
