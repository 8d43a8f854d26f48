//! Full legal move generation pipeline.
//!
//! Dispatches piece-wise pseudo-legal generation by piece kind, then filters
//! out moves that leave the mover's own king attacked by applying each
//! candidate, testing, and reverting.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Geometrically valid moves for `color`, ignoring own-king safety.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<ChessMove> {
    let mut out = Vec::<ChessMove>::with_capacity(64);

    for (from, piece) in board.pieces_of(color) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(board, from, piece, &mut out),
            PieceKind::Knight => generate_knight_moves(board, from, piece, &mut out),
            PieceKind::Bishop => generate_bishop_moves(board, from, piece, &mut out),
            PieceKind::Rook => generate_rook_moves(board, from, piece, &mut out),
            PieceKind::Queen => generate_queen_moves(board, from, piece, &mut out),
            PieceKind::King => generate_king_moves(board, from, piece, &mut out),
        }
    }

    out
}

/// Pseudo-legal moves that do not leave `color`'s king attacked.
///
/// The board is mutated while each candidate is simulated and is restored
/// before returning.
pub fn legal_moves(board: &mut Board, color: Color) -> Vec<ChessMove> {
    let pseudo = pseudo_legal_moves(board, color);
    let mut legal = Vec::<ChessMove>::with_capacity(pseudo.len());

    for mv in pseudo {
        let undo = apply_move(board, &mv);
        // Illegal if own king is in check after move.
        let exposes_king = is_king_in_check(board, color);
        revert_move(board, &undo);

        if !exposes_king {
            legal.push(mv);
        }
    }

    legal
}
