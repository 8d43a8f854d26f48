//! Attack detection.
//!
//! Works backwards from the target square using each piece's attack
//! geometry. This never calls into legality filtering or castling
//! generation, so king-safety checks cannot recurse.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    // A pawn attacks diagonally forward, so look one row behind the target
    // from the attacker's point of view.
    let pawn_row = -attacker_color.pawn_direction();
    for d_col in [-1i8, 1i8] {
        if let Some(sq) = square.offset(pawn_row, d_col) {
            if holds(board, sq, attacker_color, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    let steppers = [
        (&KNIGHT_OFFSETS, PieceKind::Knight),
        (&KING_OFFSETS, PieceKind::King),
    ];
    for (offsets, kind) in steppers {
        for &(d_row, d_col) in offsets {
            if let Some(sq) = square.offset(d_row, d_col) {
                if holds(board, sq, attacker_color, &[kind]) {
                    return true;
                }
            }
        }
    }

    let sliders = [
        (&ROOK_DIRECTIONS, [PieceKind::Rook, PieceKind::Queen]),
        (&BISHOP_DIRECTIONS, [PieceKind::Bishop, PieceKind::Queen]),
    ];
    for (directions, kinds) in sliders {
        for &(d_row, d_col) in directions {
            let mut cursor = square;
            while let Some(sq) = cursor.offset(d_row, d_col) {
                if board.piece_at(sq).is_some() {
                    if holds(board, sq, attacker_color, &kinds) {
                        return true;
                    }
                    break;
                }
                cursor = sq;
            }
        }
    }

    false
}

#[inline]
fn holds(board: &Board, square: Square, color: Color, kinds: &[PieceKind]) -> bool {
    board
        .piece_at(square)
        .is_some_and(|p| p.color == color && kinds.contains(&p.kind))
}
