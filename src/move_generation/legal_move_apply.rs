//! Reversible move application.
//!
//! `apply_move` mutates the board in place and returns the `UndoState`
//! needed to invert it; `revert_move` consumes that record and restores the
//! exact prior board. Both legality filtering and `GameState` use this pair,
//! so no board copies are taken during generation or search.

use crate::game_state::chess_rules::{back_row, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_king::castling_rook_squares;
use crate::moves::chess_move::{ChessMove, MoveSpecialness};

pub fn apply_move(board: &mut Board, mv: &ChessMove) -> UndoState {
    let undo = UndoState {
        mv: *mv,
        prev_side_to_move: board.side_to_move,
        prev_castling_rights: board.castling_rights,
        prev_en_passant_square: board.en_passant_square,
    };

    let moved = mv.piece_moved();
    let (from, to) = (mv.start(), mv.end());

    board.set_piece(from, None);

    let placed = match mv.specialness() {
        MoveSpecialness::EnPassant => {
            board.set_piece(mv.en_passant_victim(), None);
            moved
        }
        MoveSpecialness::Castling => {
            let (rook_from, rook_to) = castling_rook_squares(to);
            board.relocate(rook_from, rook_to);
            moved
        }
        MoveSpecialness::Promote(kind) => Piece::new(moved.color, kind),
        MoveSpecialness::Regular => moved,
    };
    board.set_piece(to, Some(placed));

    update_castling_rights(board, mv);

    board.en_passant_square =
        if moved.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            Some(Square::at(((from.row() + to.row()) / 2) as u8, from.col() as u8))
        } else {
            None
        };

    board.side_to_move = moved.color.opposite();

    undo
}

pub fn revert_move(board: &mut Board, undo: &UndoState) {
    let mv = &undo.mv;
    let (from, to) = (mv.start(), mv.end());

    board.set_piece(from, Some(mv.piece_moved()));

    match mv.specialness() {
        MoveSpecialness::EnPassant => {
            board.set_piece(to, None);
            board.set_piece(mv.en_passant_victim(), mv.piece_captured());
        }
        MoveSpecialness::Castling => {
            board.set_piece(to, None);
            let (rook_from, rook_to) = castling_rook_squares(to);
            board.relocate(rook_to, rook_from);
        }
        MoveSpecialness::Promote(_) | MoveSpecialness::Regular => {
            board.set_piece(to, mv.piece_captured());
        }
    }

    board.castling_rights = undo.prev_castling_rights;
    board.en_passant_square = undo.prev_en_passant_square;
    board.side_to_move = undo.prev_side_to_move;
}

fn update_castling_rights(board: &mut Board, mv: &ChessMove) {
    let moved = mv.piece_moved();

    if moved.kind == PieceKind::King {
        board.castling_rights &= match moved.color {
            Color::Light => !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE),
            Color::Dark => !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE),
        };
    }

    if moved.kind == PieceKind::Rook {
        board.castling_rights &= !rook_corner_right(mv.start());
    }

    // Capturing a rook on its original square also removes the right.
    if mv.piece_captured().is_some_and(|p| p.kind == PieceKind::Rook) {
        board.castling_rights &= !rook_corner_right(mv.end());
    }
}

fn rook_corner_right(square: Square) -> CastlingRights {
    let corner = |color: Color, col: u8| Square::at(back_row(color), col);
    if square == corner(Color::Light, KINGSIDE_ROOK_COL) {
        CASTLE_LIGHT_KINGSIDE
    } else if square == corner(Color::Light, QUEENSIDE_ROOK_COL) {
        CASTLE_LIGHT_QUEENSIDE
    } else if square == corner(Color::Dark, KINGSIDE_ROOK_COL) {
        CASTLE_DARK_KINGSIDE
    } else if square == corner(Color::Dark, QUEENSIDE_ROOK_COL) {
        CASTLE_DARK_QUEENSIDE
    } else {
        0
    }
}
