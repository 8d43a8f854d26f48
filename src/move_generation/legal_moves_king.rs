use crate::game_state::chess_rules::{
    back_row, king_home, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_step_moves, KING_OFFSETS};
use crate::moves::chess_move::{ChessMove, MoveSpecialness};

pub fn generate_king_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<ChessMove>) {
    push_step_moves(board, from, piece, &KING_OFFSETS, out);
    generate_castling_moves(board, from, piece, out);
}

struct CastleSide {
    right: CastlingRights,
    rook_col: u8,
    /// Columns that must be empty.
    between: &'static [u8],
    /// Columns the king stands on, crosses, or lands on.
    king_path: &'static [u8],
    king_to_col: u8,
}

static KINGSIDE: [CastleSide; 2] = [
    CastleSide {
        right: CASTLE_LIGHT_KINGSIDE,
        rook_col: KINGSIDE_ROOK_COL,
        between: &[5, 6],
        king_path: &[4, 5, 6],
        king_to_col: 6,
    },
    CastleSide {
        right: CASTLE_DARK_KINGSIDE,
        rook_col: KINGSIDE_ROOK_COL,
        between: &[5, 6],
        king_path: &[4, 5, 6],
        king_to_col: 6,
    },
];

static QUEENSIDE: [CastleSide; 2] = [
    CastleSide {
        right: CASTLE_LIGHT_QUEENSIDE,
        rook_col: QUEENSIDE_ROOK_COL,
        between: &[1, 2, 3],
        king_path: &[4, 3, 2],
        king_to_col: 2,
    },
    CastleSide {
        right: CASTLE_DARK_QUEENSIDE,
        rook_col: QUEENSIDE_ROOK_COL,
        between: &[1, 2, 3],
        king_path: &[4, 3, 2],
        king_to_col: 2,
    },
];

fn generate_castling_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<ChessMove>) {
    let side = king.color;
    if from != king_home(side) {
        return;
    }

    let row = back_row(side);
    let enemy = side.opposite();
    let index = match side {
        Color::Light => 0,
        Color::Dark => 1,
    };

    for castle in [&KINGSIDE[index], &QUEENSIDE[index]] {
        if !board.has_castling_right(castle.right) {
            continue;
        }
        if board.piece_at(Square::at(row, castle.rook_col)) != Some(Piece::new(side, PieceKind::Rook)) {
            continue;
        }
        if castle
            .between
            .iter()
            .any(|&col| board.piece_at(Square::at(row, col)).is_some())
        {
            continue;
        }
        if castle
            .king_path
            .iter()
            .any(|&col| is_square_attacked(board, Square::at(row, col), enemy))
        {
            continue;
        }

        out.push(ChessMove::new(
            from,
            Square::at(row, castle.king_to_col),
            king,
            None,
            MoveSpecialness::Castling,
        ));
    }
}

/// Rook relocation `(from, to)` for a castling move landing on `king_to`.
pub fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    let row = king_to.row() as u8;
    if king_to.col() == 6 {
        (Square::at(row, KINGSIDE_ROOK_COL), Square::at(row, 5))
    } else {
        (Square::at(row, QUEENSIDE_ROOK_COL), Square::at(row, 3))
    }
}
