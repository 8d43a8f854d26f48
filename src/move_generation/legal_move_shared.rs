use crate::game_state::chess_types::*;
use crate::moves::chess_move::{ChessMove, MoveSpecialness};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Single-step movers (knight, king): every on-board target not holding a
/// friendly piece.
pub fn push_step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color == piece.color => {}
            captured => out.push(ChessMove::new(
                from,
                to,
                piece,
                captured,
                MoveSpecialness::Regular,
            )),
        }
    }
}

/// Sliding movers: walk each ray until the edge or the first occupied
/// square, which is included when it holds an enemy piece.
pub fn push_slider_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => out.push(ChessMove::new(
                    from,
                    to,
                    piece,
                    None,
                    MoveSpecialness::Regular,
                )),
                Some(target) => {
                    if target.color != piece.color {
                        out.push(ChessMove::new(
                            from,
                            to,
                            piece,
                            Some(target),
                            MoveSpecialness::Regular,
                        ));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
