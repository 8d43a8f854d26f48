use crate::game_state::chess_rules::{pawn_start_row, promotion_row};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::{ChessMove, MoveSpecialness};

pub fn generate_pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<ChessMove>) {
    let side = piece.color;
    let dir = side.pawn_direction();

    if let Some(to) = from.offset(dir, 0) {
        if board.piece_at(to).is_none() {
            push_pawn_move(from, to, piece, None, out);

            if from.row() == pawn_start_row(side) as usize {
                if let Some(two_step) = to.offset(dir, 0) {
                    if board.piece_at(two_step).is_none() {
                        out.push(ChessMove::new(
                            from,
                            two_step,
                            piece,
                            None,
                            MoveSpecialness::Regular,
                        ));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };

        match board.piece_at(to) {
            Some(target) if target.color != side => {
                push_pawn_move(from, to, piece, Some(target), out);
            }
            Some(_) => {}
            None if board.en_passant_square() == Some(to) => {
                let victim_square = Square::at(from.row() as u8, to.col() as u8);
                let victim = board.piece_at(victim_square);
                if victim == Some(Piece::new(side.opposite(), PieceKind::Pawn)) {
                    out.push(ChessMove::new(
                        from,
                        to,
                        piece,
                        victim,
                        MoveSpecialness::EnPassant,
                    ));
                }
            }
            None => {}
        }
    }
}

fn push_pawn_move(
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    out: &mut Vec<ChessMove>,
) {
    if to.row() == promotion_row(piece.color) as usize {
        for promo in PROMOTION_KINDS {
            out.push(ChessMove::new(
                from,
                to,
                piece,
                captured,
                MoveSpecialness::Promote(promo),
            ));
        }
    } else {
        out.push(ChessMove::new(
            from,
            to,
            piece,
            captured,
            MoveSpecialness::Regular,
        ));
    }
}
