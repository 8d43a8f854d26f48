//! Move value type.
//!
//! A `ChessMove` records everything needed to apply and invert one ply:
//! endpoints, the moving piece, the captured piece, and any special rule.
//! Equality is structural, so a candidate built from two clicked squares can
//! be matched against the generated legal set.

use std::fmt;

use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{king_home, promotion_row};
use crate::game_state::chess_types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveSpecialness {
    /// Used for moving and capturing.
    Regular,
    /// Pawn reaches the last row; the kind is the piece after promotion.
    Promote(PieceKind),
    /// Pawn captures the double-stepped pawn beside it.
    EnPassant,
    /// King moves two columns; the rook is relocated alongside.
    Castling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChessMove {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    specialness: MoveSpecialness,
}

impl ChessMove {
    #[inline]
    pub(crate) const fn new(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
        specialness: MoveSpecialness,
    ) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            specialness,
        }
    }

    /// Build a candidate move from two selected squares, reading the moving
    /// piece, the captured piece, and the special rule off the live board.
    ///
    /// Pawn moves onto the last row promote to a queen; use
    /// [`ChessMove::with_promotion`] to pick another piece.
    pub fn from_squares(start: Square, end: Square, board: &Board) -> ChessResult<Self> {
        let piece_moved = board
            .piece_at(start)
            .ok_or_else(|| ChessError::EmptySquare(start.to_string()))?;
        let color = piece_moved.color;
        let target = board.piece_at(end);

        let mv = match piece_moved.kind {
            PieceKind::Pawn
                if start.col() != end.col()
                    && target.is_none()
                    && board.en_passant_square() == Some(end) =>
            {
                let victim = Square::at(start.row() as u8, end.col() as u8);
                Self::new(
                    start,
                    end,
                    piece_moved,
                    board.piece_at(victim),
                    MoveSpecialness::EnPassant,
                )
            }
            PieceKind::Pawn if end.row() == promotion_row(color) as usize => Self::new(
                start,
                end,
                piece_moved,
                target,
                MoveSpecialness::Promote(PieceKind::Queen),
            ),
            PieceKind::King
                if start == king_home(color)
                    && end.row() == start.row()
                    && start.col().abs_diff(end.col()) == 2 =>
            {
                Self::new(start, end, piece_moved, target, MoveSpecialness::Castling)
            }
            _ => Self::new(start, end, piece_moved, target, MoveSpecialness::Regular),
        };
        Ok(mv)
    }

    /// Replace the promotion piece. Non-promotion moves are returned unchanged.
    pub fn with_promotion(self, kind: PieceKind) -> Self {
        match self.specialness {
            MoveSpecialness::Promote(_) => Self {
                specialness: MoveSpecialness::Promote(kind),
                ..self
            },
            _ => self,
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn specialness(&self) -> MoveSpecialness {
        self.specialness
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        match self.specialness {
            MoveSpecialness::Promote(kind) => Some(kind),
            _ => None,
        }
    }

    /// Square of the pawn removed by an en-passant capture: beside the
    /// start square, on the destination column.
    #[inline]
    pub(crate) fn en_passant_victim(&self) -> Square {
        Square::at(self.start.row() as u8, self.end.col() as u8)
    }

    /// Long algebraic text for display and logging, e.g. `e2e4` or `e7e8q`.
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.code().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn from_squares_reads_pieces_off_the_board() {
        let board = Board::starting_position();
        let mv = ChessMove::from_squares(sq("e2"), sq("e4"), &board).expect("e2 holds a pawn");
        assert_eq!(mv.piece_moved(), Piece::new(Color::Light, PieceKind::Pawn));
        assert_eq!(mv.piece_captured(), None);
        assert_eq!(mv.specialness(), MoveSpecialness::Regular);
        assert_eq!(mv.notation(), "e2e4");
    }

    #[test]
    fn from_squares_rejects_empty_start() {
        let board = Board::starting_position();
        let err = ChessMove::from_squares(sq("e4"), sq("e5"), &board).expect_err("e4 is empty");
        assert_eq!(err, ChessError::EmptySquare("e4".to_owned()));
    }

    #[test]
    fn from_squares_detects_special_moves() {
        let board = Board::from_fen("r3k2r/1P6/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1")
            .expect("FEN should parse");

        let ep = ChessMove::from_squares(sq("e5"), sq("d6"), &board).expect("e5 holds a pawn");
        assert_eq!(ep.specialness(), MoveSpecialness::EnPassant);
        assert_eq!(
            ep.piece_captured(),
            Some(Piece::new(Color::Dark, PieceKind::Pawn))
        );
        assert_eq!(ep.en_passant_victim(), sq("d5"));

        let castle = ChessMove::from_squares(sq("e1"), sq("g1"), &board).expect("e1 holds the king");
        assert_eq!(castle.specialness(), MoveSpecialness::Castling);

        let promo = ChessMove::from_squares(sq("b7"), sq("a8"), &board)
            .expect("b7 holds a pawn")
            .with_promotion(PieceKind::Knight);
        assert_eq!(promo.promotion(), Some(PieceKind::Knight));
        assert_eq!(
            promo.piece_captured(),
            Some(Piece::new(Color::Dark, PieceKind::Rook))
        );
        assert_eq!(promo.notation(), "b7a8n");
    }
}
