//! Mailbox board representation.
//!
//! `Board` stores an 8x8 grid of optional pieces together with the side to
//! move, castling rights, and the en-passant target. It performs no legality
//! checks; rules live in `move_generation`.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_parser::parse_fen;

pub type Grid = [[Option<Piece>; 8]; 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// No pieces, light to move, no castling rights.
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
        }
    }

    /// Standard starting position.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in back_rank.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Dark, kind));
            board.squares[1][col] = Some(Piece::new(Color::Dark, PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::Light, PieceKind::Pawn));
            board.squares[7][col] = Some(Piece::new(Color::Light, kind));
        }
        board.castling_rights = CASTLE_ALL;
        board
    }

    pub fn from_fen(fen: &str) -> crate::game_state::chess_errors::ChessResult<Self> {
        parse_fen(fen)
    }

    /// Read-only view of the grid, indexed `[row][col]`.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.squares
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row()][square.col()] = piece;
    }

    /// Move whatever sits on `from` to `to`, overwriting `to`. Returns the
    /// previous occupant of `to`.
    #[inline]
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.piece_at(from);
        let replaced = self.piece_at(to);
        self.set_piece(from, None);
        self.set_piece(to, moving);
        replaced
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights & CASTLE_ALL;
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn set_en_passant_square(&mut self, square: Option<Square>) {
        self.en_passant_square = square;
    }

    /// Squares occupied by `color`, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn count_pieces(&self, piece: Piece) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|content| **content == Some(piece))
            .count()
    }
}
