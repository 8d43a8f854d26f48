//! Game state: board plus reversible move history.
//!
//! `GameState` is the only owner of a live `Board`. It is mutated through
//! `make_move` / `undo_move`, which keep a stack of `UndoState` records so
//! every applied move can be inverted exactly. Checkmate and stalemate flags
//! are refreshed as a side effect of `valid_moves`.

use tracing::{debug, trace};

use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;

/// Outcome as seen from the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    move_log: Vec<UndoState>,
    checkmate: bool,
    stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, light to move.
    #[inline]
    pub fn new_game() -> Self {
        Self::with_board(Board::starting_position())
    }

    /// Start from a constructed position. Each side must have exactly one
    /// king, and the side that just moved cannot be left in check.
    pub fn from_board(board: Board) -> ChessResult<Self> {
        for color in [Color::Light, Color::Dark] {
            let kings = board.count_pieces(Piece::new(color, PieceKind::King));
            if kings != 1 {
                return Err(ChessError::InvalidPosition(format!(
                    "{color:?} has {kings} kings"
                )));
            }
        }

        let waiting = board.side_to_move().opposite();
        if is_king_in_check(&board, waiting) {
            return Err(ChessError::InvalidPosition(format!(
                "{waiting:?} king is in check with {:?} to move",
                board.side_to_move()
            )));
        }

        Ok(Self::with_board(board))
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let board = Board::from_fen(fen)?;
        trace!(fen, "game state from FEN");
        Self::from_board(board)
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            move_log: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    /// Discard the game and return to the starting position.
    pub fn reset(&mut self) {
        debug!(plies = self.move_log.len(), "resetting game");
        *self = Self::new_game();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.board.side_to_move() == Color::Light
    }

    /// Set by the latest `valid_moves` call.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Set by the latest `valid_moves` call.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_in_check(&self.board, self.board.side_to_move())
    }

    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move().opposite(),
            }
        } else if self.stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress {
                in_check: self.in_check(),
            }
        }
    }

    /// Applied moves, oldest first.
    pub fn move_log(&self) -> impl DoubleEndedIterator<Item = &ChessMove> + '_ {
        self.move_log.iter().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_log.last().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.move_log.len()
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(&self.board)
    }

    /// Apply a move. No legality check is made; `mv` must come from
    /// `valid_moves` on the current position.
    pub fn make_move(&mut self, mv: &ChessMove) {
        let undo = apply_move(&mut self.board, mv);
        self.move_log.push(undo);
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Invert the most recent move and return it.
    pub fn undo_move(&mut self) -> ChessResult<ChessMove> {
        let undo = self.move_log.pop().ok_or(ChessError::NoHistory)?;
        revert_move(&mut self.board, &undo);
        self.checkmate = false;
        self.stalemate = false;
        Ok(undo.mv)
    }

    /// Legal moves for the side to move. Recomputed on every call; also
    /// refreshes the checkmate and stalemate flags.
    pub fn valid_moves(&mut self) -> Vec<ChessMove> {
        let side = self.board.side_to_move();
        let moves = legal_moves(&mut self.board, side);

        if moves.is_empty() {
            let in_check = is_king_in_check(&self.board, side);
            self.checkmate = in_check;
            self.stalemate = !in_check;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        moves
    }

    /// Legal moves starting on `square`, for destination highlighting.
    pub fn valid_moves_from(&mut self, square: Square) -> Vec<ChessMove> {
        self.valid_moves()
            .into_iter()
            .filter(|mv| mv.start() == square)
            .collect()
    }

    /// Apply the generated legal move equal to `candidate`, if there is one.
    pub fn make_move_if_valid(&mut self, candidate: &ChessMove) -> Option<ChessMove> {
        let found = self.valid_moves().into_iter().find(|mv| mv == candidate);
        match found {
            Some(mv) => {
                self.make_move(&mv);
                Some(mv)
            }
            None => {
                trace!(candidate = %candidate, "rejected move not in legal set");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, GameStatus};
    use crate::game_state::chess_errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::{ChessMove, MoveSpecialness};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn candidate(game: &GameState, from: &str, to: &str) -> ChessMove {
        ChessMove::from_squares(sq(from), sq(to), game.board()).expect("from square holds a piece")
    }

    fn play(game: &mut GameState, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            let mv = candidate(game, from, to);
            game.make_move_if_valid(&mv)
                .unwrap_or_else(|| panic!("{from}{to} should be legal"));
        }
    }

    #[test]
    fn new_game_has_twenty_moves() {
        let mut game = GameState::new_game();
        assert!(game.white_to_move());
        assert_eq!(game.valid_moves().len(), 20);
        assert_eq!(game.status(), GameStatus::InProgress { in_check: false });
    }

    #[test]
    fn undo_on_empty_log_reports_no_history() {
        let mut game = GameState::new_game();
        assert_eq!(game.undo_move(), Err(ChessError::NoHistory));
        assert_eq!(game.board(), &Board::starting_position());
    }

    #[test]
    fn side_to_move_alternates_and_undo_restores() {
        let mut game = GameState::new_game();
        let snapshots: Vec<Board> = {
            let mut seen = vec![*game.board()];
            for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("g8", "f6")] {
                play(&mut game, &[(from, to)]);
                seen.push(*game.board());
            }
            seen
        };
        assert!(game.white_to_move());
        assert_eq!(game.ply_count(), 4);
        assert_eq!(game.last_move().map(|mv| mv.notation()).as_deref(), Some("g8f6"));

        for expected in snapshots.iter().rev().skip(1) {
            game.undo_move().expect("history should not be empty");
            assert_eq!(game.board(), expected);
        }
        assert_eq!(game.undo_move(), Err(ChessError::NoHistory));
    }

    #[test]
    fn illegal_candidate_is_rejected_by_omission() {
        let mut game = GameState::new_game();
        let jump = candidate(&game, "e2", "e5");
        assert_eq!(game.make_move_if_valid(&jump), None);
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn fools_mate_is_checkmate_not_stalemate() {
        let mut game = GameState::new_game();
        play(
            &mut game,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );
        assert!(game.valid_moves().is_empty());
        assert!(game.is_checkmate());
        assert!(!game.is_stalemate());
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Dark
            }
        );

        game.undo_move().expect("history should not be empty");
        assert!(!game.is_checkmate());
        assert!(!game.valid_moves().is_empty());
    }

    #[test]
    fn constructed_stalemate() {
        let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(game.valid_moves().is_empty());
        assert!(game.is_stalemate());
        assert!(!game.is_checkmate());
        assert_eq!(game.status(), GameStatus::Stalemate);
    }

    #[test]
    fn constructed_mate_reports_checkmate() {
        let mut game =
            GameState::from_fen("6k1/6Q1/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(game.in_check());
        assert!(game.valid_moves().is_empty());
        assert!(game.is_checkmate());
        assert!(!game.is_stalemate());
    }

    #[test]
    fn en_passant_through_game_flow() {
        let mut game = GameState::new_game();
        play(
            &mut game,
            &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
        );
        assert_eq!(game.board().en_passant_square(), Some(sq("d6")));

        let ep = candidate(&game, "e5", "d6");
        assert_eq!(ep.specialness(), MoveSpecialness::EnPassant);
        let applied = game.make_move_if_valid(&ep).expect("en passant should be legal");
        assert_eq!(
            applied.piece_captured(),
            Some(Piece::new(Color::Dark, PieceKind::Pawn))
        );
        assert_eq!(game.board().piece_at(sq("d5")), None);
        assert_eq!(
            game.board().piece_at(sq("d6")),
            Some(Piece::new(Color::Light, PieceKind::Pawn))
        );

        game.undo_move().expect("history should not be empty");
        assert_eq!(
            game.board().piece_at(sq("d5")),
            Some(Piece::new(Color::Dark, PieceKind::Pawn))
        );
        assert_eq!(game.board().en_passant_square(), Some(sq("d6")));
    }

    #[test]
    fn en_passant_right_expires_after_one_ply() {
        let mut game = GameState::new_game();
        play(
            &mut game,
            &[
                ("e2", "e4"),
                ("a7", "a6"),
                ("e4", "e5"),
                ("d7", "d5"),
                ("h2", "h3"),
                ("h7", "h6"),
            ],
        );
        let late = candidate(&game, "e5", "d6");
        assert_eq!(late.specialness(), MoveSpecialness::Regular);
        assert_eq!(game.make_move_if_valid(&late), None);
    }

    #[test]
    fn highlight_moves_from_a_square() {
        let mut game = GameState::new_game();
        let knight_moves = game.valid_moves_from(sq("g1"));
        let mut ends: Vec<String> = knight_moves.iter().map(|mv| mv.end().to_string()).collect();
        ends.sort();
        assert_eq!(ends, vec!["f3", "h3"]);
    }

    #[test]
    fn constructed_positions_need_one_king_each() {
        assert!(matches!(
            GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::InvalidPosition(_))
        ));
    }

    #[test]
    fn king_capturable_positions_are_rejected() {
        // Light to move with the dark king already attacked by the rook.
        assert!(matches!(
            GameState::from_fen("4k3/8/8/8/8/8/8/4RK2 w - - 0 1"),
            Err(ChessError::InvalidPosition(_))
        ));
        // The same placement is fine with the checked side to move.
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").expect("FEN should parse");
        assert!(game.in_check());
        assert!(game
            .valid_moves()
            .iter()
            .all(|mv| mv.piece_captured().map(|p| p.kind) != Some(PieceKind::King)));
    }

    #[test]
    fn status_is_terminal_only_when_the_game_is_over() {
        let mut game = GameState::new_game();
        game.valid_moves();
        assert!(!game.status().is_terminal());

        let mut mated =
            GameState::from_fen("6k1/6Q1/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        mated.valid_moves();
        assert!(mated.status().is_terminal());

        let mut drawn =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        drawn.valid_moves();
        assert!(drawn.status().is_terminal());
    }

    #[test]
    fn reset_returns_to_start() {
        let mut game = GameState::new_game();
        play(&mut game, &[("e2", "e4")]);
        game.reset();
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.board(), &Board::starting_position());
        assert_eq!(game.move_log().count(), 0);
    }
}
