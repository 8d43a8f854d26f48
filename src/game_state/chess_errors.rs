//! Error types for the rules engine.

use thiserror::Error;

/// Errors raised by board construction, notation parsing, move history, and
/// engine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A coordinate outside the 8x8 board.
    #[error("square (row {row}, col {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    /// `undo_move` was called with an empty move log.
    #[error("no move history to undo")]
    NoHistory,

    /// A move was built from a square with no piece on it.
    #[error("no piece on {0}")]
    EmptySquare(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// The position breaks a structural invariant (e.g. king count).
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// An engine option name or value it does not understand.
    #[error("invalid engine option {name}={value}")]
    InvalidOption { name: String, value: String },
}

/// Result type alias for rules-engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
