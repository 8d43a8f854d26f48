//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Every node scores from the perspective of its side to move: child scores
//! are negated and the `(alpha, beta)` window is swapped and negated on the
//! way down. Each node returns its `(score, move)` pair so the root move is
//! threaded up the recursion rather than tracked in outer state.
//!
//! Mates are scored by distance from the root, so a quicker mate always
//! outranks a slower one.
//!
//! The search mutates the game in place through `make_move` / `undo_move`
//! and leaves it exactly as it found it, including after a cutoff.

use tracing::debug;

use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::{score_at_ply, BoardScorer, CHECKMATE};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;

/// Strictly outside every reachable score, so the first move searched at
/// a node always becomes its best move.
pub(crate) const SCORE_BOUND: i32 = CHECKMATE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Shuffle root moves before searching so equal-scored moves vary.
    pub shuffle_moves: bool,
    /// Seed for the shuffle; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            shuffle_moves: true,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the root has no legal moves.
    pub best_move: Option<ChessMove>,
    /// Score from the root mover's point of view.
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Pick the best of `legal_moves` for the side to move, or `None` when the
/// position is terminal.
pub fn find_best_move<S: BoardScorer>(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    depth: u8,
    scorer: &S,
) -> ChessResult<Option<ChessMove>> {
    Ok(negamax_search(game_state, legal_moves, depth, scorer)?.best_move)
}

/// Search `legal_moves` (already generated for the current position, in the
/// order they should be tried) to `depth` plies.
///
/// A depth of zero is searched as one ply so a non-terminal root always
/// yields a move.
pub fn negamax_search<S: BoardScorer>(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    depth: u8,
    scorer: &S,
) -> ChessResult<SearchResult> {
    let depth = depth.max(1);
    let mut nodes = 0u64;
    let (best_score, best_move) = negamax(
        game_state,
        legal_moves,
        depth,
        0,
        -SCORE_BOUND,
        SCORE_BOUND,
        scorer,
        &mut nodes,
    )?;

    debug!(
        depth,
        nodes,
        best_score,
        best_move = %best_move.map_or_else(|| "none".to_owned(), |mv| mv.notation()),
        "negamax search finished"
    );

    Ok(SearchResult {
        best_move,
        best_score,
        depth,
        nodes,
    })
}

fn negamax<S: BoardScorer>(
    game_state: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    ply: u8,
    mut alpha: i32,
    beta: i32,
    scorer: &S,
    nodes: &mut u64,
) -> ChessResult<(i32, Option<ChessMove>)> {
    *nodes += 1;

    if depth == 0 || moves.is_empty() {
        return Ok((score_at_ply(scorer, game_state, ply), None));
    }

    let mut best_score = -SCORE_BOUND;
    let mut best_move = None;

    for mv in moves {
        game_state.make_move(mv);
        let replies = game_state.valid_moves();
        let child = negamax(
            game_state,
            &replies,
            depth - 1,
            ply + 1,
            -beta,
            -alpha,
            scorer,
            nodes,
        );
        game_state.undo_move()?;
        let score = -child?.0;

        if score > best_score {
            best_score = score;
            best_move = Some(*mv);
        }
        if best_score > alpha {
            alpha = best_score;
        }
        if alpha >= beta {
            break;
        }
    }

    Ok((best_score, best_move))
}
