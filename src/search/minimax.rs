//! Plain minimax without pruning.
//!
//! Light maximizes and dark minimizes the white-positive score. Leaves use
//! the same distance-adjusted mate scores as the pruned search. It visits
//! every node of the tree, so it serves as the reference the pruned search
//! is checked against and as a baseline in the search benchmarks.

use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::{score_at_ply, BoardScorer};
use crate::search::negamax::{SearchResult, SCORE_BOUND};

/// Search `legal_moves` to `depth` plies. The reported score is converted to
/// the root mover's point of view so it compares directly with
/// `negamax_search`.
pub fn minimax_search<S: BoardScorer>(
    game_state: &mut GameState,
    legal_moves: &[ChessMove],
    depth: u8,
    scorer: &S,
) -> ChessResult<SearchResult> {
    let depth = depth.max(1);
    let mover = game_state.side_to_move();
    let mut nodes = 0u64;
    let (score, best_move) = minimax(game_state, legal_moves, depth, 0, scorer, &mut nodes)?;

    Ok(SearchResult {
        best_move,
        best_score: mover.turn_multiplier() * score,
        depth,
        nodes,
    })
}

fn minimax<S: BoardScorer>(
    game_state: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    ply: u8,
    scorer: &S,
    nodes: &mut u64,
) -> ChessResult<(i32, Option<ChessMove>)> {
    *nodes += 1;

    if depth == 0 || moves.is_empty() {
        let side = game_state.side_to_move();
        return Ok((side.turn_multiplier() * score_at_ply(scorer, game_state, ply), None));
    }

    let maximizing = game_state.white_to_move();
    let mut best_score = if maximizing { -SCORE_BOUND } else { SCORE_BOUND };
    let mut best_move = None;

    for mv in moves {
        game_state.make_move(mv);
        let replies = game_state.valid_moves();
        let child = minimax(game_state, &replies, depth - 1, ply + 1, scorer, nodes);
        game_state.undo_move()?;
        let score = child?.0;

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(*mv);
        }
    }

    Ok((best_score, best_move))
}
