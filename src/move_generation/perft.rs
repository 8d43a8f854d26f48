//! Perft: exhaustive legal move tree counts used to validate the generator.
//!
//! Leaf moves are classified the way the standard reference tables do it, so
//! any miscounted castle, en passant, or promotion shows up as a mismatch in
//! its own column.

use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::{ChessMove, MoveSpecialness};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count the leaves `depth` plies below the current position. Depth zero
/// counts the position itself.
pub fn perft(game_state: &mut GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    for mv in game_state.valid_moves() {
        counts.merge(perft_move(game_state, &mv, depth)?);
    }
    Ok(counts)
}

/// Leaf counts below each root move, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> ChessResult<Vec<(ChessMove, u64)>> {
    let depth = depth.max(1);
    game_state
        .valid_moves()
        .into_iter()
        .map(|mv| -> ChessResult<(ChessMove, u64)> {
            Ok((mv, perft_move(game_state, &mv, depth)?.nodes))
        })
        .collect()
}

fn perft_move(game_state: &mut GameState, mv: &ChessMove, depth: u8) -> ChessResult<PerftCounts> {
    game_state.make_move(mv);

    let counts = if depth == 1 {
        Ok(classify_leaf(game_state, mv))
    } else {
        perft(game_state, depth - 1)
    };

    game_state.undo_move()?;
    counts
}

/// `game_state` is the position just after `mv`.
fn classify_leaf(game_state: &mut GameState, mv: &ChessMove) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if mv.is_capture() {
        counts.captures += 1;
    }
    match mv.specialness() {
        MoveSpecialness::EnPassant => counts.en_passant += 1,
        MoveSpecialness::Castling => counts.castles += 1,
        MoveSpecialness::Promote(_) => counts.promotions += 1,
        MoveSpecialness::Regular => {}
    }

    if game_state.in_check() {
        counts.checks += 1;
        if game_state.valid_moves().is_empty() {
            counts.checkmates += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::chess_types::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";

    fn counts_for(fen: &str, depth: u8) -> PerftCounts {
        let mut game = GameState::from_fen(fen).expect("perft FEN should parse");
        let before = *game.board();
        let counts = perft(&mut game, depth).expect("perft should run");
        assert_eq!(game.board(), &before, "perft must leave the position unchanged");
        assert_eq!(game.ply_count(), 0);
        counts
    }

    #[test]
    fn depth_zero_counts_the_root() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 0).expect("perft should run").nodes, 1);
    }

    #[test]
    fn starting_position() {
        let mut game = GameState::new_game();
        let nodes: Vec<u64> = (1..=3)
            .map(|depth| perft(&mut game, depth).expect("perft should run").nodes)
            .collect();
        assert_eq!(nodes, [20, 400, 8902]);

        let d3 = perft(&mut game, 3).expect("perft should run");
        assert_eq!(d3.captures, 34);
        assert_eq!(d3.checks, 12);
        assert_eq!(d3.checkmates, 0);
    }

    #[test]
    fn kiwipete() {
        let d1 = counts_for(KIWIPETE, 1);
        assert_eq!(
            (d1.nodes, d1.captures, d1.en_passant, d1.castles, d1.checks),
            (48, 8, 0, 2, 0)
        );

        let d2 = counts_for(KIWIPETE, 2);
        assert_eq!(
            d2,
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn position_3_en_passant_and_checks() {
        let d1 = counts_for(POSITION_3, 1);
        assert_eq!((d1.nodes, d1.captures, d1.checks), (14, 1, 2));

        let d2 = counts_for(POSITION_3, 2);
        assert_eq!((d2.nodes, d2.captures, d2.checks), (191, 14, 10));

        let d3 = counts_for(POSITION_3, 3);
        assert_eq!(
            (d3.nodes, d3.captures, d3.en_passant, d3.checks),
            (2812, 209, 2, 267)
        );
    }

    #[test]
    fn position_4_promotions_and_castles() {
        assert_eq!(counts_for(POSITION_4, 1).nodes, 6);

        let d2 = counts_for(POSITION_4, 2);
        assert_eq!(
            (d2.nodes, d2.captures, d2.castles, d2.promotions, d2.checks),
            (264, 87, 6, 48, 10)
        );
    }

    #[test]
    fn back_rank_mate_is_counted() {
        let counts = counts_for("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 1);
        assert_eq!((counts.nodes, counts.checks, counts.checkmates), (17, 1, 1));
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::from_fen(KIWIPETE).expect("perft FEN should parse");
        let split = perft_divide(&mut game, 2).expect("perft divide should run");
        assert_eq!(split.len(), 48);
        assert_eq!(split.iter().map(|(_, nodes)| nodes).sum::<u64>(), 2039);
    }

    #[test]
    fn playing_and_undoing_a_line_restores_the_root() {
        let mut game = GameState::from_fen(KIWIPETE).expect("perft FEN should parse");
        let root = *game.board();

        // Always take the last generated move, which varies the move kinds seen.
        let mut played = 0;
        for _ in 0..12 {
            let Some(mv) = game.valid_moves().pop() else {
                break;
            };
            game.make_move(&mv);
            played += 1;
        }
        for _ in 0..played {
            game.undo_move().expect("history should cover every played move");
        }

        assert_eq!(game.board(), &root);
        assert!(game.undo_move().is_err());
    }
}
