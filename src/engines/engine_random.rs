//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as a weak opponent in self-play
//! and as a smoke test for move generation.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::trace;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_types::*;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// A fixed `seed` makes the sequence of picks reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.valid_moves();
        trace!(legal_moves = legal_moves.len(), "random engine choosing");

        Ok(EngineOutput {
            best_move: legal_moves.choose(&mut self.rng).copied(),
            score: None,
            nodes: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::*;

    #[test]
    fn picks_a_legal_move() {
        let mut engine = RandomEngine::new(Some(7));
        let mut game = GameState::new_game();
        let legal = game.valid_moves();
        let out = engine.choose_move(&mut game).expect("engine should run");
        let picked = out.best_move.expect("start position has moves");
        assert!(legal.contains(&picked));
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn same_seed_same_choice() {
        let mut game = GameState::new_game();
        let first = RandomEngine::new(Some(42))
            .choose_move(&mut game)
            .expect("engine should run");
        let second = RandomEngine::new(Some(42))
            .choose_move(&mut game)
            .expect("engine should run");
        assert_eq!(first.best_move, second.best_move);
    }

    #[test]
    fn no_move_when_mated() {
        let mut engine = RandomEngine::default();
        let mut game =
            GameState::from_fen("6k1/6Q1/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let out = engine.choose_move(&mut game).expect("engine should run");
        assert_eq!(out.best_move, None);
    }

    #[test]
    fn rejects_unknown_options() {
        let mut engine = RandomEngine::default();
        assert!(engine.set_option("Depth", "3").is_err());
    }
}
