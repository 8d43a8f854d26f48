//! Fixed-depth negamax engine.
//!
//! Generates the root moves, optionally shuffles them so equal-scored moves
//! vary between games, then runs the alpha-beta search.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::negamax::{negamax_search, SearchConfig};

pub struct NegamaxEngine<S: BoardScorer = MaterialScorer> {
    config: SearchConfig,
    scorer: S,
    rng: StdRng,
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

impl NegamaxEngine<MaterialScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, MaterialScorer)
    }
}

impl<S: BoardScorer> NegamaxEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self {
            config,
            scorer,
            rng: rng_for(config.seed),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for NegamaxEngine<MaterialScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> Engine for NegamaxEngine<S> {
    fn name(&self) -> &str {
        "Negamax"
    }

    fn new_game(&mut self) {
        self.rng = rng_for(self.config.seed);
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        match name.to_ascii_lowercase().as_str() {
            "depth" => self.config.depth = value.parse().map_err(|_| invalid())?,
            "shuffle" => self.config.shuffle_moves = value.parse().map_err(|_| invalid())?,
            "seed" => {
                let seed = value.parse().map_err(|_| invalid())?;
                self.config.seed = Some(seed);
                self.rng = StdRng::seed_from_u64(seed);
            }
            _ => return Err(invalid()),
        }
        Ok(())
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput> {
        let mut legal_moves = game_state.valid_moves();
        if self.config.shuffle_moves {
            legal_moves.shuffle(&mut self.rng);
        }

        let result = negamax_search(game_state, &legal_moves, self.config.depth, &self.scorer)?;

        Ok(EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            nodes: result.nodes,
        })
    }
}
