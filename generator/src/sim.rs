//! Stand-in engine for exercising the pipeline
//!
//! `SimEngine` implements the `Engine` collaborator trait without any
//! external process: it places stones on empty intersections and
//! synthesizes a randomized policy for each position. It is NOT a Go
//! rules engine (no captures, no ko) and its policies carry no Go
//! knowledge; it exists so the sampling/emission pipeline can run and
//! be tested end to end. A production deployment implements `Engine`
//! against a real analysis engine.
//!
//! The synthetic policy honors the wire contract: occupied points
//! appear with the negative "not considered" sentinel, and the pass
//! move always carries a small positive weight.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use goban_core::board::{BoardState, Coord, Stone};
use goban_core::engine::{Engine, EngineError, MoveParams};
use goban_core::gtp::{self, Vertex};

/// Moves considered when `pick_override` asks for a ranked shortlist.
const SHORTLIST_LEN: usize = 16;

pub struct SimEngine {
    board: BoardState,
    rng: ChaCha20Rng,
    policy: Option<Vec<(String, f64)>>,
}

impl SimEngine {
    pub fn new(size: usize) -> Self {
        Self::from_rng(size, ChaCha20Rng::from_entropy())
    }

    /// Create with a specific seed for determinism (used in tests and
    /// for reproducible runs).
    pub fn with_seed(size: usize, seed: u64) -> Self {
        Self::from_rng(size, ChaCha20Rng::seed_from_u64(seed))
    }

    fn from_rng(size: usize, rng: ChaCha20Rng) -> Self {
        let mut engine = Self {
            board: BoardState::empty(size),
            rng,
            policy: None,
        };
        engine.compute_policy();
        engine
    }

    /// Synthesize a ranked policy for the current position.
    ///
    /// Cubing the raw weights skews mass toward a few "good" moves so
    /// sampled positions have a clear best move, like a real policy.
    fn compute_policy(&mut self) {
        let size = self.board.width;
        let mut positive: Vec<(String, f64)> = Vec::new();
        let mut sentinels: Vec<(String, f64)> = Vec::new();

        for y in 0..size {
            for x in 0..size {
                let coord = Coord::new(x as u8, y as u8);
                if self.board.is_empty_point(coord) {
                    let weight = self.rng.gen::<f64>().powi(3);
                    positive.push((coord.gtp(), weight));
                } else {
                    sentinels.push((coord.gtp(), -1.0));
                }
            }
        }
        positive.push((gtp::PASS.to_string(), 0.001 * self.rng.gen::<f64>()));

        let total: f64 = positive.iter().map(|(_, w)| w).sum();
        for (_, w) in &mut positive {
            *w /= total;
        }
        positive.sort_by(|a, b| b.1.total_cmp(&a.1));
        positive.extend(sentinels);
        self.policy = Some(positive);
    }

    fn apply(&mut self, vertex: Vertex) {
        if let Vertex::Play(coord) = vertex {
            self.board.stones.push(Stone::new(self.board.to_play, coord));
        }
        self.board.to_play = self.board.to_play.opponent();
        self.compute_policy();
    }
}

impl Engine for SimEngine {
    fn play_weighted_move(&mut self, params: &MoveParams) -> Result<(), EngineError> {
        let ranked = self
            .policy
            .as_ref()
            .ok_or_else(|| EngineError::Rejected("no policy for current position".to_string()))?;

        // Transform the legal entries per the exploration parameters:
        // flatten by the weaken factor, floor unlikely moves, and
        // optionally restrict to the ranked shortlist.
        let mut candidates: Vec<(String, f64)> = ranked
            .iter()
            .filter(|(_, p)| *p >= 0.0)
            .map(|(mv, p)| {
                let flattened = if params.weaken_fac > 1.0 {
                    p.powf(1.0 / params.weaken_fac)
                } else {
                    *p
                };
                (mv.clone(), flattened.max(params.lower_bound))
            })
            .collect();
        if params.pick_override {
            candidates.truncate(SHORTLIST_LEN);
        }

        let total: f64 = candidates.iter().map(|(_, w)| w).sum();
        if total <= 0.0 || candidates.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let mut target = self.rng.gen_range(0.0..total);
        let mut chosen = &candidates[candidates.len() - 1].0;
        for (mv, w) in &candidates {
            if target < *w {
                chosen = mv;
                break;
            }
            target -= w;
        }

        let vertex = gtp::parse_vertex(chosen, self.board.width, self.board.height)
            .map_err(|e| EngineError::Rejected(e.to_string()))?;
        self.apply(vertex);
        Ok(())
    }

    fn raw_policy(&self) -> Option<Vec<(String, f64)>> {
        self.policy.clone()
    }

    fn board(&self) -> BoardState {
        self.board.clone()
    }
}
