//! Position sampling
//!
//! One sample walks a random number of weighted-random moves from the
//! empty board, waits for the engine's policy on the resulting
//! position, and packages prompt variants plus the filtered policy
//! into an `Example`. The policy wait is a cooperative sleep/poll loop
//! with a hard timeout; an engine that never produces a policy fails
//! the sample instead of emitting an empty record.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tokio::time::Instant;
use tracing::debug;

use goban_core::{Engine, Example, MoveParams};

/// Tuning for the sampling walk and the policy wait.
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Walk length is drawn uniformly from `0..=max_walk_moves`.
    pub max_walk_moves: u32,
    /// Give up on the sample after this long without a policy.
    pub policy_timeout: Duration,
    /// Sleep between policy polls.
    pub poll_interval: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_walk_moves: 100,
            policy_timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(1),
        }
    }
}

pub struct Sampler {
    config: SamplerConfig,
    rng: ChaCha20Rng,
}

impl Sampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Create with a specific seed for determinism (used in tests and
    /// for reproducible runs).
    pub fn with_seed(config: SamplerConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Produce one example from a fresh game session.
    ///
    /// The engine must be positioned at the start of a new game; the
    /// walk mutates it in place.
    pub async fn sample(&mut self, engine: &mut dyn Engine) -> Result<Example> {
        let walk_moves = self.rng.gen_range(0..=self.config.max_walk_moves);
        debug!(walk_moves, "starting sampling walk");

        let params = MoveParams::exploratory();
        for i in 0..walk_moves {
            engine
                .play_weighted_move(&params)
                .with_context(|| format!("walk move {} of {}", i + 1, walk_moves))?;
        }

        let raw_policy = self.wait_for_policy(engine).await?;
        let board = engine.board();
        let example =
            Example::from_position(&board, &raw_policy).context("rendering sampled position")?;
        if example.policy.is_empty() {
            bail!("engine produced a policy with no legal entries");
        }

        debug!(
            stones = board.stones.len(),
            policy_moves = example.policy.len(),
            "sampled position"
        );
        Ok(example)
    }

    /// Poll for the current position's policy with a cooperative
    /// backoff, up to the configured timeout.
    async fn wait_for_policy(&self, engine: &dyn Engine) -> Result<Vec<(String, f64)>> {
        let deadline = Instant::now() + self.config.policy_timeout;
        loop {
            if let Some(policy) = engine.raw_policy() {
                return Ok(policy);
            }
            if Instant::now() >= deadline {
                bail!(
                    "engine produced no policy within {:?}",
                    self.config.policy_timeout
                );
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goban_core::board::BoardState;
    use goban_core::engine::EngineError;

    /// Engine double that counts walk moves and withholds its policy
    /// for a configurable number of polls.
    struct SlowEngine {
        moves_played: u32,
        polls_until_ready: std::cell::Cell<u32>,
        policy: Vec<(String, f64)>,
    }

    impl SlowEngine {
        fn new(polls_until_ready: u32, policy: Vec<(String, f64)>) -> Self {
            Self {
                moves_played: 0,
                polls_until_ready: std::cell::Cell::new(polls_until_ready),
                policy,
            }
        }
    }

    impl Engine for SlowEngine {
        fn play_weighted_move(&mut self, _params: &MoveParams) -> Result<(), EngineError> {
            self.moves_played += 1;
            Ok(())
        }

        fn raw_policy(&self) -> Option<Vec<(String, f64)>> {
            let remaining = self.polls_until_ready.get();
            if remaining == 0 {
                Some(self.policy.clone())
            } else {
                self.polls_until_ready.set(remaining - 1);
                None
            }
        }

        fn board(&self) -> BoardState {
            BoardState::empty(9)
        }
    }

    fn test_policy() -> Vec<(String, f64)> {
        vec![
            ("D4".to_string(), 0.8),
            ("Q16".to_string(), 0.2),
            ("A1".to_string(), -1.0),
        ]
    }

    #[tokio::test]
    async fn sample_walks_between_zero_and_max_moves() {
        let config = SamplerConfig {
            max_walk_moves: 10,
            ..SamplerConfig::default()
        };
        let mut sampler = Sampler::with_seed(config, 42);
        let mut engine = SlowEngine::new(0, test_policy());
        sampler.sample(&mut engine).await.unwrap();
        assert!(engine.moves_played <= 10);
    }

    #[tokio::test]
    async fn sample_filters_negative_policy_entries() {
        let mut sampler = Sampler::with_seed(SamplerConfig::default(), 1);
        let mut engine = SlowEngine::new(0, test_policy());
        let example = sampler.sample(&mut engine).await.unwrap();
        assert_eq!(example.policy.len(), 2);
        assert!(!example.policy.contains_key("A1"));
    }

    #[tokio::test(start_paused = true)]
    async fn sample_waits_for_a_slow_policy() {
        let mut sampler = Sampler::with_seed(SamplerConfig::default(), 2);
        let mut engine = SlowEngine::new(50, test_policy());
        let example = sampler.sample(&mut engine).await.unwrap();
        assert_eq!(example.policy.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn sample_times_out_when_policy_never_arrives() {
        let config = SamplerConfig {
            policy_timeout: Duration::from_millis(50),
            ..SamplerConfig::default()
        };
        let mut sampler = Sampler::with_seed(config, 3);
        let mut engine = SlowEngine::new(u32::MAX, test_policy());
        let err = sampler.sample(&mut engine).await.unwrap_err();
        assert!(err.to_string().contains("no policy"));
    }

    #[tokio::test]
    async fn sample_rejects_all_negative_policy() {
        let mut sampler = Sampler::with_seed(SamplerConfig::default(), 4);
        let policy = vec![("D4".to_string(), -1.0)];
        let mut engine = SlowEngine::new(0, policy);
        let err = sampler.sample(&mut engine).await.unwrap_err();
        assert!(err.to_string().contains("no legal entries"));
    }

    #[tokio::test]
    async fn same_seed_draws_same_walk_length() {
        let config = SamplerConfig {
            max_walk_moves: 100,
            ..SamplerConfig::default()
        };
        let mut a = Sampler::with_seed(config.clone(), 7);
        let mut b = Sampler::with_seed(config, 7);
        let mut engine_a = SlowEngine::new(0, test_policy());
        let mut engine_b = SlowEngine::new(0, test_policy());
        a.sample(&mut engine_a).await.unwrap();
        b.sample(&mut engine_b).await.unwrap();
        assert_eq!(engine_a.moves_played, engine_b.moves_played);
    }
}
