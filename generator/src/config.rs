//! Configuration for the generator binary

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;

use goban_core::gtp::MAX_BOARD_SIZE;

#[derive(Parser, Debug, Clone)]
#[command(name = "goban-generator")]
#[command(about = "Generate Go position prompts with policy labels")]
#[command(
    long_about = "Samples partially-played Go positions by walking a random number of
weighted-random moves from the empty board, renders each position as a
text prompt, and appends one JSON record per position to the
destination file."
)]
pub struct Config {
    /// Number of examples to generate
    pub num_examples: u32,

    /// Destination data file (line-delimited JSON, appended to)
    pub dest: String,

    /// Board size (square boards only)
    #[arg(long, default_value_t = 19)]
    pub board_size: usize,

    /// Upper bound on the random walk length per sample
    #[arg(long, default_value_t = 100)]
    pub max_walk_moves: u32,

    /// Give up on a sample if the engine produces no policy within this long
    #[arg(long, default_value_t = 60)]
    pub policy_timeout_secs: u64,

    /// Seed the engine and sampler for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.dest.ends_with(".jsonl") {
            return Err(anyhow!(
                "destination '{}' must end in .jsonl",
                self.dest
            ));
        }

        if self.board_size < 2 || self.board_size > MAX_BOARD_SIZE {
            return Err(anyhow!(
                "board_size must be between 2 and {}, got {}",
                MAX_BOARD_SIZE,
                self.board_size
            ));
        }

        if self.policy_timeout_secs == 0 {
            return Err(anyhow!("policy_timeout_secs must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn policy_timeout(&self) -> Duration {
        Duration::from_secs(self.policy_timeout_secs)
    }
}
