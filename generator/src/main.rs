//! goban-generator - Go position sampling for prompt/policy datasets
//!
//! A bounded run that:
//! 1. Walks a random number of weighted-random moves from the empty
//!    board against the engine collaborator, once per example
//! 2. Waits for the engine's policy on the resulting position
//! 3. Appends one `{prompts, policy}` JSON line per example to the
//!    destination file

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use tracing::{debug, info};

mod config;
mod emitter;
mod sampler;
mod sim;

use crate::config::Config;
use crate::emitter::ExampleWriter;
use crate::sampler::{Sampler, SamplerConfig};
use crate::sim::SimEngine;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(
        num_examples = config.num_examples,
        dest = %config.dest,
        board_size = config.board_size,
        "Generator starting"
    );

    let sampler_config = SamplerConfig {
        max_walk_moves: config.max_walk_moves,
        policy_timeout: config.policy_timeout(),
        ..SamplerConfig::default()
    };
    let mut sampler = match config.seed {
        Some(seed) => Sampler::with_seed(sampler_config, seed),
        None => Sampler::new(sampler_config),
    };

    let mut writer = ExampleWriter::open(&config.dest)?;

    // Progress bar only when stderr is a TTY, so piped runs stay clean.
    let progress = if std::io::stderr().is_terminal() {
        let pb = ProgressBar::new(config.num_examples as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} examples ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    for i in 0..config.num_examples {
        // Each example starts a fresh game session.
        let mut engine = match config.seed {
            Some(seed) => SimEngine::with_seed(config.board_size, seed.wrapping_add(i as u64 + 1)),
            None => SimEngine::new(config.board_size),
        };

        let example = sampler.sample(&mut engine).await?;
        writer.append(&example)?;
        debug!(example = i + 1, "example written");

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    info!(
        written = writer.written(),
        dest = %config.dest,
        "Generation complete"
    );
    Ok(())
}
