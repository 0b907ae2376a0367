//! goban-quiz - replay generated examples as an interactive quiz
//!
//! Loads a `.jsonl` examples file, presents a shuffled subset of
//! positions, reads one move guess per position from stdin, and scores
//! each guess against the stored policy distribution.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use clap::Parser;

mod config;
mod loader;
mod session;

use crate::config::Config;
use crate::loader::load_examples;
use crate::session::{evaluate_guess, select_examples, Outcome, QuizSession};

fn init_tracing() -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Quiet by default; the quiz surface is interactive stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing()?;

    let examples = load_examples(&config.filename)?;
    println!(
        "Loaded {} examples from {}...",
        examples.len(),
        config.filename
    );

    let mut rng = rand::thread_rng();
    let selection = select_examples(examples, config.count, &mut rng);
    if let Some(requested) = selection.clamped_from {
        println!(
            "{} examples were requested, but only {} are available.",
            requested,
            selection.examples.len()
        );
    }
    println!("Beginning quiz on {} problems...", selection.examples.len());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = QuizSession::new();

    for example in &selection.examples {
        let prompt = example.prompt(config.prompt).ok_or_else(|| {
            anyhow!(
                "example has no '{}' prompt; re-generate the file or pick another style",
                config.prompt
            )
        })?;

        println!();
        print!("{} ", prompt);
        io::stdout().flush()?;

        let guess = match lines.next() {
            Some(line) => line?,
            None => bail!("stdin closed before the quiz finished"),
        };

        let outcome = evaluate_guess(example, &guess);
        match &outcome {
            Outcome::Invalid { .. } => println!("Invalid move: -1 point."),
            Outcome::Scored {
                score,
                best_move,
                best_score,
            } => {
                if outcome.is_perfect() {
                    println!("Perfect! {:.3} points.", score);
                } else {
                    println!(
                        "Best move was {}. Score: {:.3} out of possible {:.3}",
                        best_move, score, best_score
                    );
                }
            }
        }
        session.record(&outcome);
    }

    println!();
    println!(
        "Problem set complete! Total score: {:.3} out of a possible {:.3} points.",
        session.total_score(),
        session.max_score()
    );
    Ok(())
}
