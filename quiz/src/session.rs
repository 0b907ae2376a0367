//! Quiz session state and scoring
//!
//! Each presented example moves through present -> guess -> scored.
//! A guess found in the stored policy earns `score_p` of its
//! probability; a guess the policy never considered is a flat -1.
//! The running maximum always accumulates the example's true best
//! score, including for invalid guesses: the example itself had that
//! much potential even if the answer was nonsense.

use rand::seq::SliceRandom;
use rand::Rng;

use goban_core::{score_p, Example};

/// Result of scoring one guess against one example.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Guess was not a move the policy considered.
    Invalid { best_score: f64 },
    /// Guess was found in the policy.
    Scored {
        score: f64,
        best_move: String,
        best_score: f64,
    },
}

impl Outcome {
    /// Contribution to the running total.
    pub fn score(&self) -> f64 {
        match self {
            Outcome::Invalid { .. } => -1.0,
            Outcome::Scored { score, .. } => *score,
        }
    }

    /// Contribution to the maximum-possible total.
    pub fn best_score(&self) -> f64 {
        match self {
            Outcome::Invalid { best_score } => *best_score,
            Outcome::Scored { best_score, .. } => *best_score,
        }
    }

    pub fn is_perfect(&self) -> bool {
        match self {
            Outcome::Invalid { .. } => false,
            Outcome::Scored {
                score, best_score, ..
            } => score == best_score,
        }
    }
}

/// Score a raw guess (whitespace-trimmed, case-insensitive) against an
/// example's policy.
pub fn evaluate_guess(example: &Example, guess: &str) -> Outcome {
    let trimmed = guess.trim();
    match (example.lookup(trimmed), example.best_move()) {
        (Some(p), Some((best_move, best_p))) => Outcome::Scored {
            score: score_p(p),
            best_move: best_move.to_string(),
            best_score: score_p(best_p),
        },
        (_, best) => Outcome::Invalid {
            best_score: best.map(|(_, p)| score_p(p)).unwrap_or(0.0),
        },
    }
}

/// The examples chosen for one quiz run.
pub struct Selection {
    pub examples: Vec<Example>,
    /// Set when the request exceeded the available examples; holds the
    /// original request so the shortfall can be reported.
    pub clamped_from: Option<u32>,
}

/// Shuffle the loaded examples and take the requested count.
///
/// A request of 0 means "all"; a request beyond what is available
/// clamps silently to the available count, flagged for reporting.
pub fn select_examples<R: Rng>(
    mut examples: Vec<Example>,
    requested: u32,
    rng: &mut R,
) -> Selection {
    examples.shuffle(rng);
    let available = examples.len();
    let mut clamped_from = None;
    let take = if requested == 0 {
        available
    } else if requested as usize > available {
        clamped_from = Some(requested);
        available
    } else {
        requested as usize
    };
    examples.truncate(take);
    Selection {
        examples,
        clamped_from,
    }
}

/// Running totals for one quiz run. Ephemeral; never persisted.
#[derive(Debug, Default)]
pub struct QuizSession {
    total_score: f64,
    max_score: f64,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.total_score += outcome.score();
        self.max_score += outcome.best_score();
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn max_score(&self) -> f64 {
        self.max_score
    }
}
