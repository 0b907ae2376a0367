//! The probability-to-reward curve
//!
//! Guessing a move is rewarded by how much policy mass the engine put
//! on it, through a concave curve: near-best moves lose little, poor
//! moves lose a lot, and only the full-probability move earns 1.

/// Map a policy probability in `[0, 1]` to a reward.
///
/// `score_p(0) == 0`, `score_p(1) == 1`, strictly increasing and
/// concave on the interval.
pub fn score_p(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(2)
}
