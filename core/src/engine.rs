//! The external analysis-engine collaborator
//!
//! Move generation, legality, and policy evaluation belong to an
//! external engine; this crate only defines the capability set the
//! sampler needs. Implementations are injected explicitly rather than
//! reached through any ambient/global session object.

use crate::board::BoardState;

/// Exploration parameters for one weighted-random move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveParams {
    /// Floor probability applied to otherwise-unlikely moves.
    pub lower_bound: f64,
    /// Flattening factor applied to the move distribution; 1.0 leaves
    /// the policy untouched, larger values flatten it further.
    pub weaken_fac: f64,
    /// Prefer picking from a ranked shortlist over pure-greedy or
    /// pure-random selection.
    pub pick_override: bool,
}

impl MoveParams {
    /// The exploration settings used by the position-sampling walk.
    pub fn exploratory() -> Self {
        Self {
            lower_bound: 0.0,
            weaken_fac: 1.0,
            pick_override: true,
        }
    }
}

/// Error type for engine interactions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine terminated: {0}")]
    Terminated(String),
    #[error("no legal moves available")]
    NoLegalMoves,
    #[error("engine rejected move: {0}")]
    Rejected(String),
}

/// Capability set exposed by a live engine/game session.
///
/// The implementation guarantees the walk stays legal: applied moves
/// are legal for the current position and turns alternate. Policy
/// computation may finish asynchronously on the engine's own schedule,
/// so `raw_policy` returns `None` until the analysis for the current
/// position is available.
pub trait Engine {
    /// Apply one AI-selected weighted-random move to the current
    /// position.
    fn play_weighted_move(&mut self, params: &MoveParams) -> Result<(), EngineError>;

    /// The ranked policy for the current position, once computed.
    ///
    /// Entries are `(gtp_move, probability)`. Negative probabilities
    /// are the engine's "not a legal/considered move" sentinel; callers
    /// must filter them before persisting anything.
    fn raw_policy(&self) -> Option<Vec<(String, f64)>>;

    /// Snapshot of the current position.
    fn board(&self) -> BoardState;
}
