//! Core domain types for the Go prompt generator and quiz
//!
//! This crate provides the pure pieces shared by the generator and quiz
//! binaries:
//! - `board`: players, coordinates, stones, and position snapshots
//! - `gtp`: GTP coordinate notation (column letters skip `I`)
//! - `render`: text board rendering with star points, plain and ANSI
//! - `prompt`: prompt composition around a rendered board
//! - `score`: the probability-to-reward curve
//! - `example`: the persisted prompt+policy record
//! - `engine`: the external analysis-engine collaborator trait

pub mod board;
pub mod engine;
pub mod example;
pub mod gtp;
pub mod prompt;
pub mod render;
pub mod score;

// Re-export main types for convenience
pub use board::{BoardState, Coord, Player, Stone};
pub use engine::{Engine, EngineError, MoveParams};
pub use example::{Example, PolicyDistribution};
pub use prompt::{build_prompt, PromptStyle};
pub use render::{ansi_board, ascii_board, star_points, RenderError};
pub use score::score_p;
