//! Players, coordinates, stones, and position snapshots
//!
//! A `BoardState` is a point-in-time view of a position as reported by
//! the engine collaborator. The stone set only changes through the
//! engine applying moves; these types never implement Go rules.

use crate::gtp;

/// The two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Stone glyph used by the plain-text renderer.
    pub fn glyph(&self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }

    /// The "whose turn" banner line for prompts.
    pub fn to_play_banner(&self) -> &'static str {
        match self {
            Player::Black => "Black (X) to play.",
            Player::White => "White (O) to play.",
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// A board intersection, 0-indexed from the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// GTP display form: column letter (skipping `I`) plus 1-based row.
    pub fn gtp(&self) -> String {
        gtp::format_coord(*self)
    }
}

/// A stone on the board. Immutable once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stone {
    pub player: Player,
    pub coord: Coord,
}

impl Stone {
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }
}

/// Snapshot of a position: dimensions, stones, and the next player.
///
/// The renderer only supports square boards; `width != height` is
/// rejected there rather than silently mis-rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub width: usize,
    pub height: usize,
    pub stones: Vec<Stone>,
    pub to_play: Player,
}

impl BoardState {
    /// An empty square board with Black to play.
    pub fn empty(size: usize) -> Self {
        Self {
            width: size,
            height: size,
            stones: Vec::new(),
            to_play: Player::Black,
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Whether the intersection is free of stones.
    pub fn is_empty_point(&self, coord: Coord) -> bool {
        !self.stones.iter().any(|s| s.coord == coord)
    }
}
