//! GTP coordinate notation
//!
//! Moves are named by a column letter and a 1-based row number, with
//! the letter `I` skipped per Go convention (so an 8x8-and-larger board
//! runs `... G H J K ...`). The designated pass move is the literal
//! string `pass`.

use crate::board::Coord;

/// Column letters in board order. `I` is omitted.
pub const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Largest renderable board dimension (one column letter per file).
pub const MAX_BOARD_SIZE: usize = 25;

/// The pass move as it appears in policy maps.
pub const PASS: &str = "pass";

/// Error type for GTP coordinate parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GtpError {
    #[error("empty move string")]
    Empty,
    #[error("invalid column letter '{0}'")]
    InvalidColumn(char),
    #[error("invalid row in move '{0}'")]
    InvalidRow(String),
    #[error("move '{0}' is outside a {1}x{2} board")]
    OutOfBounds(String, usize, usize),
}

/// A parsed move: either a board coordinate or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertex {
    Play(Coord),
    Pass,
}

impl Vertex {
    pub fn gtp(&self) -> String {
        match self {
            Vertex::Play(coord) => format_coord(*coord),
            Vertex::Pass => PASS.to_string(),
        }
    }
}

/// Format a coordinate as its GTP string, e.g. `(3, 3)` -> `"D4"`.
pub fn format_coord(coord: Coord) -> String {
    let letter = COLUMN_LETTERS
        .as_bytes()
        .get(coord.x as usize)
        .copied()
        .unwrap_or(b'?') as char;
    format!("{}{}", letter, coord.y as u32 + 1)
}

/// Parse a GTP move string against the given board dimensions.
///
/// Matching is case-insensitive and ignores surrounding whitespace;
/// `"pass"` (any case) parses to `Vertex::Pass`.
pub fn parse_vertex(input: &str, width: usize, height: usize) -> Result<Vertex, GtpError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GtpError::Empty);
    }
    if trimmed.eq_ignore_ascii_case(PASS) {
        return Ok(Vertex::Pass);
    }

    let mut chars = trimmed.chars();
    let letter = chars.next().ok_or(GtpError::Empty)?.to_ascii_uppercase();
    let x = COLUMN_LETTERS
        .find(letter)
        .ok_or(GtpError::InvalidColumn(letter))?;

    let row: usize = chars
        .as_str()
        .parse()
        .map_err(|_| GtpError::InvalidRow(trimmed.to_string()))?;
    if row == 0 {
        return Err(GtpError::InvalidRow(trimmed.to_string()));
    }
    let y = row - 1;

    if x >= width || y >= height {
        return Err(GtpError::OutOfBounds(trimmed.to_string(), width, height));
    }

    Ok(Vertex::Play(Coord::new(x as u8, y as u8)))
}

/// The column guide line rendered above and below the board: three
/// leading spaces, then the first `size` letters single-space separated.
pub fn column_guide(size: usize) -> String {
    let letters: Vec<String> = COLUMN_LETTERS
        .chars()
        .take(size)
        .map(|c| c.to_string())
        .collect();
    format!("   {}", letters.join(" "))
}
