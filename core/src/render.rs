//! Text board rendering
//!
//! Renders a `BoardState` as a multi-line text block: a column-letter
//! guide above and below, row numbers on both sides, `.` for empty
//! intersections, `,` for star points, and the player glyphs for
//! stones. Output is deterministic for a given stone configuration.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::board::{BoardState, Player};
use crate::gtp;

/// ANSI rendering of a black stone (dim gray `X`).
pub const ANSI_BLACK_STONE: &str = "\x1b[90mX\x1b[0m";
/// ANSI rendering of a white stone (bright white `O`).
pub const ANSI_WHITE_STONE: &str = "\x1b[1;37mO\x1b[0m";

/// Error type for rendering operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("non-square boards are unsupported: got {width}x{height}")]
    NonSquare { width: usize, height: usize },
    #[error("board size {0} exceeds the maximum of {max}", max = gtp::MAX_BOARD_SIZE)]
    TooLarge(usize),
    #[error("stone at {0} lies outside a {1}x{1} board")]
    StoneOffBoard(String, usize),
    #[error("prompt style '{0}' cannot be rendered from board state")]
    UnsupportedStyle(String),
}

// Star point sets are pure in the board size; memoize per size.
static STAR_POINT_CACHE: Lazy<Mutex<HashMap<usize, BTreeSet<(usize, usize)>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// The star ("hoshi") marker coordinates for a square board.
///
/// Markers sit on the third line from each edge for boards smaller
/// than 11, the fourth line otherwise, plus the exact center point
/// when the dimension is odd. The set is symmetric under the board's
/// rotations and reflections.
pub fn star_points(size: usize) -> BTreeSet<(usize, usize)> {
    let mut cache = STAR_POINT_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    cache
        .entry(size)
        .or_insert_with(|| compute_star_points(size))
        .clone()
}

fn compute_star_points(size: usize) -> BTreeSet<(usize, usize)> {
    let d = if size < 11 { 3 } else { 4 };
    if size < d {
        return BTreeSet::new();
    }

    let mut anchors = BTreeSet::new();
    anchors.insert(d - 1);
    anchors.insert(size - d);
    if size % 2 == 1 {
        anchors.insert((size - 1) / 2);
    }

    let mut points = BTreeSet::new();
    for &x in &anchors {
        for &y in &anchors {
            points.insert((x, y));
        }
    }
    points
}

/// Render a board with explicit stone glyphs.
///
/// The glyphs may be multi-byte (ANSI escape sequences); they occupy
/// one visible column either way.
pub fn render_board(
    board: &BoardState,
    black_stone: &str,
    white_stone: &str,
) -> Result<String, RenderError> {
    if !board.is_square() {
        return Err(RenderError::NonSquare {
            width: board.width,
            height: board.height,
        });
    }
    let size = board.width;
    if size > gtp::MAX_BOARD_SIZE {
        return Err(RenderError::TooLarge(size));
    }

    let sp = star_points(size);
    let mut cells: Vec<Vec<String>> = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| {
                    if sp.contains(&(x, y)) {
                        ",".to_string()
                    } else {
                        ".".to_string()
                    }
                })
                .collect()
        })
        .collect();

    for stone in &board.stones {
        let (x, y) = (stone.coord.x as usize, stone.coord.y as usize);
        if x >= size || y >= size {
            return Err(RenderError::StoneOffBoard(stone.coord.gtp(), size));
        }
        cells[y][x] = match stone.player {
            Player::Black => black_stone.to_string(),
            Player::White => white_stone.to_string(),
        };
    }

    let guide = gtp::column_guide(size);
    let mut lines = Vec::with_capacity(size + 2);
    lines.push(guide.clone());
    for y in (0..size).rev() {
        let row = cells[y].join(" ");
        lines.push(format!("{:>2} {} {}", y + 1, row, y + 1));
    }
    lines.push(guide);
    Ok(lines.join("\n"))
}

/// Plain-text board: `X` for Black, `O` for White.
pub fn ascii_board(board: &BoardState) -> Result<String, RenderError> {
    render_board(board, "X", "O")
}

/// ANSI-colored board for terminal display.
pub fn ansi_board(board: &BoardState) -> Result<String, RenderError> {
    render_board(board, ANSI_BLACK_STONE, ANSI_WHITE_STONE)
}
