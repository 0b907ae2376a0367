//! Prompt composition
//!
//! A prompt is the fixed legend sentence, the rendered board, the
//! "whose turn" banner, and the instruction footer, joined by
//! newlines. Both text variants derive from the same `BoardState`
//! without re-querying the engine.

use clap::ValueEnum;

use crate::board::BoardState;
use crate::render::{ansi_board, ascii_board, RenderError};

/// Fixed sentence identifying the position and explaining the glyphs.
pub const LEGEND: &str =
    "This is a position from a game of Go. X represents a black stone and O represents a white stone.";

/// Fixed instruction footer asking for a GTP-format move.
pub const INSTRUCTION: &str =
    "Please try to find the best move. Enter the coordinates in GTP format (letter followed by number).\nYour move:";

/// Rendering style of a stored prompt.
///
/// `Ascii` and `Ansi` are produced by the generator; `Gtp` exists as a
/// selector for historical data files and cannot be rendered from a
/// board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PromptStyle {
    Ascii,
    Ansi,
    Gtp,
}

impl PromptStyle {
    /// Stable key used in the persisted `prompts` map.
    pub fn key(&self) -> &'static str {
        match self {
            PromptStyle::Ascii => "ascii",
            PromptStyle::Ansi => "ansi",
            PromptStyle::Gtp => "gtp",
        }
    }
}

impl std::fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Build the full prompt text for a position in the given style.
pub fn build_prompt(board: &BoardState, style: PromptStyle) -> Result<String, RenderError> {
    let board_text = match style {
        PromptStyle::Ascii => ascii_board(board)?,
        PromptStyle::Ansi => ansi_board(board)?,
        PromptStyle::Gtp => {
            return Err(RenderError::UnsupportedStyle(style.key().to_string()));
        }
    };
    Ok([
        LEGEND,
        board_text.as_str(),
        board.to_play.to_play_banner(),
        INSTRUCTION,
    ]
    .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, Player, Stone};

    #[test]
    fn prompt_sandwiches_board_between_fixed_text() {
        let board = BoardState::empty(9);
        let prompt = build_prompt(&board, PromptStyle::Ascii).unwrap();
        assert!(prompt.starts_with(LEGEND));
        assert!(prompt.ends_with("Your move:"));
        assert!(prompt.contains("   A B C D E F G H J"));
        assert!(prompt.contains("Black (X) to play."));
    }

    #[test]
    fn prompt_turn_line_follows_next_player() {
        let mut board = BoardState::empty(9);
        board.to_play = Player::White;
        let prompt = build_prompt(&board, PromptStyle::Ascii).unwrap();
        assert!(prompt.contains("White (O) to play."));
        assert!(!prompt.contains("Black (X) to play."));
    }

    #[test]
    fn ascii_and_ansi_variants_share_structure() {
        let mut board = BoardState::empty(9);
        board
            .stones
            .push(Stone::new(Player::Black, Coord::new(4, 4)));
        let plain = build_prompt(&board, PromptStyle::Ascii).unwrap();
        let colored = build_prompt(&board, PromptStyle::Ansi).unwrap();
        assert_ne!(plain, colored);
        assert_eq!(plain.lines().count(), colored.lines().count());
    }

    #[test]
    fn gtp_style_cannot_be_rendered() {
        let board = BoardState::empty(9);
        assert_eq!(
            build_prompt(&board, PromptStyle::Gtp),
            Err(RenderError::UnsupportedStyle("gtp".to_string()))
        );
    }

    #[test]
    fn style_keys_are_lowercase() {
        assert_eq!(PromptStyle::Ascii.key(), "ascii");
        assert_eq!(PromptStyle::Ansi.key(), "ansi");
        assert_eq!(PromptStyle::Gtp.key(), "gtp");
    }
}
