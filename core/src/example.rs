//! The persisted prompt+policy record
//!
//! One `Example` is one line of a line-delimited JSON file. The
//! canonical schema is `{"prompts": {"ascii": ..., "ansi": ...},
//! "policy": {"D4": 0.8, ...}}`; historical files with a single
//! `"prompt"` string field are accepted on read and surface under the
//! `ascii` key. Records are immutable after creation.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::board::BoardState;
use crate::prompt::{build_prompt, PromptStyle};
use crate::render::RenderError;

/// Probability per GTP move string. Values are in `[0, 1]`; the
/// engine's negative "not considered" sentinels are filtered out
/// before a record is built.
pub type PolicyDistribution = BTreeMap<String, f64>;

/// One labeled training/evaluation record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    pub prompts: BTreeMap<String, String>,
    pub policy: PolicyDistribution,
}

// Wire forms: the canonical `prompts` map, or the historical single
// `prompt` string.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireExample {
    Current {
        prompts: BTreeMap<String, String>,
        policy: PolicyDistribution,
    },
    Legacy {
        prompt: String,
        policy: PolicyDistribution,
    },
}

impl<'de> Deserialize<'de> for Example {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match WireExample::deserialize(deserializer)? {
            WireExample::Current { prompts, policy } => Example { prompts, policy },
            WireExample::Legacy { prompt, policy } => {
                let mut prompts = BTreeMap::new();
                prompts.insert(PromptStyle::Ascii.key().to_string(), prompt);
                Example { prompts, policy }
            }
        })
    }
}

impl Example {
    /// Build a record from a position and the engine's raw policy.
    ///
    /// Renders both prompt variants and drops raw entries with
    /// negative probability (the engine's illegal-move sentinel);
    /// those must never reach a persisted record.
    pub fn from_position(
        board: &BoardState,
        raw_policy: &[(String, f64)],
    ) -> Result<Self, RenderError> {
        let mut prompts = BTreeMap::new();
        prompts.insert(
            PromptStyle::Ascii.key().to_string(),
            build_prompt(board, PromptStyle::Ascii)?,
        );
        prompts.insert(
            PromptStyle::Ansi.key().to_string(),
            build_prompt(board, PromptStyle::Ansi)?,
        );

        let policy: PolicyDistribution = raw_policy
            .iter()
            .filter(|(_, p)| *p >= 0.0)
            .map(|(m, p)| (m.clone(), *p))
            .collect();

        Ok(Example { prompts, policy })
    }

    /// The stored prompt text for a style, if this record carries it.
    pub fn prompt(&self, style: PromptStyle) -> Option<&str> {
        self.prompts.get(style.key()).map(String::as_str)
    }

    /// The highest-probability move and its probability.
    pub fn best_move(&self) -> Option<(&str, f64)> {
        self.policy
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(mv, p)| (mv.as_str(), *p))
    }

    /// Case-insensitive policy lookup for a trimmed guess.
    pub fn lookup(&self, guess: &str) -> Option<f64> {
        self.policy
            .iter()
            .find(|(mv, _)| mv.eq_ignore_ascii_case(guess))
            .map(|(_, p)| *p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, Player, Stone};

    fn sample_board() -> BoardState {
        let mut board = BoardState::empty(9);
        board
            .stones
            .push(Stone::new(Player::Black, Coord::new(3, 3)));
        board.to_play = Player::White;
        board
    }

    #[test]
    fn from_position_renders_both_styles() {
        let example = Example::from_position(&sample_board(), &[("D4".to_string(), 1.0)]).unwrap();
        assert!(example.prompt(PromptStyle::Ascii).is_some());
        assert!(example.prompt(PromptStyle::Ansi).is_some());
        assert!(example.prompt(PromptStyle::Gtp).is_none());
    }

    #[test]
    fn from_position_filters_negative_probabilities() {
        let raw = vec![
            ("D4".to_string(), 0.7),
            ("Q16".to_string(), -1.0),
            ("pass".to_string(), 0.0),
            ("C3".to_string(), -0.5),
        ];
        let example = Example::from_position(&sample_board(), &raw).unwrap();
        assert_eq!(example.policy.len(), 2);
        assert!(example.policy.contains_key("D4"));
        assert!(example.policy.contains_key("pass"));
        assert!(!example.policy.contains_key("Q16"));
    }

    #[test]
    fn serialized_form_uses_prompts_map() {
        let example = Example::from_position(&sample_board(), &[("D4".to_string(), 0.9)]).unwrap();
        let json = serde_json::to_string(&example).unwrap();
        assert!(json.contains("\"prompts\""));
        assert!(json.contains("\"ascii\""));
        assert!(json.contains("\"ansi\""));

        let back: Example = serde_json::from_str(&json).unwrap();
        assert_eq!(back, example);
    }

    #[test]
    fn legacy_single_prompt_field_loads_as_ascii() {
        let json = r#"{"prompt": "old prompt text", "policy": {"D4": 0.8, "Q16": 0.2}}"#;
        let example: Example = serde_json::from_str(json).unwrap();
        assert_eq!(example.prompt(PromptStyle::Ascii), Some("old prompt text"));
        assert_eq!(example.prompt(PromptStyle::Ansi), None);
        assert_eq!(example.policy.len(), 2);
    }

    #[test]
    fn best_move_picks_highest_probability() {
        let example = Example::from_position(
            &sample_board(),
            &[("D4".to_string(), 0.8), ("Q16".to_string(), 0.2)],
        )
        .unwrap();
        let (mv, p) = example.best_move().unwrap();
        assert_eq!(mv, "D4");
        assert_eq!(p, 0.8);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let example = Example::from_position(
            &sample_board(),
            &[("D4".to_string(), 0.8), ("pass".to_string(), 0.1)],
        )
        .unwrap();
        assert_eq!(example.lookup("D4"), Some(0.8));
        assert_eq!(example.lookup("d4"), Some(0.8));
        assert_eq!(example.lookup("PASS"), Some(0.1));
        assert_eq!(example.lookup("Z1"), None);
    }
}
