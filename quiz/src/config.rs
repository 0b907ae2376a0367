//! Configuration for the quiz binary

use anyhow::{anyhow, Result};
use clap::Parser;

use goban_core::PromptStyle;

#[derive(Parser, Debug, Clone)]
#[command(name = "goban-quiz")]
#[command(about = "Quiz yourself on generated Go positions")]
#[command(
    long_about = "Loads a line-delimited JSON examples file, presents a random subset
of positions, and scores each guessed move against the stored policy
distribution."
)]
pub struct Config {
    /// Examples file produced by the generator (.jsonl)
    pub filename: String,

    /// Number of problems to present (0 for all loaded examples)
    #[arg(short, long, default_value_t = 10)]
    pub count: u32,

    /// Which stored prompt rendering to present
    #[arg(short, long, value_enum, default_value_t = PromptStyle::Ansi)]
    pub prompt: PromptStyle,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.filename.ends_with(".jsonl") {
            return Err(anyhow!(
                "examples file '{}' must end in .jsonl",
                self.filename
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_jsonl_file() {
        let cfg = Config {
            filename: "examples.jsonl".into(),
            count: 10,
            prompt: PromptStyle::Ansi,
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_other_extensions() {
        let cfg = Config {
            filename: "examples.json".into(),
            count: 10,
            prompt: PromptStyle::Ascii,
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains(".jsonl"));
    }
}
