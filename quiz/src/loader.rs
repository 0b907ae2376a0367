//! Strict loading of example files
//!
//! The whole file is read and every line must parse; a malformed line
//! aborts the load rather than degrading to a partial quiz, so data
//! problems surface immediately instead of as missing problems.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use goban_core::Example;

/// Load every record from a line-delimited JSON file.
pub fn load_examples(path: impl AsRef<Path>) -> Result<Vec<Example>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    contents
        .lines()
        .enumerate()
        .map(|(index, line)| {
            serde_json::from_str(line).with_context(|| {
                format!("malformed example on line {} of {}", index + 1, path.display())
            })
        })
        .collect()
}
