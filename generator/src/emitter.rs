//! Append-only JSONL emission
//!
//! Each example becomes one JSON line appended to the destination
//! file. Repeated runs against the same file accumulate records; no
//! de-duplication is performed.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use goban_core::Example;

#[derive(Debug)]
pub struct ExampleWriter {
    writer: BufWriter<std::fs::File>,
    path: PathBuf,
    written: u64,
}

impl ExampleWriter {
    /// Open the destination for appending, creating it if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open {} for appending", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
            written: 0,
        })
    }

    /// Serialize one example and append it as a single line.
    ///
    /// Flushed per record so a crash mid-run loses at most the example
    /// in flight.
    pub fn append(&mut self, example: &Example) -> Result<()> {
        let line = serde_json::to_string(example).context("serializing example")?;
        writeln!(self.writer, "{}", line)
            .and_then(|_| self.writer.flush())
            .with_context(|| format!("failed to write to {}", self.path.display()))?;
        self.written += 1;
        Ok(())
    }

    /// Number of records appended by this writer instance.
    pub fn written(&self) -> u64 {
        self.written
    }
}
