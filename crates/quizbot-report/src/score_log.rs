//! JSON-lines score log.
//!
//! One [`ScoreRecord`] per line, appended after every completed session.
//! Lines are never rewritten.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizbot_core::report::ScoreRecord;
use quizbot_core::traits::ScoreSink;

/// A [`ScoreSink`] backed by an append-only `.jsonl` file.
#[derive(Debug, Clone)]
pub struct JsonlScoreLog {
    path: PathBuf,
}

impl JsonlScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every record written so far.
    pub fn read_all(&self) -> Result<Vec<ScoreRecord>> {
        read_score_log(&self.path)
    }
}

impl ScoreSink for JsonlScoreLog {
    fn append(&mut self, record: &ScoreRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut line = serde_json::to_string(record).context("failed to serialize score record")?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open score log {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("failed to append to score log {}", self.path.display()))?;

        tracing::debug!("appended score record to {}", self.path.display());
        Ok(())
    }
}

/// Parse a score log. A missing file is an empty history; blank lines are
/// skipped; any other unparseable line is an error naming its line number.
pub fn read_score_log(path: &Path) -> Result<Vec<ScoreRecord>> {
    if !path.exists() {
        tracing::debug!("score log {} does not exist yet", path.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read score log {}", path.display()))?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<ScoreRecord>(line)
                .with_context(|| format!("{}:{}: malformed score record", path.display(), i + 1))
        })
        .collect()
}
