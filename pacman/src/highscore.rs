//! The best score ever seen on this device, stored as a single integer in a text file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::HighScoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    best: u32,
    path: Option<PathBuf>,
}

impl HighScore {
    /// A high score that lives only as long as the process.
    pub fn in_memory(best: u32) -> Self {
        Self { best, path: None }
    }

    /// A zero high score that will be written to `path` once beaten, replacing whatever is there.
    pub fn empty_at(path: impl AsRef<Path>) -> Self {
        Self {
            best: 0,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Reads the stored high score. A missing file means no score has been recorded yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HighScoreError> {
        let path = path.as_ref().to_path_buf();
        let best = match fs::read_to_string(&path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    0
                } else {
                    trimmed
                        .parse()
                        .map_err(|_| HighScoreError::Malformed(trimmed.to_string()))?
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };

        debug!(best, path = %path.display(), "Loaded high score");
        Ok(Self { best, path: Some(path) })
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Records `score`, persisting it when it beats the current best.
    ///
    /// Returns whether a new best was set. The in-memory value is updated even if writing fails.
    pub fn record(&mut self, score: u32) -> Result<bool, HighScoreError> {
        if score <= self.best {
            return Ok(false);
        }

        self.best = score;
        if let Some(path) = &self.path {
            fs::write(path, score.to_string())?;
        }
        Ok(true)
    }
}
