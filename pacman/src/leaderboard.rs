//! Score submission to the leaderboard service, with a local fallback.
//!
//! The simulation never waits on any of this: finished rounds hand their record to a
//! [`ScoreReporter`], which submits it on a worker thread and falls back to a local store when the
//! service is slow, down, or not configured.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use pacman_common::{top_scores, ScoreRecord};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::error::LeaderboardError;

// Standard User-Agent: name/version (+site)
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (+https://pacman.xevion.dev)"
);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A key-sorted score store.
pub trait Leaderboard: Send + Sync {
    fn submit(&self, record: &ScoreRecord) -> Result<(), LeaderboardError>;

    /// The best `limit` records, highest score first.
    fn top(&self, limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError>;
}

/// Talks to a `pacman-server` instance.
pub struct HttpLeaderboard {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpLeaderboard {
    pub fn new(base_url: &str) -> Result<Self, LeaderboardError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/leaderboard", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Leaderboard for HttpLeaderboard {
    fn submit(&self, record: &ScoreRecord) -> Result<(), LeaderboardError> {
        self.client.post(&self.endpoint).json(record).send()?.error_for_status()?;
        Ok(())
    }

    fn top(&self, limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        let records: Vec<ScoreRecord> = self.client.get(&self.endpoint).send()?.error_for_status()?.json()?;
        Ok(top_scores(&records, limit))
    }
}

/// In-process store, optionally mirrored to a JSON file.
#[derive(Debug, Default)]
pub struct LocalLeaderboard {
    records: Mutex<Vec<ScoreRecord>>,
    path: Option<PathBuf>,
}

impl LocalLeaderboard {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens a file-backed store, loading any records already saved there.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LeaderboardError> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => Vec::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(count = records.len(), path = %path.display(), "Loaded local leaderboard");
        Ok(Self {
            records: Mutex::new(records),
            path: Some(path),
        })
    }

    /// Like [`open`](Self::open), but an unreadable or corrupt file degrades to an in-memory store
    /// instead of failing. The broken file is left untouched.
    pub fn open_or_in_memory(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::open(path).unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "Unusable local leaderboard, keeping scores in memory");
            Self::in_memory()
        })
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Removes every record.
    pub fn clear(&self) -> Result<(), LeaderboardError> {
        let mut records = self.records.lock();
        records.clear();
        self.persist(&records)
    }

    fn persist(&self, records: &[ScoreRecord]) -> Result<(), LeaderboardError> {
        if let Some(path) = &self.path {
            fs::write(path, serde_json::to_string_pretty(records)?)?;
        }
        Ok(())
    }
}

impl Leaderboard for LocalLeaderboard {
    fn submit(&self, record: &ScoreRecord) -> Result<(), LeaderboardError> {
        let mut records = self.records.lock();
        records.push(record.clone());
        self.persist(&records)
    }

    fn top(&self, limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        Ok(top_scores(&self.records.lock(), limit))
    }
}

/// Fire-and-forget score submission.
#[derive(Clone)]
pub struct ScoreReporter {
    primary: Option<Arc<dyn Leaderboard>>,
    fallback: Arc<LocalLeaderboard>,
}

impl ScoreReporter {
    pub fn new(primary: Option<Arc<dyn Leaderboard>>, fallback: Arc<LocalLeaderboard>) -> Self {
        Self { primary, fallback }
    }

    /// A reporter that only records locally.
    pub fn local(fallback: Arc<LocalLeaderboard>) -> Self {
        Self::new(None, fallback)
    }

    /// Submits `record` in the background. The handle may be joined but never has to be.
    pub fn report(&self, record: ScoreRecord) -> Option<JoinHandle<()>> {
        let reporter = self.clone();
        let submitted = record.clone();
        let spawned = thread::Builder::new()
            .name("score-reporter".into())
            .spawn(move || reporter.submit_blocking(&submitted));

        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "Failed to spawn score reporter, recording locally");
                self.record_locally(&record);
                None
            }
        }
    }

    /// Submits to the primary store, falling back to the local one on failure.
    pub fn submit_blocking(&self, record: &ScoreRecord) {
        if let Some(primary) = &self.primary {
            match primary.submit(record) {
                Ok(()) => {
                    info!(name = %record.name, score = record.score, "Score submitted");
                    return;
                }
                Err(e) => warn!(error = %e, name = %record.name, score = record.score, "Score submission failed, using local fallback"),
            }
        }

        self.record_locally(record);
    }

    fn record_locally(&self, record: &ScoreRecord) {
        if let Err(e) = self.fallback.submit(record) {
            warn!(error = %e, "Failed to record score locally");
        } else {
            debug!(name = %record.name, score = record.score, "Score recorded locally");
        }
    }
}
