//! JSON file persistence for the two board blobs.

use crate::models::{HistoryLog, ScoreboardState};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Competition map blob, one file.
pub const STATE_FILE: &str = "tournament-state.json";
/// Result history blob, independent of the state blob.
pub const HISTORY_FILE: &str = "match-history.json";

/// File-backed store for the board. The two blobs are pretty-printed JSON,
/// written whole on every save; the web process is the only writer, so the
/// last write wins and no locking is done.
#[derive(Clone, Debug)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the `DATA_DIR` env var, falling back to `./data`.
    pub fn from_env() -> Self {
        let dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self::new(dir)
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    /// Load the board, falling back to the seeded defaults when the file is
    /// missing. A file that does not parse is discarded with a warning and
    /// the board restarts from the defaults rather than refusing to come up.
    pub fn load_state(&self) -> ScoreboardState {
        read_json(&self.state_path()).unwrap_or_else(ScoreboardState::seeded)
    }

    /// Load the history, or an empty log when missing or unreadable.
    pub fn load_history(&self) -> HistoryLog {
        read_json(&self.history_path()).unwrap_or_default()
    }

    pub fn save_state(&self, state: &ScoreboardState) -> io::Result<()> {
        write_json(&self.dir, &self.state_path(), state)
    }

    pub fn save_history(&self, history: &HistoryLog) -> io::Result<()> {
        write_json(&self.dir, &self.history_path(), history)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding malformed {}: {}", path.display(), e);
            None
        }
    }
}

fn write_json<T: serde::Serialize>(dir: &Path, path: &Path, value: &T) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)
}
