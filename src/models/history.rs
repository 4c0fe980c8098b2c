//! Bounded, newest-first log of decided matches.

use crate::models::sport::SportId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hard cap on the log; the oldest entries are dropped past this.
pub const MAX_HISTORY_ENTRIES: usize = 200;

/// One decided match. Entrant labels are copied as displayed at decision time
/// (team seats keep their comma-joined form). Entries are never edited.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub sport: SportId,
    pub entrant_a: String,
    pub entrant_b: String,
    pub score_a: u32,
    pub score_b: u32,
    pub winner: String,
    pub time: DateTime<Utc>,
}

/// The result feed shown on the board: newest first, at most
/// [`MAX_HISTORY_ENTRIES`] long.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry, dropping the oldest once the cap is reached.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    /// Drop every entry for this sport that matches the given pairing and
    /// winner. The pairing is unordered; labels swap seats when a bracket is
    /// re-fought after an undo.
    pub fn remove_result(&mut self, sport: &SportId, entrant_a: &str, entrant_b: &str, winner: &str) {
        self.entries.retain(|e| {
            let same_pair = (e.entrant_a == entrant_a && e.entrant_b == entrant_b)
                || (e.entrant_a == entrant_b && e.entrant_b == entrant_a);
            !(e.sport == *sport && same_pair && e.winner == winner)
        });
    }

    /// Newest recorded winner for a sport. For custom competitions this is
    /// the champion shown in the standings.
    pub fn latest_winner_for(&self, sport: &SportId) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.sport == *sport)
            .map(|e| e.winner.as_str())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
