//! Data structures for the scoreboard: sports, brackets, matches, history.

mod bracket;
mod game;
mod history;
mod scoreboard;
mod sport;

pub use bracket::{Bracket, Competition, OpenEntrant, OpenMatch, SlotLink, Topology};
pub use game::{MatchRecord, Side, SlotId};
pub use history::{HistoryEntry, HistoryLog, MAX_HISTORY_ENTRIES};
pub use scoreboard::{ScoreboardError, ScoreboardState};
pub use sport::{ParseSportIdError, SportId, CARROM_WIN_POINTS, STANDARD_WIN_POINTS};
