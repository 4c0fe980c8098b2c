//! Sports day scoreboard: library with models, scoring logic, and storage.

pub mod app;
pub mod lessons;
pub mod logic;
pub mod models;
pub mod store;

pub use app::Scoreboard;
pub use logic::{
    add_point, create_custom, open_add_point, open_subtract_point, propagate, rank,
    reset_competition, reset_match, standings, subtract_point, ConcludedMatch, CustomFormat,
    RevokedResult, ScoreOutcome, Standing, FALLBACK_CUSTOM_NAME,
};
pub use models::{
    Bracket, Competition, HistoryEntry, HistoryLog, MatchRecord, OpenEntrant, OpenMatch,
    ScoreboardError, ScoreboardState, Side, SlotId, SlotLink, SportId, Topology,
    CARROM_WIN_POINTS, MAX_HISTORY_ENTRIES, STANDARD_WIN_POINTS,
};
pub use store::Store;
