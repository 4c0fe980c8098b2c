//! Scoreboard business logic: scoring, progression, lifecycle, standings.

mod lifecycle;
mod progression;
mod scoring;
mod standings;

pub use lifecycle::{
    create_custom, reset_competition, reset_match, CustomFormat, FALLBACK_CUSTOM_NAME,
};
pub use progression::{propagate, RevokedResult};
pub use scoring::{
    add_point, open_add_point, open_subtract_point, subtract_point, ConcludedMatch, ScoreOutcome,
};
pub use standings::{rank, standings, Standing};
