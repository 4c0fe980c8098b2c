//! Aggregate board state and the scoreboard error type.

use crate::models::bracket::{Bracket, Competition, Topology};
use crate::models::sport::{SportId, CARROM_WIN_POINTS, STANDARD_WIN_POINTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Errors that can occur during scoreboard operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoreboardError {
    /// The sport identifier does not name a competition on the board.
    UnknownSport(SportId),
    /// A fixed-size custom format got the wrong number of entrants.
    WrongEntrantCount { needed: usize, got: usize },
    /// A free-for-all needs at least two entrants.
    NotEnoughEntrants { needed: usize, got: usize },
    /// Entrant names must be unique within a competition (case-insensitive).
    DuplicateEntrant(String),
    /// Points to win must be at least 1.
    InvalidWinPoints,
}

impl std::fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreboardError::UnknownSport(_) => write!(f, "No such sport"),
            ScoreboardError::WrongEntrantCount { needed, got } => {
                write!(f, "Needs exactly {} entrants (got {})", needed, got)
            }
            ScoreboardError::NotEnoughEntrants { needed, got } => {
                write!(f, "Needs at least {} entrants (got {})", needed, got)
            }
            ScoreboardError::DuplicateEntrant(name) => {
                write!(f, "Duplicate entrant name: {}", name)
            }
            ScoreboardError::InvalidWinPoints => write!(f, "Points to win must be at least 1"),
        }
    }
}

/// Everything on the board: one competition per sport identifier. Built-ins
/// sort ahead of customs, so views iterate in display order for free.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreboardState {
    competitions: BTreeMap<SportId, Competition>,
}

impl ScoreboardState {
    /// The sports-day board as drawn on the wall: badminton's eight-entrant
    /// chart plus the two four-team boards for volleyball and carrom.
    pub fn seeded() -> Self {
        let mut competitions = BTreeMap::new();
        competitions.insert(
            SportId::Badminton,
            Competition::Builtin(Bracket::seeded(
                "Badminton",
                STANDARD_WIN_POINTS,
                Topology::eight_entrant_crossed(),
                vec![
                    ("Nayan".into(), "Atharva".into()),
                    ("Shivam".into(), "Riya".into()),
                    ("Hrishikesh".into(), "Hitakshi".into()),
                    ("Antra".into(), "Swanup".into()),
                ],
            )),
        );
        competitions.insert(
            SportId::Volleyball,
            Competition::Builtin(Bracket::seeded(
                "Volleyball",
                STANDARD_WIN_POINTS,
                Topology::four_entrant(),
                vec![
                    ("Shivam, Hrishikesh".into(), "Antra, Atharva".into()),
                    ("Swanup, Hitakshi".into(), "Riya, Nayan".into()),
                ],
            )),
        );
        competitions.insert(
            SportId::Carrom,
            Competition::Builtin(Bracket::seeded(
                "Carrom",
                CARROM_WIN_POINTS,
                Topology::four_entrant(),
                vec![
                    ("Nayan, Swanup".into(), "Hrishikesh, Hitakshi".into()),
                    ("Riya, Antra".into(), "Shivam, Atharva".into()),
                ],
            )),
        );
        Self { competitions }
    }

    pub fn competition(&self, sport: &SportId) -> Option<&Competition> {
        self.competitions.get(sport)
    }

    pub fn competition_mut(&mut self, sport: &SportId) -> Option<&mut Competition> {
        self.competitions.get_mut(sport)
    }

    pub fn insert(&mut self, sport: SportId, competition: Competition) {
        self.competitions.insert(sport, competition);
    }

    pub fn contains(&self, sport: &SportId) -> bool {
        self.competitions.contains_key(sport)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SportId, &Competition)> {
        self.competitions.iter()
    }

    pub fn len(&self) -> usize {
        self.competitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitions.is_empty()
    }
}
