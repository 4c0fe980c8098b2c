//! Match records, seats, and bracket slot identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which seat of a match an entrant occupies (or a tap targets).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Map the external 1-based entrant index (1 or 2) to a seat.
    pub fn from_entrant_index(index: usize) -> Option<Side> {
        match index {
            1 => Some(Side::A),
            2 => Some(Side::B),
            _ => None,
        }
    }
}

/// Position of a match on the wall chart. Serialized with the chart labels
/// ("M1".."M4", "SF_A", "SF_B", "FINAL") so the persisted state reads like the
/// printed bracket.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotId {
    M1,
    M2,
    M3,
    M4,
    SfA,
    SfB,
    Final,
}

impl SlotId {
    /// Round-one slots in chart order; seeding fills these left to right.
    pub const ROUND_ONE: [SlotId; 4] = [SlotId::M1, SlotId::M2, SlotId::M3, SlotId::M4];
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SlotId::M1 => "M1",
            SlotId::M2 => "M2",
            SlotId::M3 => "M3",
            SlotId::M4 => "M4",
            SlotId::SfA => "SF_A",
            SlotId::SfB => "SF_B",
            SlotId::Final => "FINAL",
        };
        write!(f, "{}", label)
    }
}

/// A single match on the board: two seats, two tap counters, and the decided
/// result. Seats hold display labels (a "team" is one comma-joined label);
/// `None` means the seat is still waiting on an earlier round.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub entrant_a: Option<String>,
    pub entrant_b: Option<String>,
    #[serde(default)]
    pub score_a: u32,
    #[serde(default)]
    pub score_b: u32,
    /// Set once the match is decided; locks further increments.
    pub winner: Option<String>,
    /// Only ever set on the terminal slot, alongside `winner`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner_up: Option<String>,
}

impl MatchRecord {
    /// A match with both seats filled and no progress.
    pub fn between(entrant_a: impl Into<String>, entrant_b: impl Into<String>) -> Self {
        Self {
            entrant_a: Some(entrant_a.into()),
            entrant_b: Some(entrant_b.into()),
            ..Self::default()
        }
    }

    /// A match whose seats wait on earlier rounds.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entrant(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.entrant_a.as_deref(),
            Side::B => self.entrant_b.as_deref(),
        }
    }

    pub fn set_entrant(&mut self, side: Side, name: String) {
        match side {
            Side::A => self.entrant_a = Some(name),
            Side::B => self.entrant_b = Some(name),
        }
    }

    pub fn clear_entrant(&mut self, side: Side) {
        match side {
            Side::A => self.entrant_a = None,
            Side::B => self.entrant_b = None,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::A => self.score_a,
            Side::B => self.score_b,
        }
    }

    pub fn add_point(&mut self, side: Side) {
        match side {
            Side::A => self.score_a += 1,
            Side::B => self.score_b += 1,
        }
    }

    /// Take one point back. Returns false when the score is already at zero.
    pub fn remove_point(&mut self, side: Side) -> bool {
        let score = match side {
            Side::A => &mut self.score_a,
            Side::B => &mut self.score_b,
        };
        if *score == 0 {
            return false;
        }
        *score -= 1;
        true
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Zero the scores and clear the result. Seats are left alone; they are
    /// owned by whichever earlier round filled them.
    pub fn reset_progress(&mut self) {
        self.score_a = 0;
        self.score_b = 0;
        self.winner = None;
        self.runner_up = None;
    }
}
