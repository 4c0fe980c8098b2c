//! Brackets: successor topology, slot maps, and the competition variants.

use crate::models::game::{MatchRecord, Side, SlotId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a decided match sends its winner: which slot, which seat.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SlotLink {
    pub to: SlotId,
    pub side: Side,
}

/// Fixed successor table for a bracket shape. Progression is a pure lookup
/// here; seats never depend on scores or names, so replays land winners in
/// the same place every time.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topology {
    links: BTreeMap<SlotId, SlotLink>,
}

impl Topology {
    pub fn from_links(links: impl IntoIterator<Item = (SlotId, SlotId, Side)>) -> Self {
        Self {
            links: links
                .into_iter()
                .map(|(from, to, side)| (from, SlotLink { to, side }))
                .collect(),
        }
    }

    /// Two opening matches feeding the final directly.
    pub fn four_entrant() -> Self {
        Self::from_links([
            (SlotId::M1, SlotId::Final, Side::A),
            (SlotId::M2, SlotId::Final, Side::B),
        ])
    }

    /// Four opening matches, two semifinals, one final; round-one winners
    /// take the first seat of their semifinal.
    pub fn eight_entrant() -> Self {
        Self::from_links([
            (SlotId::M1, SlotId::SfA, Side::A),
            (SlotId::M2, SlotId::SfA, Side::B),
            (SlotId::M3, SlotId::SfB, Side::A),
            (SlotId::M4, SlotId::SfB, Side::B),
            (SlotId::SfA, SlotId::Final, Side::A),
            (SlotId::SfB, SlotId::Final, Side::B),
        ])
    }

    /// The badminton wall chart as it was drawn: round-one winners take the
    /// second seat of their semifinal (M1's winner lands in SF_A seat B).
    pub fn eight_entrant_crossed() -> Self {
        Self::from_links([
            (SlotId::M1, SlotId::SfA, Side::B),
            (SlotId::M2, SlotId::SfA, Side::A),
            (SlotId::M3, SlotId::SfB, Side::B),
            (SlotId::M4, SlotId::SfB, Side::A),
            (SlotId::SfA, SlotId::Final, Side::A),
            (SlotId::SfB, SlotId::Final, Side::B),
        ])
    }

    /// A lone final with no feeders (head-to-head custom competitions).
    pub fn single_match() -> Self {
        Self::default()
    }

    pub fn successor(&self, from: SlotId) -> Option<SlotLink> {
        self.links.get(&from).copied()
    }

    /// A slot with no successor is the end of the line.
    pub fn is_terminal(&self, slot: SlotId) -> bool {
        !self.links.contains_key(&slot)
    }

    /// Slots that receive a winner from somewhere (their seats are not seeded).
    pub fn fed_slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.links.values().map(|link| link.to)
    }
}

/// One knockout bracket: a display name, the points needed to take a match,
/// the successor table, and a match record per slot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub display_name: String,
    pub win_points: u32,
    pub topology: Topology,
    pub slots: BTreeMap<SlotId, MatchRecord>,
}

impl Bracket {
    /// Build a bracket from round-one pairings, in chart order (first pair is
    /// M1, second M2, ...). Slots fed by the topology start empty.
    pub fn seeded(
        display_name: impl Into<String>,
        win_points: u32,
        topology: Topology,
        round_one: Vec<(String, String)>,
    ) -> Self {
        let mut slots = BTreeMap::new();
        for (slot, (a, b)) in SlotId::ROUND_ONE.iter().zip(round_one) {
            slots.insert(*slot, MatchRecord::between(a, b));
        }
        for slot in topology.fed_slots().collect::<Vec<_>>() {
            slots.entry(slot).or_insert_with(MatchRecord::empty);
        }
        Self {
            display_name: display_name.into(),
            win_points,
            topology,
            slots,
        }
    }

    /// A single head-to-head match, seeded straight into the final slot.
    pub fn single_match(
        display_name: impl Into<String>,
        win_points: u32,
        entrant_a: impl Into<String>,
        entrant_b: impl Into<String>,
    ) -> Self {
        let mut slots = BTreeMap::new();
        slots.insert(SlotId::Final, MatchRecord::between(entrant_a, entrant_b));
        Self {
            display_name: display_name.into(),
            win_points,
            topology: Topology::single_match(),
            slots,
        }
    }

    pub fn slot(&self, id: SlotId) -> Option<&MatchRecord> {
        self.slots.get(&id)
    }

    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut MatchRecord> {
        self.slots.get_mut(&id)
    }

    /// Back to the freshly seeded board: every score and result cleared, and
    /// every seat that is filled by progression blanked. Seeded seats stay.
    pub fn reset_progress(&mut self) {
        let fed: Vec<SlotId> = self.topology.fed_slots().collect();
        for (id, record) in self.slots.iter_mut() {
            record.reset_progress();
            if fed.contains(id) {
                record.entrant_a = None;
                record.entrant_b = None;
            }
        }
    }
}

/// One scored entrant in a free-for-all match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OpenEntrant {
    pub name: String,
    #[serde(default)]
    pub score: u32,
}

/// A free-for-all competition: any number of players sharing one match, first
/// to hold the unique lead at the threshold wins.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OpenMatch {
    pub display_name: String,
    pub win_points: u32,
    pub players: Vec<OpenEntrant>,
    pub winner: Option<String>,
}

impl OpenMatch {
    pub fn new(display_name: impl Into<String>, win_points: u32, names: Vec<String>) -> Self {
        Self {
            display_name: display_name.into(),
            win_points,
            players: names
                .into_iter()
                .map(|name| OpenEntrant { name, score: 0 })
                .collect(),
            winner: None,
        }
    }

    pub fn reset_progress(&mut self) {
        for p in &mut self.players {
            p.score = 0;
        }
        self.winner = None;
    }

    /// All player names except the one at `index`, comma-joined. This is the
    /// "everyone else" label used when the match lands in the history log.
    pub fn others_label(&self, index: usize) -> String {
        self.players
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Highest score among players other than the one at `index`.
    pub fn best_other_score(&self, index: usize) -> u32 {
        self.players
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p.score)
            .max()
            .unwrap_or(0)
    }
}

/// A sport on the board. The three built-ins are fixed brackets; user-created
/// competitions come in three formats behind the same scoring surface.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Competition {
    /// Fixed sports-day bracket (badminton, volleyball, carrom).
    Builtin(Bracket),
    /// User-created eight-entrant knockout.
    CustomBracket(Bracket),
    /// User-created head-to-head (one match, two entrants).
    CustomPair(Bracket),
    /// User-created free-for-all (one match, N entrants).
    CustomFreeForAll(OpenMatch),
}

impl Competition {
    pub fn display_name(&self) -> &str {
        match self {
            Competition::Builtin(b) | Competition::CustomBracket(b) | Competition::CustomPair(b) => {
                &b.display_name
            }
            Competition::CustomFreeForAll(m) => &m.display_name,
        }
    }

    pub fn win_points(&self) -> u32 {
        match self {
            Competition::Builtin(b) | Competition::CustomBracket(b) | Competition::CustomPair(b) => {
                b.win_points
            }
            Competition::CustomFreeForAll(m) => m.win_points,
        }
    }

    /// Built-in brackets log every decided match; custom competitions only
    /// log the final, which keeps "newest entry = champion" true for them.
    pub fn logs_every_round(&self) -> bool {
        matches!(self, Competition::Builtin(_))
    }

    pub fn bracket(&self) -> Option<&Bracket> {
        match self {
            Competition::Builtin(b) | Competition::CustomBracket(b) | Competition::CustomPair(b) => {
                Some(b)
            }
            Competition::CustomFreeForAll(_) => None,
        }
    }

    pub fn bracket_mut(&mut self) -> Option<&mut Bracket> {
        match self {
            Competition::Builtin(b) | Competition::CustomBracket(b) | Competition::CustomPair(b) => {
                Some(b)
            }
            Competition::CustomFreeForAll(_) => None,
        }
    }
}
