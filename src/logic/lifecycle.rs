//! Resets and custom competition creation.

use crate::logic::progression::{self, RevokedResult};
use crate::models::{Bracket, Competition, OpenMatch, ScoreboardError, SlotId, Topology};
use serde::{Deserialize, Serialize};

/// Display name used when a custom competition is created without one.
pub const FALLBACK_CUSTOM_NAME: &str = "Custom Match";

/// Formats a user-created competition can take.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomFormat {
    /// Eight entrants on a knockout chart.
    #[default]
    Bracket,
    /// Two entrants, one match.
    Pair,
    /// Any number of entrants sharing one match.
    FreeForAll,
}

/// Validate and build a custom competition.
///
/// Entrant names are trimmed and blank entries dropped before counting. A
/// bracket needs exactly 8 names, a pair exactly 2, a free-for-all at least
/// 2; names must be unique (case-insensitive); the threshold must be at
/// least 1. Nothing is built unless every check passes. Round-one slots are
/// seeded pairwise in input order: names 1 and 2 meet in M1, 3 and 4 in M2,
/// and so on.
pub fn create_custom(
    format: CustomFormat,
    display_name: &str,
    win_points: u32,
    entrants: Vec<String>,
) -> Result<Competition, ScoreboardError> {
    if win_points == 0 {
        return Err(ScoreboardError::InvalidWinPoints);
    }
    let names: Vec<String> = entrants
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    for (i, name) in names.iter().enumerate() {
        if names[..i].iter().any(|seen| seen.eq_ignore_ascii_case(name)) {
            return Err(ScoreboardError::DuplicateEntrant(name.clone()));
        }
    }
    let display_name = match display_name.trim() {
        "" => FALLBACK_CUSTOM_NAME.to_string(),
        trimmed => trimmed.to_string(),
    };

    match format {
        CustomFormat::Bracket => {
            if names.len() != 8 {
                return Err(ScoreboardError::WrongEntrantCount {
                    needed: 8,
                    got: names.len(),
                });
            }
            let mut pairs = Vec::with_capacity(4);
            let mut iter = names.into_iter();
            while let (Some(a), Some(b)) = (iter.next(), iter.next()) {
                pairs.push((a, b));
            }
            Ok(Competition::CustomBracket(Bracket::seeded(
                display_name,
                win_points,
                Topology::eight_entrant(),
                pairs,
            )))
        }
        CustomFormat::Pair => match <[String; 2]>::try_from(names) {
            Ok([a, b]) => Ok(Competition::CustomPair(Bracket::single_match(
                display_name,
                win_points,
                a,
                b,
            ))),
            Err(names) => Err(ScoreboardError::WrongEntrantCount {
                needed: 2,
                got: names.len(),
            }),
        },
        CustomFormat::FreeForAll => {
            if names.len() < 2 {
                return Err(ScoreboardError::NotEnoughEntrants {
                    needed: 2,
                    got: names.len(),
                });
            }
            Ok(Competition::CustomFreeForAll(OpenMatch::new(
                display_name,
                win_points,
                names,
            )))
        }
    }
}

/// Reset one match: zero its scores, clear its result, and blank everything
/// it fed downstream (even if it was undecided, so a half-played slot cannot
/// leave stale progress after it). Seats stay; upstream results still own
/// them. Returns every result (the slot's own and any downstream) that no
/// longer stands, so the history log can forget them.
///
/// For a free-for-all the single shared match answers to `FINAL`; other slot
/// values are no-ops.
pub fn reset_match(competition: &mut Competition, slot: SlotId) -> Vec<RevokedResult> {
    match competition {
        Competition::Builtin(bracket)
        | Competition::CustomBracket(bracket)
        | Competition::CustomPair(bracket) => {
            let mut revoked = Vec::new();
            let record = match bracket.slot_mut(slot) {
                Some(r) => r,
                None => return revoked,
            };
            if let (Some(winner), Some(a), Some(b)) = (
                record.winner.clone(),
                record.entrant_a.clone(),
                record.entrant_b.clone(),
            ) {
                revoked.push(RevokedResult {
                    entrant_a: a,
                    entrant_b: b,
                    winner,
                });
            }
            record.reset_progress();
            revoked.extend(progression::propagate(bracket, slot, None));
            revoked
        }
        Competition::CustomFreeForAll(open) => {
            if slot != SlotId::Final {
                return Vec::new();
            }
            let mut revoked = Vec::new();
            if let Some(winner) = open.winner.clone() {
                if let Some(idx) = open.players.iter().position(|p| p.name == winner) {
                    revoked.push(RevokedResult {
                        entrant_a: winner.clone(),
                        entrant_b: open.others_label(idx),
                        winner,
                    });
                }
            }
            open.reset_progress();
            revoked
        }
    }
}

/// Restore a competition to its freshly seeded configuration: every score,
/// result, and fed seat cleared; seeded seats and entrant lists kept.
pub fn reset_competition(competition: &mut Competition) {
    match competition {
        Competition::Builtin(bracket)
        | Competition::CustomBracket(bracket)
        | Competition::CustomPair(bracket) => bracket.reset_progress(),
        Competition::CustomFreeForAll(open) => open.reset_progress(),
    }
}
