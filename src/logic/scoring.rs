//! Tap scoring: increments that can decide a match, decrements that can
//! take a decision back.

use crate::logic::progression::{self, RevokedResult};
use crate::models::{Bracket, OpenMatch, Side, SlotId};

/// What a single tap did to the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoreOutcome {
    /// Guarded no-op: unknown slot, locked match, waiting seat, bad entrant
    /// index, or a decrement at zero. Nothing changed.
    Ignored,
    /// A score moved; nothing was decided or undone.
    Adjusted,
    /// This increment decided the match.
    Resolved(ConcludedMatch),
    /// This decrement undid a decision, along with any downstream results
    /// that fell with it.
    Revoked(Vec<RevokedResult>),
}

/// A decision as it happened, captured for the history log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConcludedMatch {
    pub slot: SlotId,
    pub entrant_a: String,
    pub entrant_b: String,
    pub score_a: u32,
    pub score_b: u32,
    pub winner: String,
    /// True when the decided slot ends its bracket.
    pub terminal: bool,
}

/// Add one point to a seat and re-check for a decision.
///
/// No-ops: a slot this bracket does not have, a match that is already
/// decided (the lock re-check behind the UI's own guard), or a seat still
/// waiting on an earlier round (a match against nobody is not playable).
///
/// A decision needs one score at or past `win_points` with a strict lead.
/// Equal scores at the threshold keep the match open; play continues until a
/// later tap breaks the tie. Deciding a match pushes the winner into the
/// successor seat; on the terminal slot the other entrant is recorded as
/// runner-up.
pub fn add_point(bracket: &mut Bracket, slot: SlotId, side: Side) -> ScoreOutcome {
    let win_points = bracket.win_points;
    let terminal = bracket.topology.is_terminal(slot);
    let record = match bracket.slot_mut(slot) {
        Some(r) => r,
        None => return ScoreOutcome::Ignored,
    };
    if record.is_decided() {
        return ScoreOutcome::Ignored;
    }
    let (entrant_a, entrant_b) = match (record.entrant_a.clone(), record.entrant_b.clone()) {
        (Some(a), Some(b)) => (a, b),
        _ => return ScoreOutcome::Ignored,
    };

    record.add_point(side);
    let (score_a, score_b) = (record.score_a, record.score_b);

    if score_a < win_points && score_b < win_points {
        return ScoreOutcome::Adjusted;
    }
    if score_a == score_b {
        // Tie at or past the threshold: no winner until someone leads.
        return ScoreOutcome::Adjusted;
    }

    let (winner, loser) = if score_a > score_b {
        (entrant_a.clone(), entrant_b.clone())
    } else {
        (entrant_b.clone(), entrant_a.clone())
    };
    record.winner = Some(winner.clone());
    if terminal {
        record.runner_up = Some(loser);
    }
    progression::propagate(bracket, slot, Some(&winner));

    ScoreOutcome::Resolved(ConcludedMatch {
        slot,
        entrant_a,
        entrant_b,
        score_a,
        score_b,
        winner,
        terminal,
    })
}

/// Take one point back from a seat. Scores floor at zero.
///
/// This is the undo path, so it works on decided matches too. If the match
/// was decided and its winner no longer holds the threshold with a strict
/// lead, the decision is revoked and everything it fed downstream is
/// cleared. A decrement never decides a match; only the next increment can.
pub fn subtract_point(bracket: &mut Bracket, slot: SlotId, side: Side) -> ScoreOutcome {
    let win_points = bracket.win_points;
    let record = match bracket.slot_mut(slot) {
        Some(r) => r,
        None => return ScoreOutcome::Ignored,
    };
    if !record.remove_point(side) {
        return ScoreOutcome::Ignored;
    }

    let winner = match record.winner.clone() {
        Some(w) => w,
        None => return ScoreOutcome::Adjusted,
    };
    let (held, other) = if record.entrant_a.as_deref() == Some(winner.as_str()) {
        (record.score_a, record.score_b)
    } else {
        (record.score_b, record.score_a)
    };
    if held >= win_points && held > other {
        return ScoreOutcome::Adjusted;
    }

    let mut revoked = Vec::new();
    if let (Some(a), Some(b)) = (record.entrant_a.clone(), record.entrant_b.clone()) {
        revoked.push(RevokedResult {
            entrant_a: a,
            entrant_b: b,
            winner,
        });
    }
    record.winner = None;
    record.runner_up = None;
    revoked.extend(progression::propagate(bracket, slot, None));
    ScoreOutcome::Revoked(revoked)
}

/// Add one point to a free-for-all player (1-based index) and re-check for a
/// winner: the unique top scorer at or past the threshold. A shared top
/// score holds the match open, same as the bracket tie rule.
pub fn open_add_point(open: &mut OpenMatch, entrant_index: usize) -> ScoreOutcome {
    if open.winner.is_some() {
        return ScoreOutcome::Ignored;
    }
    let idx = match entrant_index.checked_sub(1) {
        Some(i) if i < open.players.len() => i,
        _ => return ScoreOutcome::Ignored,
    };
    open.players[idx].score += 1;

    match open_leader(open) {
        Some(lead) => {
            let winner = open.players[lead].name.clone();
            open.winner = Some(winner.clone());
            ScoreOutcome::Resolved(ConcludedMatch {
                slot: SlotId::Final,
                entrant_a: winner.clone(),
                entrant_b: open.others_label(lead),
                score_a: open.players[lead].score,
                score_b: open.best_other_score(lead),
                winner,
                terminal: true,
            })
        }
        None => ScoreOutcome::Adjusted,
    }
}

/// Take one point back from a free-for-all player. If the recorded winner no
/// longer holds the unique qualifying lead, the decision is undone. As with
/// brackets, a decrement never crowns anyone, even if it leaves a different
/// player qualified; their next tap decides it.
pub fn open_subtract_point(open: &mut OpenMatch, entrant_index: usize) -> ScoreOutcome {
    let idx = match entrant_index.checked_sub(1) {
        Some(i) if i < open.players.len() => i,
        _ => return ScoreOutcome::Ignored,
    };
    if open.players[idx].score == 0 {
        return ScoreOutcome::Ignored;
    }
    open.players[idx].score -= 1;

    let winner = match open.winner.clone() {
        Some(w) => w,
        None => return ScoreOutcome::Adjusted,
    };
    let still_holds = open_leader(open)
        .map(|lead| open.players[lead].name == winner)
        .unwrap_or(false);
    if still_holds {
        return ScoreOutcome::Adjusted;
    }

    open.winner = None;
    let revoked = match open.players.iter().position(|p| p.name == winner) {
        Some(w) => vec![RevokedResult {
            entrant_a: winner.clone(),
            entrant_b: open.others_label(w),
            winner,
        }],
        None => Vec::new(),
    };
    ScoreOutcome::Revoked(revoked)
}

/// Index of the unique top scorer at or past the threshold, if there is one.
fn open_leader(open: &OpenMatch) -> Option<usize> {
    let best = open.players.iter().map(|p| p.score).max()?;
    if best < open.win_points {
        return None;
    }
    let mut at_best = open
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.score == best);
    let (idx, _) = at_best.next()?;
    if at_best.next().is_some() {
        return None;
    }
    Some(idx)
}
