//! Winner propagation through a bracket's successor table.

use crate::models::{Bracket, SlotId};

/// A previously decided result that no longer stands (the match it came from
/// was undone or lost a participant). Carried back to the caller so the
/// history log can forget it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevokedResult {
    pub entrant_a: String,
    pub entrant_b: String,
    pub winner: String,
}

/// Push a slot's outcome into its successor seat.
///
/// With `Some(name)`: write the winner into the seat the topology assigns to
/// this slot. Nothing else in the successor is touched; its other seat and
/// any scores stay as they are. Terminal slots have no successor, so this is
/// a no-op for them.
///
/// With `None` (the result was undone): blank the assigned seat and reset the
/// successor match outright, since its participant set changed. That makes
/// the successor's own result void too, so the clearing cascades slot by slot
/// to the end of the bracket. Every downstream match that had a decided
/// winner is returned as a [`RevokedResult`].
pub fn propagate(bracket: &mut Bracket, from: SlotId, winner: Option<&str>) -> Vec<RevokedResult> {
    match winner {
        Some(name) => {
            if let Some(link) = bracket.topology.successor(from) {
                if let Some(succ) = bracket.slot_mut(link.to) {
                    succ.set_entrant(link.side, name.to_string());
                }
            }
            Vec::new()
        }
        None => {
            let mut revoked = Vec::new();
            clear_forward(bracket, from, &mut revoked);
            revoked
        }
    }
}

fn clear_forward(bracket: &mut Bracket, from: SlotId, revoked: &mut Vec<RevokedResult>) {
    let Some(link) = bracket.topology.successor(from) else {
        return;
    };
    if let Some(succ) = bracket.slot_mut(link.to) {
        if let (Some(winner), Some(a), Some(b)) = (
            succ.winner.clone(),
            succ.entrant_a.clone(),
            succ.entrant_b.clone(),
        ) {
            revoked.push(RevokedResult {
                entrant_a: a,
                entrant_b: b,
                winner,
            });
        }
        succ.clear_entrant(link.side);
        succ.reset_progress();
    }
    clear_forward(bracket, link.to, revoked);
}
