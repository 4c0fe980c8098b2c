//! Champion and runner-up derivation for the standings view.

use crate::models::{Competition, HistoryLog, ScoreboardState, SlotId, SportId};
use serde::{Deserialize, Serialize};

/// One standings row: who holds a sport right now. `None` means undetermined
/// (rendering placeholders like "TBD" is the display layer's concern).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub sport: SportId,
    pub display_name: String,
    pub winner: Option<String>,
    /// Tracked for built-in brackets only.
    pub runner_up: Option<String>,
}

/// Current champion and runner-up for one competition.
///
/// Built-in brackets read their final slot. Custom competitions are read off
/// the history log (the newest entry for the sport names the champion) and
/// do not track a runner-up.
pub fn rank(sport: &SportId, competition: &Competition, history: &HistoryLog) -> Standing {
    let (winner, runner_up) = match competition {
        Competition::Builtin(bracket) => {
            let final_slot = bracket.slot(SlotId::Final);
            (
                final_slot.and_then(|m| m.winner.clone()),
                final_slot.and_then(|m| m.runner_up.clone()),
            )
        }
        _ => (
            history.latest_winner_for(sport).map(str::to_string),
            None,
        ),
    };
    Standing {
        sport: *sport,
        display_name: competition.display_name().to_string(),
        winner,
        runner_up,
    }
}

/// Standings for every sport on the board, built-ins first.
pub fn standings(state: &ScoreboardState, history: &HistoryLog) -> Vec<Standing> {
    state
        .iter()
        .map(|(sport, competition)| rank(sport, competition, history))
        .collect()
}
