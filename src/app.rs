//! The scoreboard manager: one object owning the board, the history log, and
//! the store. Every mutation goes through here and is persisted before it
//! returns, so the in-memory board and the files never drift for long.

use crate::logic::{self, CustomFormat, RevokedResult, ScoreOutcome, Standing};
use crate::models::{
    Competition, HistoryEntry, HistoryLog, ScoreboardError, ScoreboardState, Side, SlotId, SportId,
};
use crate::store::Store;
use chrono::Utc;

pub struct Scoreboard {
    state: ScoreboardState,
    history: HistoryLog,
    store: Store,
}

impl Scoreboard {
    /// Load the board from the store; missing or unreadable files fall back
    /// to the seeded defaults.
    pub fn open(store: Store) -> Self {
        Self {
            state: store.load_state(),
            history: store.load_history(),
            store,
        }
    }

    pub fn state(&self) -> &ScoreboardState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// One scoring tap: +1 on the given seat (1-based entrant index).
    pub fn add_point(
        &mut self,
        sport: &SportId,
        slot: SlotId,
        entrant_index: usize,
    ) -> Result<(), ScoreboardError> {
        let competition = self
            .state
            .competition_mut(sport)
            .ok_or(ScoreboardError::UnknownSport(*sport))?;
        let logs_every_round = competition.logs_every_round();
        let outcome = match competition {
            Competition::CustomFreeForAll(open) => {
                if slot == SlotId::Final {
                    logic::open_add_point(open, entrant_index)
                } else {
                    ScoreOutcome::Ignored
                }
            }
            bracketed => match (bracketed.bracket_mut(), Side::from_entrant_index(entrant_index)) {
                (Some(bracket), Some(side)) => logic::add_point(bracket, slot, side),
                _ => ScoreOutcome::Ignored,
            },
        };
        self.absorb(sport, logs_every_round, outcome);
        Ok(())
    }

    /// One undo tap: -1 on the given seat, flooring at zero.
    pub fn subtract_point(
        &mut self,
        sport: &SportId,
        slot: SlotId,
        entrant_index: usize,
    ) -> Result<(), ScoreboardError> {
        let competition = self
            .state
            .competition_mut(sport)
            .ok_or(ScoreboardError::UnknownSport(*sport))?;
        let logs_every_round = competition.logs_every_round();
        let outcome = match competition {
            Competition::CustomFreeForAll(open) => {
                if slot == SlotId::Final {
                    logic::open_subtract_point(open, entrant_index)
                } else {
                    ScoreOutcome::Ignored
                }
            }
            bracketed => match (bracketed.bracket_mut(), Side::from_entrant_index(entrant_index)) {
                (Some(bracket), Some(side)) => logic::subtract_point(bracket, slot, side),
                _ => ScoreOutcome::Ignored,
            },
        };
        self.absorb(sport, logs_every_round, outcome);
        Ok(())
    }

    /// Reset one match and everything it fed; matching history entries are
    /// dropped.
    pub fn reset_match(&mut self, sport: &SportId, slot: SlotId) -> Result<(), ScoreboardError> {
        let competition = self
            .state
            .competition_mut(sport)
            .ok_or(ScoreboardError::UnknownSport(*sport))?;
        let revoked = logic::reset_match(competition, slot);
        self.remove_revoked(sport, &revoked);
        self.flush_state();
        Ok(())
    }

    /// Restore one competition to its seeded configuration. The history log
    /// keeps whatever it already recorded for it.
    pub fn reset_sport(&mut self, sport: &SportId) -> Result<(), ScoreboardError> {
        let competition = self
            .state
            .competition_mut(sport)
            .ok_or(ScoreboardError::UnknownSport(*sport))?;
        logic::reset_competition(competition);
        self.flush_state();
        Ok(())
    }

    /// Back to the opening board: the three built-ins reseeded, custom
    /// competitions dropped, history cleared.
    pub fn reset_all(&mut self) {
        self.state = ScoreboardState::seeded();
        self.history.clear();
        log::info!("Board reset to seeded defaults");
        self.flush_state();
        self.flush_history();
    }

    /// Validate and create a custom competition under a freshly minted id.
    pub fn create_custom(
        &mut self,
        format: CustomFormat,
        display_name: &str,
        win_points: u32,
        entrants: Vec<String>,
    ) -> Result<SportId, ScoreboardError> {
        let competition = logic::create_custom(format, display_name, win_points, entrants)?;
        let sport = SportId::mint_custom();
        log::info!(
            "Created custom competition '{}' as {}",
            competition.display_name(),
            sport
        );
        self.state.insert(sport, competition);
        self.flush_state();
        Ok(sport)
    }

    pub fn standings(&self) -> Vec<Standing> {
        logic::standings(&self.state, &self.history)
    }

    /// Re-save both blobs. Used by the periodic autosave task to heal any
    /// earlier write that failed.
    pub fn flush_all(&self) {
        self.flush_state();
        self.flush_history();
    }

    /// Fold a scoring outcome into the history log and persist what changed.
    fn absorb(&mut self, sport: &SportId, logs_every_round: bool, outcome: ScoreOutcome) {
        match outcome {
            ScoreOutcome::Ignored => {}
            ScoreOutcome::Adjusted => self.flush_state(),
            ScoreOutcome::Resolved(concluded) => {
                if logs_every_round || concluded.terminal {
                    self.history.record(HistoryEntry {
                        sport: *sport,
                        entrant_a: concluded.entrant_a,
                        entrant_b: concluded.entrant_b,
                        score_a: concluded.score_a,
                        score_b: concluded.score_b,
                        winner: concluded.winner,
                        time: Utc::now(),
                    });
                    self.flush_history();
                }
                self.flush_state();
            }
            ScoreOutcome::Revoked(revoked) => {
                self.remove_revoked(sport, &revoked);
                self.flush_state();
            }
        }
    }

    fn remove_revoked(&mut self, sport: &SportId, revoked: &[RevokedResult]) {
        if revoked.is_empty() {
            return;
        }
        for r in revoked {
            self.history
                .remove_result(sport, &r.entrant_a, &r.entrant_b, &r.winner);
        }
        self.flush_history();
    }

    /// Persistence failures are logged, never surfaced; the in-memory board
    /// stays authoritative and the autosave task retries later.
    fn flush_state(&self) {
        if let Err(e) = self.store.save_state(&self.state) {
            log::error!("Failed to persist board state: {}", e);
        }
    }

    fn flush_history(&self) {
        if let Err(e) = self.store.save_history(&self.history) {
            log::error!("Failed to persist match history: {}", e);
        }
    }
}
