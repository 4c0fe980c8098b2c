//! Integration tests for tap scoring: thresholds, ties, locks, and undo.

use sportsday_scoreboard_web::{
    add_point, subtract_point, Bracket, ScoreOutcome, Side, SlotId, Topology, CARROM_WIN_POINTS,
    STANDARD_WIN_POINTS,
};

fn doubles_board(win_points: u32) -> Bracket {
    Bracket::seeded(
        "Test Board",
        win_points,
        Topology::four_entrant(),
        vec![
            ("Asha".into(), "Bela".into()),
            ("Chand".into(), "Dev".into()),
        ],
    )
}

fn tap(bracket: &mut Bracket, slot: SlotId, side: Side, times: u32) {
    for _ in 0..times {
        add_point(bracket, slot, side);
    }
}

#[test]
fn no_winner_below_threshold() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    tap(&mut b, SlotId::M1, Side::A, 10);
    let m = b.slot(SlotId::M1).unwrap();
    assert_eq!(m.score_a, 10);
    assert!(m.winner.is_none());
}

#[test]
fn threshold_point_with_lead_decides() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    tap(&mut b, SlotId::M1, Side::A, 10);
    let outcome = add_point(&mut b, SlotId::M1, Side::A);
    match outcome {
        ScoreOutcome::Resolved(c) => {
            assert_eq!(c.winner, "Asha");
            assert_eq!(c.score_a, 11);
            assert_eq!(c.score_b, 0);
            assert!(!c.terminal);
        }
        other => panic!("expected resolution, got {:?}", other),
    }
    assert_eq!(b.slot(SlotId::M1).unwrap().winner.as_deref(), Some("Asha"));
    // M1's winner advances into the final's first seat
    assert_eq!(b.slot(SlotId::Final).unwrap().entrant_a.as_deref(), Some("Asha"));
}

#[test]
fn tie_at_threshold_holds_until_broken() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    // Put the match at 11-10 with no decision, as if loaded mid-game
    let m = b.slot_mut(SlotId::M1).unwrap();
    m.score_a = 11;
    m.score_b = 10;

    assert_eq!(add_point(&mut b, SlotId::M1, Side::B), ScoreOutcome::Adjusted);
    let m = b.slot(SlotId::M1).unwrap();
    assert_eq!((m.score_a, m.score_b), (11, 11));
    assert!(m.winner.is_none());

    // The next point past the tie decides it
    let outcome = add_point(&mut b, SlotId::M1, Side::B);
    assert!(matches!(outcome, ScoreOutcome::Resolved(c) if c.winner == "Bela"));
}

#[test]
fn decided_match_ignores_increments() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    tap(&mut b, SlotId::M1, Side::A, 11);
    assert_eq!(add_point(&mut b, SlotId::M1, Side::B), ScoreOutcome::Ignored);
    assert_eq!(add_point(&mut b, SlotId::M1, Side::A), ScoreOutcome::Ignored);
    let m = b.slot(SlotId::M1).unwrap();
    assert_eq!((m.score_a, m.score_b), (11, 0));
}

#[test]
fn decrement_floors_at_zero() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    assert_eq!(subtract_point(&mut b, SlotId::M1, Side::A), ScoreOutcome::Ignored);
    assert_eq!(b.slot(SlotId::M1).unwrap().score_a, 0);
}

#[test]
fn decrement_below_threshold_revokes_the_win() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    tap(&mut b, SlotId::M1, Side::A, 11);
    assert!(b.slot(SlotId::Final).unwrap().entrant_a.is_some());

    let outcome = subtract_point(&mut b, SlotId::M1, Side::A);
    match outcome {
        ScoreOutcome::Revoked(revoked) => {
            assert_eq!(revoked.len(), 1);
            assert_eq!(revoked[0].winner, "Asha");
        }
        other => panic!("expected revocation, got {:?}", other),
    }
    let m = b.slot(SlotId::M1).unwrap();
    assert_eq!(m.score_a, 10);
    assert!(m.winner.is_none());
    // The advanced seat is vacated again
    assert!(b.slot(SlotId::Final).unwrap().entrant_a.is_none());
}

#[test]
fn decrement_of_the_loser_keeps_the_result() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    tap(&mut b, SlotId::M1, Side::B, 5);
    tap(&mut b, SlotId::M1, Side::A, 11);
    assert_eq!(subtract_point(&mut b, SlotId::M1, Side::B), ScoreOutcome::Adjusted);
    let m = b.slot(SlotId::M1).unwrap();
    assert_eq!(m.winner.as_deref(), Some("Asha"));
    assert_eq!(m.score_b, 4);
}

#[test]
fn undo_into_a_tie_revokes() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    tap(&mut b, SlotId::M1, Side::B, 10);
    tap(&mut b, SlotId::M1, Side::A, 11);
    assert!(b.slot(SlotId::M1).unwrap().winner.is_some());

    // 10-10 is no longer a strict lead at the threshold
    let outcome = subtract_point(&mut b, SlotId::M1, Side::A);
    assert!(matches!(outcome, ScoreOutcome::Revoked(_)));
    assert!(b.slot(SlotId::M1).unwrap().winner.is_none());
}

#[test]
fn decrement_never_decides() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    let m = b.slot_mut(SlotId::M1).unwrap();
    m.score_a = 10;
    m.score_b = 11;
    // B would qualify, but only an increment can decide a match
    assert_eq!(subtract_point(&mut b, SlotId::M1, Side::A), ScoreOutcome::Adjusted);
    assert!(b.slot(SlotId::M1).unwrap().winner.is_none());
}

#[test]
fn waiting_seat_is_not_scorable() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    // FINAL has no entrants until the openers are decided
    assert_eq!(add_point(&mut b, SlotId::Final, Side::A), ScoreOutcome::Ignored);
    assert_eq!(b.slot(SlotId::Final).unwrap().score_a, 0);
}

#[test]
fn unknown_slot_is_ignored() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    // A four-entrant board has no M3
    assert_eq!(add_point(&mut b, SlotId::M3, Side::A), ScoreOutcome::Ignored);
    assert_eq!(subtract_point(&mut b, SlotId::M3, Side::A), ScoreOutcome::Ignored);
}

#[test]
fn carrom_threshold_is_twenty() {
    let mut b = doubles_board(CARROM_WIN_POINTS);
    tap(&mut b, SlotId::M1, Side::A, 11);
    assert!(b.slot(SlotId::M1).unwrap().winner.is_none());
    tap(&mut b, SlotId::M1, Side::A, 9);
    assert_eq!(b.slot(SlotId::M1).unwrap().winner.as_deref(), Some("Asha"));
}

#[test]
fn final_records_the_runner_up() {
    let mut b = doubles_board(STANDARD_WIN_POINTS);
    tap(&mut b, SlotId::M1, Side::A, 11); // Asha advances
    tap(&mut b, SlotId::M2, Side::A, 11); // Chand advances
    tap(&mut b, SlotId::Final, Side::A, 11);
    let f = b.slot(SlotId::Final).unwrap();
    assert_eq!(f.winner.as_deref(), Some("Asha"));
    assert_eq!(f.runner_up.as_deref(), Some("Chand"));
    // Non-terminal slots never carry a runner-up
    assert!(b.slot(SlotId::M1).unwrap().runner_up.is_none());
}
