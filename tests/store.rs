//! Integration tests for the JSON file store: round-trips, missing files,
//! and recovery from unreadable blobs.

use sportsday_scoreboard_web::{
    Competition, CustomFormat, HistoryLog, OpenMatch, Scoreboard, ScoreboardState, SlotId, SportId,
    Store,
};
use std::fs;
use uuid::Uuid;

fn temp_store() -> Store {
    Store::new(std::env::temp_dir().join(format!("scoreboard-test-{}", Uuid::new_v4())))
}

#[test]
fn missing_files_seed_the_defaults() {
    let store = temp_store();
    let state = store.load_state();
    assert_eq!(state.len(), 3);
    assert!(state.competition(&SportId::Badminton).is_some());
    assert!(store.load_history().is_empty());
}

#[test]
fn state_round_trips_through_the_file() {
    let store = temp_store();
    let mut state = ScoreboardState::seeded();
    let custom = SportId::mint_custom();
    state.insert(
        custom,
        Competition::CustomFreeForAll(OpenMatch::new(
            "Laps",
            5,
            vec!["Ana".to_string(), "Ben".to_string()],
        )),
    );

    store.save_state(&state).unwrap();
    assert!(store.state_path().exists());
    assert_eq!(store.load_state(), state);
}

#[test]
fn board_changes_survive_a_reopen() {
    let store = temp_store();
    let sport;
    {
        let mut b = Scoreboard::open(store.clone());
        for _ in 0..3 {
            b.add_point(&SportId::Badminton, SlotId::M1, 1).unwrap();
        }
        sport = b
            .create_custom(
                CustomFormat::Pair,
                "Showdown",
                5,
                vec!["Ana".to_string(), "Ben".to_string()],
            )
            .unwrap();
    }

    let b = Scoreboard::open(store);
    let m1 = b
        .state()
        .competition(&SportId::Badminton)
        .and_then(Competition::bracket)
        .and_then(|br| br.slot(SlotId::M1))
        .unwrap();
    assert_eq!(m1.score_a, 3);
    assert!(b.state().competition(&sport).is_some());
}

#[test]
fn history_survives_a_reopen() {
    let store = temp_store();
    {
        let mut b = Scoreboard::open(store.clone());
        for _ in 0..11 {
            b.add_point(&SportId::Badminton, SlotId::M1, 1).unwrap();
        }
    }

    let b = Scoreboard::open(store);
    assert_eq!(b.history().len(), 1);
    assert_eq!(b.history().entries()[0].winner, "Nayan");
}

#[test]
fn garbage_state_file_reseeds_the_board() {
    let store = temp_store();
    fs::create_dir_all(store.state_path().parent().unwrap()).unwrap();
    fs::write(store.state_path(), "not json at all {{{").unwrap();

    let state = store.load_state();
    assert_eq!(state, ScoreboardState::seeded());
}

#[test]
fn garbage_history_file_starts_empty() {
    let store = temp_store();
    fs::create_dir_all(store.history_path().parent().unwrap()).unwrap();
    fs::write(store.history_path(), "[{\"winner\":").unwrap();

    assert!(store.load_history().is_empty());
}

#[test]
fn saving_creates_the_data_directory() {
    let dir = std::env::temp_dir()
        .join(format!("scoreboard-test-{}", Uuid::new_v4()))
        .join("nested");
    let store = Store::new(&dir);
    store.save_history(&HistoryLog::new()).unwrap();
    assert!(store.history_path().exists());
}
