use crate::domain::ranking::RankEntry;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::services::profiles::{
    record_game_result, rename_profile, reset_profile, top_profiles,
};
use crate::store::{MemoryStore, ProfileStore};

fn entry(rank: usize, name: &str, points: i32) -> RankEntry {
    RankEntry {
        rank,
        name: name.to_string(),
        points,
    }
}

#[test]
fn recording_creates_profiles_on_first_sight() {
    let mut store = MemoryStore::new();
    record_game_result(
        &mut store,
        &[entry(1, "Morgan", 120), entry(2, "Sam", -30)],
    )
    .unwrap();

    let morgan = store.find_profile("morgan").unwrap().unwrap();
    assert_eq!(morgan.cumulative_points, 120);
    assert_eq!(morgan.played_count, 1);
    let sam = store.find_profile("Sam").unwrap().unwrap();
    assert_eq!(sam.cumulative_points, -30);
}

#[test]
fn recording_accumulates_across_games() {
    let mut store = MemoryStore::new();
    record_game_result(&mut store, &[entry(1, "Morgan", 100)]).unwrap();
    record_game_result(&mut store, &[entry(1, "Morgan", 50)]).unwrap();

    let morgan = store.find_profile("Morgan").unwrap().unwrap();
    assert_eq!(morgan.cumulative_points, 150);
    assert_eq!(morgan.played_count, 2);
}

#[test]
fn top_profiles_sorts_by_points_and_truncates() {
    let mut store = MemoryStore::new();
    record_game_result(
        &mut store,
        &[
            entry(1, "A", 40),
            entry(2, "B", 90),
            entry(3, "C", 10),
            entry(4, "D", 70),
        ],
    )
    .unwrap();

    let top = top_profiles(&store, 3).unwrap();
    let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["B", "D", "A"]);
}

#[test]
fn reset_zeroes_the_counter_and_keeps_history() {
    let mut store = MemoryStore::new();
    record_game_result(&mut store, &[entry(1, "Morgan", 300)]).unwrap();

    reset_profile(&mut store, "MORGAN").unwrap();
    let morgan = store.find_profile("Morgan").unwrap().unwrap();
    assert_eq!(morgan.cumulative_points, 0);
    assert_eq!(morgan.played_count, 1);
}

#[test]
fn reset_of_a_missing_profile_is_not_found() {
    let mut store = MemoryStore::new();
    match reset_profile(&mut store, "Nobody") {
        Err(DomainError::NotFound(NotFoundKind::Profile, _)) => {}
        other => panic!("expected missing profile, got {other:?}"),
    }
}

#[test]
fn rename_moves_the_ledger_row() {
    let mut store = MemoryStore::new();
    record_game_result(&mut store, &[entry(1, "Morgan", 80)]).unwrap();

    rename_profile(&mut store, "morgan", "  Captain Morgan ").unwrap();
    assert!(store.find_profile("Morgan").unwrap().is_none());
    let renamed = store.find_profile("captain morgan").unwrap().unwrap();
    assert_eq!(renamed.name, "Captain Morgan");
    assert_eq!(renamed.cumulative_points, 80);
}

#[test]
fn rename_rejects_collisions_but_allows_case_changes() {
    let mut store = MemoryStore::new();
    record_game_result(&mut store, &[entry(1, "Morgan", 80), entry(2, "Sam", 10)]).unwrap();

    match rename_profile(&mut store, "Sam", "MORGAN") {
        Err(DomainError::Conflict(ConflictKind::DuplicateName, _)) => {}
        other => panic!("expected DuplicateName, got {other:?}"),
    }
    // Recasing the same profile is fine.
    rename_profile(&mut store, "Morgan", "MORGAN").unwrap();
    assert_eq!(
        store.find_profile("morgan").unwrap().unwrap().name,
        "MORGAN"
    );
}
