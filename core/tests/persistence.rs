//! Load/save/update/reset against both key-value adapters.

use std::collections::BTreeMap;

use provia_core::{
    clock::ManualClock,
    config::ProviaConfig,
    store::{KvStore, MemoryKv, SqliteKv},
    ProfileStore, ProfileUpdate, SelectedMode,
};

const KEY: &str = "provia_profile";

fn store_on<K: KvStore>(kv: K) -> ProfileStore<K, ManualClock> {
    ProfileStore::new(kv, ManualClock::starting_now(), ProviaConfig::default())
}

#[test]
fn first_load_creates_and_persists_defaults() {
    let kv = MemoryKv::new();
    let store = store_on(&kv);

    let p = store.load().unwrap();
    assert_eq!(p.user_id, "local_user");
    assert_eq!(p.display_name, "Pharmacist");
    assert_eq!(p.specialty, "Pharmacist");
    assert_eq!(p.current_day, 1);
    assert_eq!(p.free_mocks_remaining, 2);
    assert_eq!(p.hero_credits, 0);
    assert!(p.territory.is_none());
    assert!(p.selected_mode.is_none());

    assert!(kv.get(KEY).unwrap().is_some(), "default should be written through");
    assert_eq!(store.load().unwrap(), p, "second load reads the same record");
}

#[test]
fn corrupt_record_is_replaced_with_defaults() {
    let kv = MemoryKv::new();
    kv.set(KEY, "{not json").unwrap();
    let store = store_on(&kv);

    let p = store.load().unwrap();
    assert_eq!(p.current_day, 1);

    let stored = kv.get(KEY).unwrap().unwrap();
    assert!(stored.contains("\"currentDay\":1"), "corrupt value overwritten: {stored}");
}

#[test]
fn foreign_shaped_json_counts_as_absent() {
    let kv = MemoryKv::new();
    kv.set(KEY, r#"{"userId": "someone", "currentDay": "three"}"#).unwrap();
    let store = store_on(&kv);

    assert_eq!(store.load().unwrap().user_id, "local_user");
}

#[test]
fn update_replaces_only_supplied_fields() {
    let store = store_on(MemoryKv::new());
    store.complete_day(1, 95).unwrap();
    store.complete_day(2, 88).unwrap();

    let p = store
        .update(ProfileUpdate {
            territory: Some(Some("SCFHS".into())),
            selected_mode: Some(Some(SelectedMode::Challenge)),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(p.territory.as_deref(), Some("SCFHS"));
    assert_eq!(p.selected_mode, Some(SelectedMode::Challenge));
    assert_eq!(p.hero_credits, 40);
    assert_eq!(p.completed_days.len(), 2);
    assert_eq!(store.load().unwrap(), p);
}

#[test]
fn update_replaces_nested_maps_whole() {
    let store = store_on(MemoryKv::new());
    store.complete_day(1, 95).unwrap();
    store.complete_day(2, 88).unwrap();

    let p = store
        .update(ProfileUpdate {
            day_scores: Some(BTreeMap::from([(7, 42)])),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(p.day_scores, BTreeMap::from([(7, 42)]), "no deep merge");
}

#[test]
fn update_from_json_patch() {
    let store = store_on(MemoryKv::new());
    store
        .update(ProfileUpdate {
            selected_mode: Some(Some(SelectedMode::MockCenter)),
            ..Default::default()
        })
        .unwrap();

    let patch: ProfileUpdate =
        serde_json::from_str(r#"{"displayName": "Mona", "selectedMode": null}"#).unwrap();
    let p = store.update(patch).unwrap();

    assert_eq!(p.display_name, "Mona");
    assert_eq!(p.selected_mode, None);
}

#[test]
fn reset_restores_defaults() {
    let kv = MemoryKv::new();
    let store = store_on(&kv);
    store.complete_day(1, 100).unwrap();
    store.unlock_achievement("first_steps").unwrap();

    store.reset().unwrap();
    assert!(kv.get(KEY).unwrap().is_none());

    let p = store.load().unwrap();
    assert_eq!(p.hero_credits, 0);
    assert!(p.completed_days.is_empty());
    assert!(p.unlocked_achievements.is_empty());
}

#[test]
fn stores_with_different_keys_are_independent() {
    let kv = MemoryKv::new();
    let alice = ProfileStore::with_key(&kv, ManualClock::starting_now(), ProviaConfig::default(), "alice");
    let bob = ProfileStore::with_key(&kv, ManualClock::starting_now(), ProviaConfig::default(), "bob");

    alice.complete_day(1, 100).unwrap();
    bob.complete_day(1, 10).unwrap();

    assert_eq!(alice.load().unwrap().hero_credits, 20);
    assert_eq!(bob.load().unwrap().hero_credits, 0);
    assert_eq!(bob.load().unwrap().last_failed_day, Some(1));
    assert_eq!(kv.len(), 2);
}

#[test]
fn battles_and_achievements_persist() {
    let store = store_on(MemoryKv::new());
    let battle = &store.config().battle;
    let (win, loss) = (battle.reward_for(true), battle.reward_for(false));

    store.record_battle(true, win).unwrap();
    let p = store.record_battle(false, loss).unwrap();
    assert_eq!((p.battles_won, p.battles_played, p.hero_credits), (1, 2, 100));

    assert!(store.unlock_achievement("first_battle").unwrap());
    assert!(!store.unlock_achievement("first_battle").unwrap());
    assert_eq!(store.load().unwrap().unlocked_achievements.len(), 1);
}

#[test]
fn sqlite_in_memory_round_trip() {
    let kv = SqliteKv::in_memory().unwrap();
    let store = store_on(&kv);

    store.complete_day(1, 90).unwrap();
    store.complete_mock_test(64).unwrap();

    let p = store.load().unwrap();
    assert_eq!(p.hero_credits, 20);
    assert_eq!(p.mock_test_scores, vec![64]);
    assert_eq!(kv.entry_count().unwrap(), 1);
}

#[test]
fn sqlite_file_survives_reopen() {
    let path = std::env::temp_dir().join(format!("provia-kv-{}.db", std::process::id()));
    let path_str = path.to_string_lossy().to_string();
    let _ = std::fs::remove_file(&path);

    {
        let store = store_on(SqliteKv::open(&path_str).unwrap());
        store.complete_day(1, 100).unwrap();
        store.complete_day(2, 100).unwrap();
    }

    let reopened = SqliteKv::open(&path_str).unwrap();
    let again = reopened.reopen().unwrap();
    let p = store_on(again).load().unwrap();
    assert_eq!(p.current_day, 3);
    assert_eq!(p.hero_credits, 40);

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}
