use std::fs;
use std::path::PathBuf;

use manager_stats::store::parse_snapshot_json;
use manager_stats::{Engine, Snapshot, get_enriched_history, get_grouped_awards, get_manager_stats};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn league() -> Snapshot {
    let raw = read_fixture("league_snapshot.json");
    Snapshot::new(parse_snapshot_json(&raw).expect("fixture should parse"))
}

#[test]
fn second_lookup_is_a_hit() {
    let engine = Engine::default();
    let snapshot = league();

    let first = engine.manager_stats("M1", &snapshot);
    let second = engine.manager_stats("M1", &snapshot);
    assert_eq!(first, second);

    let stats = engine.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.resets, 0);
}

#[test]
fn new_snapshot_resets_memoized_results() {
    let engine = Engine::default();
    let raw = read_fixture("league_snapshot.json");
    let first = Snapshot::new(parse_snapshot_json(&raw).expect("fixture should parse"));

    let mut parts = parse_snapshot_json(&raw).expect("fixture should parse");
    parts.manager_history.retain(|h| h.id != "H2");
    let second = Snapshot::new(parts);
    assert_ne!(first.id(), second.id());

    let before = engine.manager_stats("M1", &first);
    let after = engine.manager_stats("M1", &second);
    assert_eq!(before.seasons_count, 3);
    assert_eq!(after.seasons_count, 2);
    assert_eq!(after.trades, 3);

    let stats = engine.cache_stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.resets, 1);
}

#[test]
fn cached_and_uncached_engines_agree() {
    let snapshot = league();
    let cached = Engine::default();
    let uncached = Engine::uncached();
    assert!(!uncached.cache_enabled());

    for _ in 0..2 {
        for manager in snapshot.managers() {
            let id = manager.id.as_str();
            assert_eq!(cached.manager_stats(id, &snapshot), get_manager_stats(id, &snapshot));
            assert_eq!(
                cached.manager_stats(id, &snapshot),
                uncached.manager_stats(id, &snapshot)
            );
            assert_eq!(
                cached.grouped_awards(id, &snapshot),
                get_grouped_awards(id, &snapshot)
            );
            assert_eq!(
                cached.enriched_history(id, &snapshot),
                get_enriched_history(id, &snapshot)
            );
        }
    }

    assert_eq!(uncached.cache_stats().hits, 0);
    assert!(cached.cache_stats().hits > 0);
}

#[test]
fn trimmed_ids_share_one_cache_entry() {
    let engine = Engine::default();
    let snapshot = league();
    engine.manager_stats("M2", &snapshot);
    engine.manager_stats(" M2 ", &snapshot);
    assert_eq!(engine.cache_stats().hits, 1);
}

#[test]
fn clearing_forces_recompute() {
    let engine = Engine::default();
    let snapshot = league();
    engine.grouped_awards("M2", &snapshot);
    engine.clear_cache();
    engine.grouped_awards("M2", &snapshot);
    let stats = engine.cache_stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 0);
}
