use std::fs;
use std::path::PathBuf;

use manager_stats::aggregate::roster_stats;
use manager_stats::config::AppConfig;
use manager_stats::state::View;
use manager_stats::store::parse_snapshot_json;
use manager_stats::views::{ViewModel, build_view, roster_view, seasons_view, trades_view};
use manager_stats::{Engine, Snapshot, get_manager_stats};

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
fn every_surface_reports_the_same_numbers() {
    let snapshot = league();
    let engine = Engine::default();
    let config = AppConfig::default();

    for manager in snapshot.managers() {
        let id = manager.id.as_str();
        let expected = get_manager_stats(id, &snapshot);

        let Some(ViewModel::Detail(detail)) =
            build_view(View::Detail, Some(id), &engine, &snapshot, &config)
        else {
            panic!("detail view for {id}");
        };
        assert_eq!(detail.stats, expected);

        let Some(ViewModel::Seasons(seasons)) =
            build_view(View::Seasons, Some(id), &engine, &snapshot, &config)
        else {
            panic!("seasons view for {id}");
        };
        assert_eq!(seasons.rows.len(), expected.seasons_count);
        assert_eq!(seasons.stats, expected);

        let Some(ViewModel::Titles(titles)) =
            build_view(View::Titles, Some(id), &engine, &snapshot, &config)
        else {
            panic!("titles view for {id}");
        };
        assert_eq!(titles.count, expected.titles);
        assert_eq!(titles.titles.len(), expected.titles);

        let Some(ViewModel::Trades(trades)) =
            build_view(View::Trades, Some(id), &engine, &snapshot, &config)
        else {
            panic!("trades view for {id}");
        };
        assert_eq!(trades.total, expected.trades);
        assert_eq!(trades.rows.iter().map(|r| r.trades).sum::<u64>(), expected.trades);

        let Some(ViewModel::Awards(awards)) =
            build_view(View::Awards, Some(id), &engine, &snapshot, &config)
        else {
            panic!("awards view for {id}");
        };
        assert_eq!(awards.total, detail.award_total);
        assert_eq!(awards.groups, detail.awards);
    }
}

#[test]
fn roster_matches_detail_numbers() {
    let snapshot = league();
    let engine = Engine::default();
    let config = AppConfig::default().with_show_inactive(true);
    let roster = roster_view(&engine, &snapshot, &config);
    assert_eq!(roster.rows.len(), 4);
    assert_eq!(roster.rows, roster_stats(&snapshot));
    for row in &roster.rows {
        assert_eq!(row.stats, get_manager_stats(&row.manager.id, &snapshot));
    }
}

#[test]
fn roster_hides_inactive_managers_by_default() {
    let snapshot = league();
    let engine = Engine::default();
    let roster = roster_view(&engine, &snapshot, &AppConfig::default());
    let ids: Vec<&str> = roster.rows.iter().map(|r| r.manager.id.as_str()).collect();
    assert_eq!(ids, vec!["M1", "M2", "M4"]);
    assert_eq!(roster.hidden_inactive, 1);
}

#[test]
fn seasons_are_newest_first() {
    let snapshot = league();
    let engine = Engine::default();
    let view = seasons_view(&engine, &snapshot, "M2");
    let years: Vec<&str> = view.rows.iter().map(|r| r.year.as_str()).collect();
    assert_eq!(years, vec!["2021/2022", "2020/2021", "2019/2020"]);
}

#[test]
fn unresolved_entries_show_as_unresolved_trade_rows() {
    let snapshot = league();
    let engine = Engine::default();
    let view = trades_view(&engine, &snapshot, "M1");
    assert_eq!(view.rows.len(), 3);
    assert!(view.rows[0].resolved);
    assert!(!view.rows[2].resolved);
    assert_eq!(view.rows[2].trades, 0);
    assert_eq!(view.total, 7);
}

#[test]
fn manager_views_need_a_manager() {
    let snapshot = league();
    let engine = Engine::default();
    let config = AppConfig::default();
    assert!(build_view(View::Detail, None, &engine, &snapshot, &config).is_none());
    assert!(build_view(View::Awards, Some("  "), &engine, &snapshot, &config).is_none());
    assert!(matches!(
        build_view(View::Roster, None, &engine, &snapshot, &config),
        Some(ViewModel::Roster(_))
    ));
}
