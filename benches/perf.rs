use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use manager_stats::model::{
    Award, Champion, HallOfFameEntry, Manager, ManagerHistoryEntry, Season, SeasonStanding, Team,
};
use manager_stats::{Engine, Snapshot, SnapshotParts, group_awards};

const MANAGERS: usize = 200;
const TEAMS: usize = 40;
const SEASONS: usize = 30;

fn year_label(idx: usize) -> String {
    let start = 1990 + idx;
    format!("{start}/{}", start + 1)
}

fn synthetic_parts() -> SnapshotParts {
    let managers = (0..MANAGERS)
        .map(|m| Manager {
            id: format!("M{m}"),
            name: format!("Manager {m}"),
            is_active: m % 5 != 0,
        })
        .collect();
    let teams = (0..TEAMS)
        .map(|t| Team {
            id: format!("T{t}"),
            name: format!("Team {t}"),
        })
        .collect();
    let seasons = (0..SEASONS)
        .map(|s| Season {
            id: format!("S{s}"),
            year: year_label(s),
        })
        .collect();

    let mut season_standings = Vec::new();
    for s in 0..SEASONS {
        for t in 0..TEAMS {
            season_standings.push(SeasonStanding {
                season_id: format!("S{s}"),
                team_id: format!("T{t}"),
                trades_count: ((s * 7 + t * 3) % 11) as u32,
                wins: ((s + t) % 20) as u32,
                losses: ((s * 3 + t) % 20) as u32,
                ties: (t % 3) as u32,
                position: Some((t + 1) as u32),
            });
        }
    }

    let mut manager_history = Vec::new();
    let mut awards = Vec::new();
    for m in 0..MANAGERS {
        for s in (m % SEASONS)..SEASONS.min(m % SEASONS + 8) {
            manager_history.push(ManagerHistoryEntry {
                id: format!("H{m}-{s}"),
                manager_id: format!("M{m}"),
                year: year_label(s),
                team_id: Some(format!("T{}", (m + s) % TEAMS)),
            });
            if (m + s) % 3 == 0 {
                awards.push(Award {
                    id: format!("A{m}-{s}"),
                    manager_id: format!("M{m}"),
                    category: ["MVP", "Coach", "Defensivo", "Rookie"][(m + s) % 4].to_string(),
                    year: year_label(s),
                });
            }
        }
    }

    let champions = (0..SEASONS)
        .map(|s| Champion {
            id: format!("C{s}"),
            year: year_label(s),
            team: format!("Team {}", s % TEAMS),
            manager_id: Some(format!("M{}", (s * 13) % MANAGERS)),
        })
        .collect();
    let hall_of_fame = (0..MANAGERS)
        .step_by(17)
        .map(|m| HallOfFameEntry {
            manager_id: Some(format!("M{m}")),
        })
        .collect();

    SnapshotParts {
        managers,
        teams,
        seasons,
        season_standings,
        manager_history,
        champions,
        awards,
        hall_of_fame,
    }
}

fn bench_roster_uncached(c: &mut Criterion) {
    let snapshot = Snapshot::new(synthetic_parts());
    let engine = Engine::uncached();
    c.bench_function("roster_uncached", |b| {
        b.iter(|| {
            let rows = engine.roster(black_box(&snapshot));
            black_box(rows.len());
        })
    });
}

fn bench_roster_cached(c: &mut Criterion) {
    let snapshot = Snapshot::new(synthetic_parts());
    let engine = Engine::default();
    engine.roster(&snapshot);
    c.bench_function("roster_cached", |b| {
        b.iter(|| {
            let rows = engine.roster(black_box(&snapshot));
            black_box(rows.len());
        })
    });
}

fn bench_fresh_snapshot_indices(c: &mut Criterion) {
    let parts = synthetic_parts();
    c.bench_function("fresh_snapshot_manager_stats", |b| {
        b.iter(|| {
            let snapshot = Snapshot::new(parts.clone());
            let stats = Engine::uncached().manager_stats(black_box("M42"), &snapshot);
            black_box(stats.trades);
        })
    });
}

fn bench_group_awards(c: &mut Criterion) {
    let parts = synthetic_parts();
    c.bench_function("group_awards", |b| {
        b.iter(|| {
            let grouping = group_awards(black_box("M7"), black_box(&parts.awards));
            black_box(grouping.total);
        })
    });
}

criterion_group!(
    benches,
    bench_roster_uncached,
    bench_roster_cached,
    bench_fresh_snapshot_indices,
    bench_group_awards
);
criterion_main!(benches);
