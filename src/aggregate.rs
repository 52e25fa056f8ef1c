use serde::{Deserialize, Serialize};

use crate::model::{Champion, Manager, ManagerHistoryEntry, SeasonStanding, same_id};
use crate::snapshot::Snapshot;
use crate::standings::StandingKey;

/// Derived per-manager totals. Never persisted; recomputed from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ManagerStats {
    pub seasons_count: usize,
    pub titles: usize,
    pub trades: u64,
    pub wins: u64,
    pub losses: u64,
    pub is_hall_of_fame: bool,
}

impl ManagerStats {
    /// Share of decided games won, `None` before any game was recorded.
    pub fn win_pct(&self) -> Option<f64> {
        let games = self.wins + self.losses;
        if games == 0 {
            None
        } else {
            Some(self.wins as f64 / games as f64)
        }
    }
}

/// A history entry together with whatever it joins to in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedHistoryEntry {
    pub entry: ManagerHistoryEntry,
    pub season_id: Option<String>,
    pub team_name: Option<String>,
    pub standing: Option<SeasonStanding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    pub manager: Manager,
    pub stats: ManagerStats,
}

/// Compute every stat for one manager.
///
/// Trades, wins and losses only flow through the manager's own history entries.
/// Entries that do not resolve to a standing still count as a season. Duplicate
/// entries for the same season/team are counted as many times as they appear.
pub fn get_manager_stats(manager_id: &str, snapshot: &Snapshot) -> ManagerStats {
    let mut stats = ManagerStats {
        titles: titles_count(manager_id, snapshot),
        is_hall_of_fame: is_hall_of_fame(manager_id, snapshot),
        ..ManagerStats::default()
    };

    for entry in history_for(manager_id, snapshot) {
        stats.seasons_count += 1;
        let Some(standing) = resolve_entry(entry, snapshot) else {
            continue;
        };
        stats.trades += u64::from(standing.trades_count);
        stats.wins += u64::from(standing.wins);
        stats.losses += u64::from(standing.losses);
    }

    stats
}

pub fn get_enriched_history(manager_id: &str, snapshot: &Snapshot) -> Vec<EnrichedHistoryEntry> {
    history_for(manager_id, snapshot)
        .map(|entry| enrich_entry(entry, snapshot))
        .collect()
}

pub fn enrich_entry(entry: &ManagerHistoryEntry, snapshot: &Snapshot) -> EnrichedHistoryEntry {
    let season_id = snapshot
        .season_index()
        .season_id(&entry.year)
        .map(str::to_string);
    let team_name = entry
        .team_id
        .as_deref()
        .and_then(|id| snapshot.team_name(id))
        .map(str::to_string);
    EnrichedHistoryEntry {
        entry: entry.clone(),
        season_id,
        team_name,
        standing: resolve_entry(entry, snapshot).cloned(),
    }
}

/// Join one history entry to its standing through the snapshot's indices.
pub fn resolve_entry<'a>(
    entry: &ManagerHistoryEntry,
    snapshot: &'a Snapshot,
) -> Option<&'a SeasonStanding> {
    let key = StandingKey::for_entry(
        &entry.year,
        entry.team_id.as_deref(),
        snapshot.season_index(),
    )?;
    snapshot.standings_index().resolve(&key, snapshot.standings())
}

pub fn titles_count(manager_id: &str, snapshot: &Snapshot) -> usize {
    titles_iter(manager_id, snapshot).count()
}

pub fn titles_for<'a>(manager_id: &str, snapshot: &'a Snapshot) -> Vec<&'a Champion> {
    titles_iter(manager_id, snapshot).collect()
}

pub fn is_hall_of_fame(manager_id: &str, snapshot: &Snapshot) -> bool {
    snapshot.hall_of_fame().contains(manager_id)
}

/// One row per manager, in the order the store returned them.
pub fn roster_stats(snapshot: &Snapshot) -> Vec<RosterRow> {
    roster_rows(snapshot, |manager_id| get_manager_stats(manager_id, snapshot))
}

/// Roster rows with stats from `stats`. A manager-scoped snapshot only holds
/// one manager's history, so only that manager gets a row.
pub fn roster_rows(
    snapshot: &Snapshot,
    mut stats: impl FnMut(&str) -> ManagerStats,
) -> Vec<RosterRow> {
    snapshot
        .managers()
        .iter()
        .filter(|manager| snapshot.covers(&manager.id))
        .map(|manager| RosterRow {
            manager: manager.clone(),
            stats: stats(&manager.id),
        })
        .collect()
}

fn history_for<'a>(
    manager_id: &str,
    snapshot: &'a Snapshot,
) -> impl Iterator<Item = &'a ManagerHistoryEntry> {
    snapshot
        .history()
        .iter()
        .filter(move |h| same_id(&h.manager_id, manager_id))
}

fn titles_iter<'a>(
    manager_id: &str,
    snapshot: &'a Snapshot,
) -> impl Iterator<Item = &'a Champion> {
    snapshot.champions().iter().filter(move |c| {
        c.manager_id
            .as_deref()
            .is_some_and(|id| same_id(id, manager_id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_pct_handles_empty_record() {
        assert_eq!(ManagerStats::default().win_pct(), None);
        let stats = ManagerStats {
            wins: 3,
            losses: 1,
            ..ManagerStats::default()
        };
        assert_eq!(stats.win_pct(), Some(0.75));
    }
}
