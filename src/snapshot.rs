use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::DataFetchError;
use crate::fetch::FetchScope;
use crate::hall_of_fame::HallOfFame;
use crate::model::{
    Award, Champion, HallOfFameEntry, Manager, ManagerHistoryEntry, Season, SeasonStanding, Team,
    same_id,
};
use crate::season_index::{SeasonIndex, build_season_index};
use crate::standings::{StandingsIndex, build_standings_index};

static NEXT_SNAPSHOT_ID: AtomicU64 = AtomicU64::new(1);

/// Raw collections as handed over by the fetch layer (or read from a JSON file).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotParts {
    #[serde(default)]
    pub managers: Vec<Manager>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub season_standings: Vec<SeasonStanding>,
    #[serde(default)]
    pub manager_history: Vec<ManagerHistoryEntry>,
    #[serde(default)]
    pub champions: Vec<Champion>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub hall_of_fame: Vec<HallOfFameEntry>,
}

/// Immutable set of collections fetched together. Every derived number is a
/// function of one snapshot; indices are built on first use and then reused.
#[derive(Debug)]
pub struct Snapshot {
    id: u64,
    fetched_at: DateTime<Utc>,
    parts: SnapshotParts,
    fetch_errors: Vec<DataFetchError>,
    scope: FetchScope,
    season_index: OnceCell<SeasonIndex>,
    standings_index: OnceCell<StandingsIndex>,
    hall_of_fame: OnceCell<HallOfFame>,
}

impl Snapshot {
    pub fn new(parts: SnapshotParts) -> Self {
        Self::with_fetch_errors(parts, Vec::new())
    }

    pub fn with_fetch_errors(parts: SnapshotParts, fetch_errors: Vec<DataFetchError>) -> Self {
        Self {
            id: NEXT_SNAPSHOT_ID.fetch_add(1, Ordering::Relaxed),
            fetched_at: Utc::now(),
            parts,
            fetch_errors,
            scope: FetchScope::All,
            season_index: OnceCell::new(),
            standings_index: OnceCell::new(),
            hall_of_fame: OnceCell::new(),
        }
    }

    /// Unique per constructed snapshot within the process.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn fetch_errors(&self) -> &[DataFetchError] {
        &self.fetch_errors
    }

    pub fn is_degraded(&self) -> bool {
        !self.fetch_errors.is_empty()
    }

    /// Mark the snapshot as holding only one manager's history.
    pub fn with_scope(mut self, scope: FetchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn scope(&self) -> &FetchScope {
        &self.scope
    }

    /// Whether the snapshot carries the complete history of `manager_id`.
    pub fn covers(&self, manager_id: &str) -> bool {
        match &self.scope {
            FetchScope::All => true,
            FetchScope::Manager(id) => same_id(id, manager_id),
        }
    }

    pub fn parts(&self) -> &SnapshotParts {
        &self.parts
    }

    pub fn managers(&self) -> &[Manager] {
        &self.parts.managers
    }

    pub fn manager(&self, manager_id: &str) -> Option<&Manager> {
        self.parts
            .managers
            .iter()
            .find(|m| same_id(&m.id, manager_id))
    }

    pub fn teams(&self) -> &[Team] {
        &self.parts.teams
    }

    pub fn team_name(&self, team_id: &str) -> Option<&str> {
        self.parts
            .teams
            .iter()
            .find(|t| same_id(&t.id, team_id))
            .map(|t| t.name.as_str())
    }

    pub fn seasons(&self) -> &[Season] {
        &self.parts.seasons
    }

    pub fn standings(&self) -> &[SeasonStanding] {
        &self.parts.season_standings
    }

    pub fn history(&self) -> &[ManagerHistoryEntry] {
        &self.parts.manager_history
    }

    pub fn champions(&self) -> &[Champion] {
        &self.parts.champions
    }

    pub fn awards(&self) -> &[Award] {
        &self.parts.awards
    }

    pub fn hall_of_fame_entries(&self) -> &[HallOfFameEntry] {
        &self.parts.hall_of_fame
    }

    pub fn season_index(&self) -> &SeasonIndex {
        self.season_index
            .get_or_init(|| build_season_index(&self.parts.seasons))
    }

    pub fn standings_index(&self) -> &StandingsIndex {
        self.standings_index
            .get_or_init(|| build_standings_index(&self.parts.season_standings))
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        self.hall_of_fame
            .get_or_init(|| HallOfFame::from_entries(&self.parts.hall_of_fame))
    }
}

impl From<SnapshotParts> for Snapshot {
    fn from(parts: SnapshotParts) -> Self {
        Self::new(parts)
    }
}
