use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::error::Collection;
use crate::model::{
    Award, Champion, HallOfFameEntry, Manager, ManagerHistoryEntry, Season, SeasonStanding, Team,
    same_id,
};
use crate::snapshot::SnapshotParts;

/// Read-only access to the external tables. Every call is an independent fetch.
pub trait DataStore: Send + Sync {
    fn list_managers(&self) -> Result<Vec<Manager>>;
    fn list_teams(&self) -> Result<Vec<Team>>;
    fn list_seasons(&self) -> Result<Vec<Season>>;
    fn list_season_standings(&self) -> Result<Vec<SeasonStanding>>;
    /// `None` returns every manager's history.
    fn list_manager_history(&self, manager_id: Option<&str>) -> Result<Vec<ManagerHistoryEntry>>;
    fn list_champions(&self) -> Result<Vec<Champion>>;
    fn list_awards(&self) -> Result<Vec<Award>>;
    fn list_hall_of_fame(&self) -> Result<Vec<HallOfFameEntry>>;
}

/// In-process store. Individual collections can be made to fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    parts: SnapshotParts,
    failing: HashSet<Collection>,
}

impl MemoryStore {
    pub fn new(parts: SnapshotParts) -> Self {
        Self {
            parts,
            failing: HashSet::new(),
        }
    }

    pub fn failing(mut self, collection: Collection) -> Self {
        self.failing.insert(collection);
        self
    }

    fn check(&self, collection: Collection) -> Result<()> {
        if self.failing.contains(&collection) {
            return Err(anyhow!("{collection} unavailable"));
        }
        Ok(())
    }
}

impl DataStore for MemoryStore {
    fn list_managers(&self) -> Result<Vec<Manager>> {
        self.check(Collection::Managers)?;
        Ok(self.parts.managers.clone())
    }

    fn list_teams(&self) -> Result<Vec<Team>> {
        self.check(Collection::Teams)?;
        Ok(self.parts.teams.clone())
    }

    fn list_seasons(&self) -> Result<Vec<Season>> {
        self.check(Collection::Seasons)?;
        Ok(self.parts.seasons.clone())
    }

    fn list_season_standings(&self) -> Result<Vec<SeasonStanding>> {
        self.check(Collection::SeasonStandings)?;
        Ok(self.parts.season_standings.clone())
    }

    fn list_manager_history(&self, manager_id: Option<&str>) -> Result<Vec<ManagerHistoryEntry>> {
        self.check(Collection::ManagerHistory)?;
        Ok(filter_history(&self.parts.manager_history, manager_id))
    }

    fn list_champions(&self) -> Result<Vec<Champion>> {
        self.check(Collection::Champions)?;
        Ok(self.parts.champions.clone())
    }

    fn list_awards(&self) -> Result<Vec<Award>> {
        self.check(Collection::Awards)?;
        Ok(self.parts.awards.clone())
    }

    fn list_hall_of_fame(&self) -> Result<Vec<HallOfFameEntry>> {
        self.check(Collection::HallOfFame)?;
        Ok(self.parts.hall_of_fame.clone())
    }
}

/// Store backed by a JSON export of the tables. The file is re-read on every
/// call, so edits show up on the next fetch.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<SnapshotParts> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read snapshot json {}", self.path.display()))?;
        parse_snapshot_json(&raw)
            .with_context(|| format!("parse snapshot json {}", self.path.display()))
    }
}

impl DataStore for JsonStore {
    fn list_managers(&self) -> Result<Vec<Manager>> {
        Ok(self.load()?.managers)
    }

    fn list_teams(&self) -> Result<Vec<Team>> {
        Ok(self.load()?.teams)
    }

    fn list_seasons(&self) -> Result<Vec<Season>> {
        Ok(self.load()?.seasons)
    }

    fn list_season_standings(&self) -> Result<Vec<SeasonStanding>> {
        Ok(self.load()?.season_standings)
    }

    fn list_manager_history(&self, manager_id: Option<&str>) -> Result<Vec<ManagerHistoryEntry>> {
        Ok(filter_history(&self.load()?.manager_history, manager_id))
    }

    fn list_champions(&self) -> Result<Vec<Champion>> {
        Ok(self.load()?.champions)
    }

    fn list_awards(&self) -> Result<Vec<Award>> {
        Ok(self.load()?.awards)
    }

    fn list_hall_of_fame(&self) -> Result<Vec<HallOfFameEntry>> {
        Ok(self.load()?.hall_of_fame)
    }
}

/// `null` parses as an empty snapshot.
pub fn parse_snapshot_json(raw: &str) -> Result<SnapshotParts> {
    let parts = serde_json::from_str::<Option<SnapshotParts>>(raw.trim())
        .context("invalid snapshot json")?;
    Ok(parts.unwrap_or_default())
}

fn filter_history(
    history: &[ManagerHistoryEntry],
    manager_id: Option<&str>,
) -> Vec<ManagerHistoryEntry> {
    match manager_id {
        Some(id) => history
            .iter()
            .filter(|h| same_id(&h.manager_id, id))
            .cloned()
            .collect(),
        None => history.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_json_is_empty() {
        let parts = parse_snapshot_json("null").expect("null should parse");
        assert!(parts.managers.is_empty());
        assert!(parts.manager_history.is_empty());
    }

    #[test]
    fn failing_collection_errors_and_others_succeed() {
        let store = MemoryStore::default().failing(Collection::Awards);
        assert!(store.list_awards().is_err());
        assert!(store.list_managers().is_ok());
    }
}
