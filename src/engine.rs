use crate::aggregate::{self, EnrichedHistoryEntry, ManagerStats, RosterRow};
use crate::awards::{self, AwardGrouping};
use crate::cache::{CacheStats, SnapshotCache};
use crate::config::AppConfig;
use crate::snapshot::Snapshot;

/// Single entry point every view goes through, so all surfaces report the same numbers.
#[derive(Debug, Default)]
pub struct Engine {
    cache: SnapshotCache,
}

impl Engine {
    pub fn new(cache_enabled: bool) -> Self {
        Self {
            cache: SnapshotCache::new(cache_enabled),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.cache_enabled)
    }

    pub fn uncached() -> Self {
        Self::new(false)
    }

    pub fn manager_stats(&self, manager_id: &str, snapshot: &Snapshot) -> ManagerStats {
        self.cache.manager_stats(snapshot, manager_id, || {
            aggregate::get_manager_stats(manager_id, snapshot)
        })
    }

    pub fn grouped_awards(&self, manager_id: &str, snapshot: &Snapshot) -> AwardGrouping {
        self.cache.grouped_awards(snapshot, manager_id, || {
            awards::group_awards(manager_id, snapshot.awards())
        })
    }

    pub fn enriched_history(
        &self,
        manager_id: &str,
        snapshot: &Snapshot,
    ) -> Vec<EnrichedHistoryEntry> {
        self.cache.enriched_history(snapshot, manager_id, || {
            aggregate::get_enriched_history(manager_id, snapshot)
        })
    }

    pub fn roster(&self, snapshot: &Snapshot) -> Vec<RosterRow> {
        aggregate::roster_rows(snapshot, |manager_id| {
            self.manager_stats(manager_id, snapshot)
        })
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_enabled()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
