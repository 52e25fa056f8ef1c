use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::aggregate::{EnrichedHistoryEntry, ManagerStats};
use crate::awards::AwardGrouping;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub resets: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    snapshot_id: Option<u64>,
    stats: HashMap<String, ManagerStats>,
    awards: HashMap<String, AwardGrouping>,
    history: HashMap<String, Vec<EnrichedHistoryEntry>>,
    counters: CacheStats,
}

impl CacheState {
    /// Drop everything memoized for an older snapshot.
    fn bind(&mut self, snapshot: &Snapshot) {
        if self.snapshot_id == Some(snapshot.id()) {
            return;
        }
        if let Some(previous) = self.snapshot_id {
            tracing::debug!(
                previous,
                current = snapshot.id(),
                "snapshot changed; clearing memoized stats"
            );
            self.counters.resets += 1;
        }
        self.snapshot_id = Some(snapshot.id());
        self.stats.clear();
        self.awards.clear();
        self.history.clear();
    }
}

/// Memoizes per-manager results for the most recent snapshot only.
///
/// A disabled cache computes every call; results are the same either way.
#[derive(Debug)]
pub struct SnapshotCache {
    enabled: bool,
    state: Mutex<CacheState>,
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SnapshotCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().counters
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.snapshot_id = None;
        state.stats.clear();
        state.awards.clear();
        state.history.clear();
    }

    pub fn manager_stats(
        &self,
        snapshot: &Snapshot,
        manager_id: &str,
        compute: impl FnOnce() -> ManagerStats,
    ) -> ManagerStats {
        self.memoize(snapshot, manager_id, |s| &mut s.stats, compute)
    }

    pub fn grouped_awards(
        &self,
        snapshot: &Snapshot,
        manager_id: &str,
        compute: impl FnOnce() -> AwardGrouping,
    ) -> AwardGrouping {
        self.memoize(snapshot, manager_id, |s| &mut s.awards, compute)
    }

    pub fn enriched_history(
        &self,
        snapshot: &Snapshot,
        manager_id: &str,
        compute: impl FnOnce() -> Vec<EnrichedHistoryEntry>,
    ) -> Vec<EnrichedHistoryEntry> {
        self.memoize(snapshot, manager_id, |s| &mut s.history, compute)
    }

    fn memoize<T: Clone>(
        &self,
        snapshot: &Snapshot,
        manager_id: &str,
        slot: impl Fn(&mut CacheState) -> &mut HashMap<String, T>,
        compute: impl FnOnce() -> T,
    ) -> T {
        if !self.enabled {
            return compute();
        }

        let mut state = self.lock();
        state.bind(snapshot);
        let key = manager_id.trim();
        if let Some(hit) = slot(&mut *state).get(key).cloned() {
            state.counters.hits += 1;
            return hit;
        }
        state.counters.misses += 1;
        let value = compute();
        slot(&mut *state).insert(key.to_string(), value.clone());
        value
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // Every write leaves the maps valid, so a poisoned guard is still usable.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
