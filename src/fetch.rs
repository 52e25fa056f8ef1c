use std::sync::Arc;

use anyhow::Result;

use crate::error::{Collection, DataFetchError};
use crate::snapshot::{Snapshot, SnapshotParts};
use crate::store::DataStore;

/// Which history rows to pull. Detail surfaces only need one manager's rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchScope {
    #[default]
    All,
    Manager(String),
}

impl FetchScope {
    fn manager_id(&self) -> Option<&str> {
        match self {
            FetchScope::All => None,
            FetchScope::Manager(id) => Some(id.as_str()),
        }
    }
}

/// Fetch every collection concurrently and freeze the result into a snapshot.
///
/// A collection that fails is logged, replaced with an empty one, and recorded
/// on the snapshot; the engine downstream only ever sees collections.
pub fn fetch_snapshot(store: &dyn DataStore, scope: &FetchScope) -> Arc<Snapshot> {
    let manager_id = scope.manager_id();

    let (((managers, teams), (seasons, standings)), ((history, champions), (awards, hof))) =
        rayon::join(
            || {
                rayon::join(
                    || rayon::join(|| store.list_managers(), || store.list_teams()),
                    || rayon::join(|| store.list_seasons(), || store.list_season_standings()),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || store.list_manager_history(manager_id),
                            || store.list_champions(),
                        )
                    },
                    || rayon::join(|| store.list_awards(), || store.list_hall_of_fame()),
                )
            },
        );

    let mut errors = Vec::new();
    let parts = SnapshotParts {
        managers: or_empty(Collection::Managers, managers, &mut errors),
        teams: or_empty(Collection::Teams, teams, &mut errors),
        seasons: or_empty(Collection::Seasons, seasons, &mut errors),
        season_standings: or_empty(Collection::SeasonStandings, standings, &mut errors),
        manager_history: or_empty(Collection::ManagerHistory, history, &mut errors),
        champions: or_empty(Collection::Champions, champions, &mut errors),
        awards: or_empty(Collection::Awards, awards, &mut errors),
        hall_of_fame: or_empty(Collection::HallOfFame, hof, &mut errors),
    };

    let snapshot = Snapshot::with_fetch_errors(parts, errors).with_scope(scope.clone());
    tracing::info!(
        snapshot = snapshot.id(),
        managers = snapshot.managers().len(),
        history = snapshot.history().len(),
        standings = snapshot.standings().len(),
        failed = snapshot.fetch_errors().len(),
        "snapshot fetched"
    );
    Arc::new(snapshot)
}

/// Same as `fetch_snapshot`, run inside `pool` when one is available.
pub fn fetch_snapshot_in(
    pool: Option<&rayon::ThreadPool>,
    store: &dyn DataStore,
    scope: &FetchScope,
) -> Arc<Snapshot> {
    match pool {
        Some(pool) => pool.install(|| fetch_snapshot(store, scope)),
        None => fetch_snapshot(store, scope),
    }
}

pub fn build_fetch_pool(threads: usize) -> Option<rayon::ThreadPool> {
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => Some(pool),
        Err(err) => {
            tracing::warn!("fetch pool unavailable, using global pool: {err}");
            None
        }
    }
}

fn or_empty<T>(
    collection: Collection,
    fetched: Result<Vec<T>>,
    errors: &mut Vec<DataFetchError>,
) -> Vec<T> {
    match fetched {
        Ok(rows) => rows,
        Err(err) => {
            let err = DataFetchError::new(collection, &err);
            tracing::warn!("{err}; continuing with an empty collection");
            errors.push(err);
            Vec::new()
        }
    }
}
