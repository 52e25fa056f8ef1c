pub mod aggregate;
pub mod awards;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod feed;
pub mod fetch;
pub mod generation;
pub mod hall_of_fame;
pub mod model;
pub mod season_index;
pub mod snapshot;
pub mod sqlite_store;
pub mod standings;
pub mod state;
pub mod store;
pub mod views;

pub use aggregate::{ManagerStats, get_enriched_history, get_manager_stats};
pub use awards::{AwardGroup, AwardGrouping, group_awards};
pub use engine::Engine;
pub use snapshot::{Snapshot, SnapshotParts};

/// Grouped awards for one manager, straight from the snapshot.
pub fn get_grouped_awards(manager_id: &str, snapshot: &Snapshot) -> AwardGrouping {
    group_awards(manager_id, snapshot.awards())
}
