use std::fmt;

use thiserror::Error;

/// The input collections a snapshot is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Managers,
    Teams,
    Seasons,
    SeasonStandings,
    ManagerHistory,
    Champions,
    Awards,
    HallOfFame,
}

impl Collection {
    pub fn label(self) -> &'static str {
        match self {
            Collection::Managers => "managers",
            Collection::Teams => "teams",
            Collection::Seasons => "seasons",
            Collection::SeasonStandings => "season_standings",
            Collection::ManagerHistory => "manager_history",
            Collection::Champions => "champions",
            Collection::Awards => "awards",
            Collection::HallOfFame => "hall_of_fame",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A collection the store failed to return. The fetcher replaces it with an
/// empty collection and keeps this record on the snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to fetch {collection}: {message}")]
pub struct DataFetchError {
    pub collection: Collection,
    pub message: String,
}

impl DataFetchError {
    pub fn new(collection: Collection, err: &anyhow::Error) -> Self {
        Self {
            collection,
            message: format!("{err:#}"),
        }
    }
}
