use std::collections::HashMap;

use crate::model::SeasonStanding;
use crate::season_index::SeasonIndex;

/// Composite join key for a standing row. Both parts are trimmed on construction
/// so the key built from a history entry and the key built from a standing row
/// agree on the same data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandingKey {
    pub season_id: String,
    pub team_id: String,
}

impl StandingKey {
    pub fn new(season_id: &str, team_id: &str) -> Self {
        Self {
            season_id: season_id.trim().to_string(),
            team_id: team_id.trim().to_string(),
        }
    }

    pub fn of(standing: &SeasonStanding) -> Self {
        Self::new(&standing.season_id, &standing.team_id)
    }

    /// Resolve `(year, team_id)` into a key. `None` when the team is missing or
    /// the year label has no season.
    pub fn for_entry(year: &str, team_id: Option<&str>, seasons: &SeasonIndex) -> Option<Self> {
        let team_id = team_id.map(str::trim).filter(|t| !t.is_empty())?;
        let season_id = seasons.season_id(year)?;
        Some(Self::new(season_id, team_id))
    }

    fn matches(&self, standing: &SeasonStanding) -> bool {
        standing.season_id.trim() == self.season_id && standing.team_id.trim() == self.team_id
    }
}

/// Hash index over standings. Duplicate keys resolve to the last row in input
/// order, the same rule `resolve_standing` applies.
#[derive(Debug, Clone, Default)]
pub struct StandingsIndex {
    by_key: HashMap<StandingKey, usize>,
    duplicates: Vec<StandingKey>,
}

pub fn build_standings_index(standings: &[SeasonStanding]) -> StandingsIndex {
    let mut index = StandingsIndex::default();
    for (pos, standing) in standings.iter().enumerate() {
        let key = StandingKey::of(standing);
        if index.by_key.insert(key.clone(), pos).is_some() && !index.duplicates.contains(&key) {
            index.duplicates.push(key);
        }
    }
    if !index.duplicates.is_empty() {
        tracing::warn!(
            duplicates = index.duplicates.len(),
            "season standings repeat (season, team) pairs; using the last row of each"
        );
    }
    index
}

impl StandingsIndex {
    pub fn resolve<'a>(
        &self,
        key: &StandingKey,
        standings: &'a [SeasonStanding],
    ) -> Option<&'a SeasonStanding> {
        self.by_key.get(key).and_then(|pos| standings.get(*pos))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Keys that appeared more than once in the input, first-seen order.
    pub fn duplicates(&self) -> &[StandingKey] {
        &self.duplicates
    }
}

/// Find the standing for a `(year, team_id)` pair without a prebuilt index.
/// Scans from the back so duplicates resolve last-seen-wins.
pub fn resolve_standing<'a>(
    year: &str,
    team_id: Option<&str>,
    seasons: &SeasonIndex,
    standings: &'a [SeasonStanding],
) -> Option<&'a SeasonStanding> {
    let key = StandingKey::for_entry(year, team_id, seasons)?;
    standings.iter().rev().find(|s| key.matches(s))
}
