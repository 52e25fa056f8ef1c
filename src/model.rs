use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// A competitive period. `year` is the externally visible label ("2019/2020"),
/// `id` is opaque and only used to join against standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStanding {
    pub season_id: String,
    pub team_id: String,
    #[serde(default)]
    pub trades_count: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub position: Option<u32>,
}

/// "This manager ran this team in this season." The season is referenced by
/// year label, not by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerHistoryEntry {
    pub id: String,
    pub manager_id: String,
    pub year: String,
    #[serde(default)]
    pub team_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    pub id: String,
    pub year: String,
    pub team: String,
    #[serde(default)]
    pub manager_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub id: String,
    pub manager_id: String,
    pub category: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HallOfFameEntry {
    #[serde(default)]
    pub manager_id: Option<String>,
}

/// Identifiers come from loosely-typed tables; surrounding whitespace is not significant.
pub(crate) fn same_id(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}
