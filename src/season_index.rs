use std::collections::HashMap;

use crate::model::Season;

/// Year label -> season id lookup.
#[derive(Debug, Clone, Default)]
pub struct SeasonIndex {
    by_year: HashMap<String, String>,
    collisions: Vec<YearCollision>,
}

/// Two seasons carried the same year label; the later one in input order won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCollision {
    pub year: String,
    pub replaced_season_id: String,
    pub kept_season_id: String,
}

pub fn build_season_index(seasons: &[Season]) -> SeasonIndex {
    let mut index = SeasonIndex::default();
    for season in seasons {
        let year = season.year.trim();
        let id = season.id.trim();
        if year.is_empty() || id.is_empty() {
            continue;
        }
        if let Some(previous) = index.by_year.insert(year.to_string(), id.to_string())
            && previous != id
        {
            index.collisions.push(YearCollision {
                year: year.to_string(),
                replaced_season_id: previous,
                kept_season_id: id.to_string(),
            });
        }
    }
    if !index.collisions.is_empty() {
        tracing::warn!(
            collisions = index.collisions.len(),
            "season year labels are not unique; later seasons replaced earlier ones"
        );
    }
    index
}

impl SeasonIndex {
    pub fn season_id(&self, year: &str) -> Option<&str> {
        self.by_year.get(year.trim()).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    pub fn collisions(&self) -> &[YearCollision] {
        &self.collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(id: &str, year: &str) -> Season {
        Season {
            id: id.to_string(),
            year: year.to_string(),
        }
    }

    #[test]
    fn later_duplicate_year_wins_and_is_reported() {
        let index = build_season_index(&[
            season("S1", "2019/2020"),
            season("S2", "2020/2021"),
            season("S9", "2019/2020"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.season_id("2019/2020"), Some("S9"));
        assert_eq!(
            index.collisions(),
            &[YearCollision {
                year: "2019/2020".to_string(),
                replaced_season_id: "S1".to_string(),
                kept_season_id: "S9".to_string(),
            }]
        );
    }

    #[test]
    fn blank_rows_are_skipped() {
        let index = build_season_index(&[season("", "2019/2020"), season("S2", "  ")]);
        assert!(index.is_empty());
        assert!(index.collisions().is_empty());
    }

    #[test]
    fn lookup_ignores_surrounding_whitespace() {
        let index = build_season_index(&[season("S1", " 2019/2020 ")]);
        assert_eq!(index.season_id("2019/2020"), Some("S1"));
        assert_eq!(index.season_id("2019/2020 "), Some("S1"));
        assert_eq!(index.season_id("2020/2021"), None);
    }
}
