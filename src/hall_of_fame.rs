use std::collections::HashSet;

use crate::model::HallOfFameEntry;

#[derive(Debug, Clone, Default)]
pub struct HallOfFame {
    members: HashSet<String>,
}

impl HallOfFame {
    pub fn from_entries(entries: &[HallOfFameEntry]) -> Self {
        let members = entries
            .iter()
            .filter_map(|e| e.manager_id.as_deref())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        Self { members }
    }

    pub fn contains(&self, manager_id: &str) -> bool {
        self.members.contains(manager_id.trim())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_without_manager_are_ignored() {
        let hof = HallOfFame::from_entries(&[
            HallOfFameEntry {
                manager_id: Some("M1".to_string()),
            },
            HallOfFameEntry { manager_id: None },
            HallOfFameEntry {
                manager_id: Some("M1".to_string()),
            },
        ]);
        assert_eq!(hof.len(), 1);
        assert!(hof.contains("M1"));
        assert!(!hof.contains("M2"));
        assert!(!hof.contains(""));
    }
}
