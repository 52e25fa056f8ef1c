use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Award, same_id};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardGroup {
    pub category: String,
    /// Newest first; "YYYY/YYYY" labels order correctly as plain strings.
    pub years: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AwardGrouping {
    pub groups: Vec<AwardGroup>,
    /// Number of award rows that belonged to the manager.
    pub total: usize,
}

impl AwardGrouping {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn counted(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Group counts add up to the filtered total and each group holds one year per award.
    pub fn is_consistent(&self) -> bool {
        self.counted() == self.total && self.groups.iter().all(|g| g.years.len() == g.count)
    }

    pub fn into_groups(self) -> Vec<AwardGroup> {
        self.groups
    }
}

/// Group a manager's awards by category.
///
/// Groups are ordered by count, highest first. Equal counts keep the order in
/// which their category first appeared in `awards`.
pub fn group_awards(manager_id: &str, awards: &[Award]) -> AwardGrouping {
    let mut groups: Vec<AwardGroup> = Vec::new();
    let mut slot_by_category: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for award in awards.iter().filter(|a| same_id(&a.manager_id, manager_id)) {
        total += 1;
        let slot = *slot_by_category
            .entry(award.category.as_str())
            .or_insert_with(|| {
                groups.push(AwardGroup {
                    category: award.category.clone(),
                    years: Vec::new(),
                    count: 0,
                });
                groups.len() - 1
            });
        let group = &mut groups[slot];
        group.years.push(award.year.clone());
        group.count += 1;
    }

    for group in &mut groups {
        group.years.sort_by(|a, b| b.cmp(a));
    }
    // `sort_by` is stable, which keeps first-seen order among ties.
    groups.sort_by(|a, b| b.count.cmp(&a.count));

    AwardGrouping { groups, total }
}
