//! View models for the console surfaces.
//!
//! Nothing here joins or sums on its own: every number comes from the
//! `Engine`, so the detail, seasons, titles, trades, awards and roster surfaces
//! agree for the same snapshot.

use serde::Serialize;

use crate::aggregate::{self, ManagerStats, RosterRow};
use crate::awards::AwardGroup;
use crate::config::AppConfig;
use crate::engine::Engine;
use crate::model::{Champion, Manager, SeasonStanding};
use crate::snapshot::Snapshot;
use crate::state::View;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerDetail {
    pub manager: Option<Manager>,
    pub stats: ManagerStats,
    pub awards: Vec<AwardGroup>,
    pub award_total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRow {
    pub year: String,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub standing: Option<SeasonStanding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonsView {
    pub rows: Vec<SeasonRow>,
    pub stats: ManagerStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitlesView {
    pub titles: Vec<Champion>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRow {
    pub year: String,
    pub team_name: Option<String>,
    pub trades: u64,
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradesView {
    pub rows: Vec<TradeRow>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardsView {
    pub groups: Vec<AwardGroup>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterView {
    pub rows: Vec<RosterRow>,
    pub hidden_inactive: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViewModel {
    Roster(RosterView),
    Detail(ManagerDetail),
    Seasons(SeasonsView),
    Titles(TitlesView),
    Trades(TradesView),
    Awards(AwardsView),
}

/// Build the model for `view`. Manager surfaces need a manager id; without
/// one they yield `None`.
pub fn build_view(
    view: View,
    manager_id: Option<&str>,
    engine: &Engine,
    snapshot: &Snapshot,
    config: &AppConfig,
) -> Option<ViewModel> {
    if view == View::Roster {
        return Some(ViewModel::Roster(roster_view(engine, snapshot, config)));
    }
    let manager_id = manager_id.map(str::trim).filter(|id| !id.is_empty())?;
    let model = match view {
        View::Roster => return None,
        View::Detail => ViewModel::Detail(manager_detail(engine, snapshot, manager_id)),
        View::Seasons => ViewModel::Seasons(seasons_view(engine, snapshot, manager_id)),
        View::Titles => ViewModel::Titles(titles_view(engine, snapshot, manager_id)),
        View::Trades => ViewModel::Trades(trades_view(engine, snapshot, manager_id)),
        View::Awards => ViewModel::Awards(awards_view(engine, snapshot, manager_id)),
    };
    Some(model)
}

pub fn manager_detail(engine: &Engine, snapshot: &Snapshot, manager_id: &str) -> ManagerDetail {
    let awards = engine.grouped_awards(manager_id, snapshot);
    ManagerDetail {
        manager: snapshot.manager(manager_id).cloned(),
        stats: engine.manager_stats(manager_id, snapshot),
        award_total: awards.total,
        awards: awards.into_groups(),
    }
}

/// Seasons newest first; rows sharing a year keep their fetched order.
pub fn seasons_view(engine: &Engine, snapshot: &Snapshot, manager_id: &str) -> SeasonsView {
    let mut rows: Vec<SeasonRow> = engine
        .enriched_history(manager_id, snapshot)
        .into_iter()
        .map(|h| SeasonRow {
            year: h.entry.year,
            team_id: h.entry.team_id,
            team_name: h.team_name,
            standing: h.standing,
        })
        .collect();
    rows.sort_by(|a, b| b.year.cmp(&a.year));
    SeasonsView {
        rows,
        stats: engine.manager_stats(manager_id, snapshot),
    }
}

pub fn titles_view(engine: &Engine, snapshot: &Snapshot, manager_id: &str) -> TitlesView {
    let titles: Vec<Champion> = aggregate::titles_for(manager_id, snapshot)
        .into_iter()
        .cloned()
        .collect();
    TitlesView {
        count: engine.manager_stats(manager_id, snapshot).titles,
        titles,
    }
}

pub fn trades_view(engine: &Engine, snapshot: &Snapshot, manager_id: &str) -> TradesView {
    let rows = engine
        .enriched_history(manager_id, snapshot)
        .into_iter()
        .map(|h| TradeRow {
            resolved: h.standing.is_some(),
            trades: h
                .standing
                .as_ref()
                .map(|s| u64::from(s.trades_count))
                .unwrap_or(0),
            year: h.entry.year,
            team_name: h.team_name,
        })
        .collect();
    TradesView {
        rows,
        total: engine.manager_stats(manager_id, snapshot).trades,
    }
}

pub fn awards_view(engine: &Engine, snapshot: &Snapshot, manager_id: &str) -> AwardsView {
    let grouping = engine.grouped_awards(manager_id, snapshot);
    AwardsView {
        total: grouping.total,
        groups: grouping.into_groups(),
    }
}

pub fn roster_view(engine: &Engine, snapshot: &Snapshot, config: &AppConfig) -> RosterView {
    let mut hidden_inactive = 0usize;
    let rows = engine
        .roster(snapshot)
        .into_iter()
        .filter(|row| {
            let keep = config.show_inactive || row.manager.is_active;
            if !keep {
                hidden_inactive += 1;
            }
            keep
        })
        .collect();
    RosterView {
        rows,
        hidden_inactive,
    }
}
