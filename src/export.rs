use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::engine::Engine;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub managers: usize,
    pub seasons: usize,
    pub award_groups: usize,
}

/// Write roster stats, per-season history and grouped awards to an xlsx workbook.
pub fn export_workbook(path: &Path, engine: &Engine, snapshot: &Snapshot) -> Result<ExportReport> {
    let mut managers_rows = vec![vec![
        "Manager ID".to_string(),
        "Manager".to_string(),
        "Active".to_string(),
        "Seasons".to_string(),
        "Titles".to_string(),
        "Trades".to_string(),
        "Wins".to_string(),
        "Losses".to_string(),
        "Win %".to_string(),
        "Hall of Fame".to_string(),
    ]];
    let mut seasons_rows = vec![vec![
        "Manager ID".to_string(),
        "Year".to_string(),
        "Team ID".to_string(),
        "Team".to_string(),
        "Trades".to_string(),
        "Wins".to_string(),
        "Losses".to_string(),
        "Ties".to_string(),
        "Position".to_string(),
    ]];
    let mut awards_rows = vec![vec![
        "Manager ID".to_string(),
        "Category".to_string(),
        "Count".to_string(),
        "Years".to_string(),
    ]];

    for row in engine.roster(snapshot) {
        let manager_id = row.manager.id.clone();
        let stats = row.stats;
        managers_rows.push(vec![
            manager_id.clone(),
            row.manager.name,
            yes_no(row.manager.is_active),
            stats.seasons_count.to_string(),
            stats.titles.to_string(),
            stats.trades.to_string(),
            stats.wins.to_string(),
            stats.losses.to_string(),
            stats
                .win_pct()
                .map(|p| format!("{:.1}", p * 100.0))
                .unwrap_or_default(),
            yes_no(stats.is_hall_of_fame),
        ]);

        for h in engine.enriched_history(&manager_id, snapshot) {
            let standing = h.standing.as_ref();
            seasons_rows.push(vec![
                manager_id.clone(),
                h.entry.year.clone(),
                h.entry.team_id.clone().unwrap_or_default(),
                h.team_name.clone().unwrap_or_default(),
                opt_to_string(standing.map(|s| s.trades_count)),
                opt_to_string(standing.map(|s| s.wins)),
                opt_to_string(standing.map(|s| s.losses)),
                opt_to_string(standing.map(|s| s.ties)),
                opt_to_string(standing.and_then(|s| s.position)),
            ]);
        }

        for group in engine.grouped_awards(&manager_id, snapshot).into_groups() {
            awards_rows.push(vec![
                manager_id.clone(),
                group.category,
                group.count.to_string(),
                group.years.join(", "),
            ]);
        }
    }

    let mut workbook = Workbook::new();
    for (name, rows) in [
        ("Managers", &managers_rows),
        ("Seasons", &seasons_rows),
        ("Awards", &awards_rows),
    ] {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(name)
            .with_context(|| format!("name sheet {name}"))?;
        write_rows(sheet, rows).with_context(|| format!("write sheet {name}"))?;
    }
    workbook
        .save(path)
        .with_context(|| format!("save workbook {}", path.display()))?;

    Ok(ExportReport {
        managers: managers_rows.len() - 1,
        seasons: seasons_rows.len() - 1,
        award_groups: awards_rows.len() - 1,
    })
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn opt_to_string<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
