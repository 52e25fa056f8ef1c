use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};

use manager_stats::config::AppConfig;
use manager_stats::engine::Engine;
use manager_stats::export::export_workbook;
use manager_stats::fetch::{FetchScope, build_fetch_pool, fetch_snapshot_in};
use manager_stats::sqlite_store::SqliteStore;
use manager_stats::state::View;
use manager_stats::store::{DataStore, JsonStore};
use manager_stats::views::{self, ViewModel};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut config = AppConfig::from_env();
    if args.iter().any(|a| a == "--all") {
        config = config.with_show_inactive(true);
    }

    let store = resolve_store(&args, &config)?;
    let manager_id = arg_value(&args, "--manager");
    let export_path = arg_value(&args, "--export");
    // The workbook covers every manager, so it needs the full history.
    let scope = match (manager_id.as_deref(), &export_path) {
        (Some(id), None) => FetchScope::Manager(id.to_string()),
        _ => FetchScope::All,
    };

    let pool = build_fetch_pool(config.fetch_parallelism);
    let snapshot = fetch_snapshot_in(pool.as_ref(), store.as_ref(), &scope);
    let engine = Engine::from_config(&config);

    println!(
        "Snapshot {} fetched {}",
        snapshot.id(),
        snapshot.fetched_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    for err in snapshot.fetch_errors() {
        println!("  warning: {err}");
    }

    match manager_id.as_deref() {
        Some(id) => print_manager(&engine, &snapshot, id, &config),
        None => print_roster(&engine, &snapshot, &config),
    }

    if let Some(path) = export_path {
        let path = PathBuf::from(path);
        let report = export_workbook(&path, &engine, &snapshot)?;
        println!(
            "Exported {} managers, {} season rows, {} award groups to {}",
            report.managers,
            report.seasons,
            report.award_groups,
            path.display()
        );
    }

    Ok(())
}

fn resolve_store(args: &[String], config: &AppConfig) -> Result<Arc<dyn DataStore>> {
    if let Some(path) = arg_value(args, "--json") {
        return Ok(Arc::new(JsonStore::new(path)));
    }
    if let Some(path) = arg_value(args, "--db") {
        return Ok(Arc::new(SqliteStore::new(path)));
    }
    if let Some(path) = config.json_path.clone() {
        return Ok(Arc::new(JsonStore::new(path)));
    }
    if let Some(path) = config.db_path.clone() {
        return Ok(Arc::new(SqliteStore::new(path)));
    }
    Err(anyhow!(
        "no data source: pass --json PATH or --db PATH, \
         or set MANAGER_STATS_JSON / MANAGER_STATS_DB"
    ))
}

fn print_roster(engine: &Engine, snapshot: &manager_stats::Snapshot, config: &AppConfig) {
    let Some(ViewModel::Roster(roster)) =
        views::build_view(View::Roster, None, engine, snapshot, config)
    else {
        return;
    };
    println!(
        "{:<10} {:<24} {:>7} {:>6} {:>7} {:>5} {:>6} {:>4}",
        "ID", "Manager", "Seasons", "Titles", "Trades", "W", "L", "HoF"
    );
    for row in &roster.rows {
        let s = row.stats;
        println!(
            "{:<10} {:<24} {:>7} {:>6} {:>7} {:>5} {:>6} {:>4}",
            row.manager.id,
            row.manager.name,
            s.seasons_count,
            s.titles,
            s.trades,
            s.wins,
            s.losses,
            if s.is_hall_of_fame { "yes" } else { "" }
        );
    }
    if roster.hidden_inactive > 0 {
        println!("({} inactive managers hidden; --all to show)", roster.hidden_inactive);
    }
}

fn print_manager(
    engine: &Engine,
    snapshot: &manager_stats::Snapshot,
    manager_id: &str,
    config: &AppConfig,
) {
    if let Some(ViewModel::Detail(detail)) =
        views::build_view(View::Detail, Some(manager_id), engine, snapshot, config)
    {
        let name = detail
            .manager
            .as_ref()
            .map(|m| m.name.as_str())
            .unwrap_or("(unknown manager)");
        let s = detail.stats;
        println!("{name} [{manager_id}]");
        println!(
            "Seasons: {}  Titles: {}  Trades: {}  Record: {}-{}{}",
            s.seasons_count,
            s.titles,
            s.trades,
            s.wins,
            s.losses,
            if s.is_hall_of_fame { "  Hall of Fame" } else { "" }
        );
        if !detail.awards.is_empty() {
            println!("Awards ({}):", detail.award_total);
            for group in &detail.awards {
                println!("  {} x{}: {}", group.category, group.count, group.years.join(", "));
            }
        }
    }

    if let Some(ViewModel::Seasons(seasons)) =
        views::build_view(View::Seasons, Some(manager_id), engine, snapshot, config)
    {
        println!("History:");
        for row in &seasons.rows {
            let team = row
                .team_name
                .as_deref()
                .or(row.team_id.as_deref())
                .unwrap_or("-");
            match &row.standing {
                Some(st) => println!(
                    "  {} {:<20} trades={} {}-{}-{}",
                    row.year, team, st.trades_count, st.wins, st.losses, st.ties
                ),
                None => println!("  {} {:<20} (no standing)", row.year, team),
            }
        }
    }
}

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}
