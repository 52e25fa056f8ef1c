use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags, Params, Row, params};

use crate::model::{
    Award, Champion, HallOfFameEntry, Manager, ManagerHistoryEntry, Season, SeasonStanding, Team,
};
use crate::store::DataStore;

/// Read-only store over the console's SQLite export. Each call opens its own
/// connection so concurrent fetches never share one.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Connection> {
        Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("open sqlite db {}", self.path.display()))
    }

    fn query_all<T, P: Params>(
        &self,
        what: &str,
        sql: &str,
        params: P,
        map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        let conn = self.open()?;
        let mut stmt = conn
            .prepare(sql)
            .with_context(|| format!("prepare {what} query"))?;
        let rows = stmt
            .query_map(params, map)
            .with_context(|| format!("query {what}"))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.with_context(|| format!("decode {what} row"))?);
        }
        Ok(out)
    }
}

/// Create the tables the store reads. Rows come back in insertion order
/// (`rowid`), which is the order duplicate handling relies on.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS managers (
            id TEXT NOT NULL,
            name TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE IF NOT EXISTS teams (
            id TEXT NOT NULL,
            name TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS seasons (
            id TEXT NOT NULL,
            year TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS season_standings (
            season_id TEXT NOT NULL,
            team_id TEXT NOT NULL,
            trades_count INTEGER NOT NULL DEFAULT 0,
            wins INTEGER NOT NULL DEFAULT 0,
            losses INTEGER NOT NULL DEFAULT 0,
            ties INTEGER NOT NULL DEFAULT 0,
            position INTEGER NULL
        );
        CREATE TABLE IF NOT EXISTS manager_history (
            id TEXT NOT NULL,
            manager_id TEXT NOT NULL,
            year TEXT NOT NULL,
            team_id TEXT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_manager_history_manager ON manager_history(manager_id);
        CREATE TABLE IF NOT EXISTS champions (
            id TEXT NOT NULL,
            year TEXT NOT NULL,
            team TEXT NOT NULL,
            manager_id TEXT NULL
        );
        CREATE TABLE IF NOT EXISTS awards (
            id TEXT NOT NULL,
            manager_id TEXT NOT NULL,
            category TEXT NOT NULL,
            year TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS hall_of_fame (
            manager_id TEXT NULL
        );
        "#,
    )
    .context("create sqlite schema")?;
    Ok(())
}

impl DataStore for SqliteStore {
    fn list_managers(&self) -> Result<Vec<Manager>> {
        self.query_all(
            "managers",
            "SELECT id, name, is_active FROM managers ORDER BY rowid",
            [],
            |row| {
                Ok(Manager {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    is_active: row.get::<_, i64>(2)? != 0,
                })
            },
        )
    }

    fn list_teams(&self) -> Result<Vec<Team>> {
        self.query_all(
            "teams",
            "SELECT id, name FROM teams ORDER BY rowid",
            [],
            |row| {
                Ok(Team {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
    }

    fn list_seasons(&self) -> Result<Vec<Season>> {
        self.query_all(
            "seasons",
            "SELECT id, year FROM seasons ORDER BY rowid",
            [],
            |row| {
                Ok(Season {
                    id: row.get(0)?,
                    year: row.get(1)?,
                })
            },
        )
    }

    fn list_season_standings(&self) -> Result<Vec<SeasonStanding>> {
        self.query_all(
            "season standings",
            r#"
            SELECT season_id, team_id, trades_count, wins, losses, ties, position
            FROM season_standings
            ORDER BY rowid
            "#,
            [],
            |row| {
                Ok(SeasonStanding {
                    season_id: row.get(0)?,
                    team_id: row.get(1)?,
                    trades_count: row.get::<_, u32>(2)?,
                    wins: row.get::<_, u32>(3)?,
                    losses: row.get::<_, u32>(4)?,
                    ties: row.get::<_, u32>(5)?,
                    position: row.get::<_, Option<u32>>(6)?,
                })
            },
        )
    }

    fn list_manager_history(&self, manager_id: Option<&str>) -> Result<Vec<ManagerHistoryEntry>> {
        let map = |row: &Row<'_>| -> rusqlite::Result<ManagerHistoryEntry> {
            Ok(ManagerHistoryEntry {
                id: row.get(0)?,
                manager_id: row.get(1)?,
                year: row.get(2)?,
                team_id: row.get(3)?,
            })
        };
        match manager_id {
            Some(id) => self.query_all(
                "manager history",
                r#"
                SELECT id, manager_id, year, team_id
                FROM manager_history
                WHERE trim(manager_id) = trim(?1)
                ORDER BY rowid
                "#,
                params![id],
                map,
            ),
            None => self.query_all(
                "manager history",
                "SELECT id, manager_id, year, team_id FROM manager_history ORDER BY rowid",
                [],
                map,
            ),
        }
    }

    fn list_champions(&self) -> Result<Vec<Champion>> {
        self.query_all(
            "champions",
            "SELECT id, year, team, manager_id FROM champions ORDER BY rowid",
            [],
            |row| {
                Ok(Champion {
                    id: row.get(0)?,
                    year: row.get(1)?,
                    team: row.get(2)?,
                    manager_id: row.get(3)?,
                })
            },
        )
    }

    fn list_awards(&self) -> Result<Vec<Award>> {
        self.query_all(
            "awards",
            "SELECT id, manager_id, category, year FROM awards ORDER BY rowid",
            [],
            |row| {
                Ok(Award {
                    id: row.get(0)?,
                    manager_id: row.get(1)?,
                    category: row.get(2)?,
                    year: row.get(3)?,
                })
            },
        )
    }

    fn list_hall_of_fame(&self) -> Result<Vec<HallOfFameEntry>> {
        self.query_all(
            "hall of fame",
            "SELECT manager_id FROM hall_of_fame ORDER BY rowid",
            [],
            |row| {
                Ok(HallOfFameEntry {
                    manager_id: row.get(0)?,
                })
            },
        )
    }
}
