//! Database schema and connection management

use crate::error::StatsError;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for league data.
///
/// Owns a single SQLite connection; construct one explicitly and pass it
/// to whatever needs data access, so tests can substitute an isolated
/// in-memory instance.
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open the database at its default location and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(Self::database_path()?)
    }

    /// Open (or create) a database at an explicit path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create an in-memory database, for tests and ad-hoc use
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the default path to the database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| StatsError::DataDir {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("courtside").join("stats.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                abbreviated_name TEXT NOT NULL UNIQUE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                position TEXT NOT NULL,
                image_url TEXT NOT NULL,
                team_id INTEGER NOT NULL,
                FOREIGN KEY (team_id) REFERENCES team(id)
            )",
            [],
        )?;

        // game_date is ISO YYYY-MM-DD so strftime can extract the month
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schedule (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                game_date TEXT NOT NULL,
                game_time TEXT NOT NULL,
                home_team_id INTEGER NOT NULL,
                visitor_team_id INTEGER NOT NULL,
                FOREIGN KEY (home_team_id) REFERENCES team(id),
                FOREIGN KEY (visitor_team_id) REFERENCES team(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS injury_report (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                player_id INTEGER NOT NULL,
                team_id INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY (player_id) REFERENCES player(id),
                FOREIGN KEY (team_id) REFERENCES team(id)
            )",
            [],
        )?;

        // Create indexes for performance
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_name ON player(name)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_team ON player(team_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_schedule_date ON schedule(game_date)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_schedule_teams
             ON schedule(home_team_id, visitor_team_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_injury_player ON injury_report(player_id)",
            [],
        )?;

        Ok(())
    }

    /// Clear all data from the database (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        // Delete child tables first due to foreign keys
        self.conn.execute("DELETE FROM injury_report", [])?;
        self.conn.execute("DELETE FROM schedule", [])?;
        self.conn.execute("DELETE FROM player", [])?;
        self.conn.execute("DELETE FROM team", [])?;
        Ok(())
    }
}
