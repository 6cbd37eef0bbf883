//! Team accessor: lookup and creation of team rows.
//!
//! Other accessors lean on these lookups to resolve team names and
//! abbreviations to foreign keys.

use super::{models::*, schema::StatsDatabase};
use anyhow::Result;
use rusqlite::{params, Row};

impl StatsDatabase {
    /// Insert a new team and return the stored row
    pub fn insert_team(&mut self, name: &str, abbreviated_name: &str) -> Result<Team> {
        self.conn.execute(
            "INSERT INTO team (name, abbreviated_name) VALUES (?, ?)",
            params![name, abbreviated_name],
        )?;

        Ok(Team {
            id: TeamId::new(self.conn.last_insert_rowid()),
            name: name.to_string(),
            abbreviated_name: abbreviated_name.to_string(),
        })
    }

    /// Find the single team whose full name matches exactly
    pub fn find_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, abbreviated_name FROM team WHERE name = ?")?;

        let result = stmt.query_row(params![name], |row| Self::row_to_team(row));

        match result {
            Ok(team) => Ok(Some(team)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Find the single team with the given short code
    pub fn find_team_by_abbreviation(&self, abbreviation: &str) -> Result<Option<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, abbreviated_name FROM team WHERE abbreviated_name = ?")?;

        let result = stmt.query_row(params![abbreviation], |row| Self::row_to_team(row));

        match result {
            Ok(team) => Ok(Some(team)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get all teams, ordered by name
    pub fn all_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, abbreviated_name FROM team ORDER BY name")?;

        let rows = stmt.query_map([], |row| Self::row_to_team(row))?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Helper to convert a database row to a Team
    pub(crate) fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
        Ok(Team {
            id: TeamId::new(row.get(0)?),
            name: row.get(1)?,
            abbreviated_name: row.get(2)?,
        })
    }
}
