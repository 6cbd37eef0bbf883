//! Player accessor: search, listing, and creation.
//!
//! Read paths always join the team table so callers get display-ready
//! profiles rather than bare foreign keys.

use super::{models::*, schema::StatsDatabase};
use crate::error::StatsError;
use anyhow::Result;
use rusqlite::{params, Row};

impl StatsDatabase {
    /// Find players whose name contains the fragment, case-insensitively,
    /// each enriched with their team's display fields
    pub fn find_players(&self, fragment: &str) -> Result<Vec<PlayerProfile>> {
        self.query_profiles(Some(fragment))
    }

    /// Get all players enriched with their team's display fields
    pub fn all_players(&self) -> Result<Vec<PlayerProfile>> {
        self.query_profiles(None)
    }

    /// Validate a draft and insert the player row.
    ///
    /// A draft with any missing field is rejected before the database is
    /// touched, so a failed create never leaves a partial row behind.
    pub fn create_player(&mut self, draft: &PlayerDraft) -> Result<Player> {
        let name = draft
            .name
            .as_deref()
            .ok_or(StatsError::MissingPlayerName)?;

        let age = draft.age.ok_or_else(|| incomplete(name, "age"))?;
        let position = draft
            .position
            .as_deref()
            .ok_or_else(|| incomplete(name, "position"))?;
        let image_url = draft
            .image_url
            .as_deref()
            .ok_or_else(|| incomplete(name, "image_url"))?;
        let abbreviation = draft
            .team
            .as_deref()
            .ok_or_else(|| incomplete(name, "team"))?;

        let team = self
            .find_team_by_abbreviation(abbreviation)?
            .ok_or_else(|| StatsError::TeamNotFound {
                abbreviation: abbreviation.to_string(),
            })?;

        self.conn.execute(
            "INSERT INTO player (name, age, position, image_url, team_id)
             VALUES (?, ?, ?, ?, ?)",
            params![name, age, position, image_url, team.id.as_i64()],
        )?;

        Ok(Player {
            id: PlayerId::new(self.conn.last_insert_rowid()),
            name: name.to_string(),
            age,
            position: position.to_string(),
            image_url: image_url.to_string(),
            team_id: team.id,
        })
    }

    /// Shared join query behind `find_players` and `all_players`
    fn query_profiles(&self, fragment: Option<&str>) -> Result<Vec<PlayerProfile>> {
        let mut query = String::from(
            "SELECT p.name, p.position, p.image_url, p.age,
                    t.name, t.abbreviated_name
             FROM player p
             JOIN team t ON t.id = p.team_id",
        );

        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(fragment) = fragment {
            query.push_str(" WHERE p.name LIKE ?");
            params.push(Box::new(format!("%{}%", fragment)));
        }

        query.push_str(" ORDER BY p.name");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            |row| Self::row_to_profile(row),
        )?;

        let mut profiles = Vec::new();
        for row in rows {
            profiles.push(row?);
        }
        Ok(profiles)
    }

    /// Helper to convert a joined row to a PlayerProfile
    fn row_to_profile(row: &Row) -> rusqlite::Result<PlayerProfile> {
        Ok(PlayerProfile {
            name: row.get(0)?,
            position: row.get(1)?,
            image_url: row.get(2)?,
            age: row.get(3)?,
            team: TeamName {
                full_name: row.get(4)?,
                short_name: row.get(5)?,
            },
        })
    }
}

fn incomplete(name: &str, field: &'static str) -> StatsError {
    StatsError::IncompletePlayer {
        name: name.to_string(),
        field,
    }
}
