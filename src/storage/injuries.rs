//! Injury report accessor: filing and listing reports.

use super::{models::*, schema::StatsDatabase};
use crate::error::StatsError;
use anyhow::Result;
use rusqlite::params;
use std::time::{SystemTime, UNIX_EPOCH};

impl StatsDatabase {
    /// Resolve the player and team and insert an injury report row,
    /// stamping created/updated timestamps
    pub fn report_injury(&mut self, report: &NewInjuryReport) -> Result<InjuryReport> {
        let player = self
            .find_player_by_name(&report.player)?
            .ok_or_else(|| StatsError::PlayerNotFound {
                name: report.player.clone(),
            })?;

        let team = self
            .find_team_by_abbreviation(&report.team)?
            .ok_or_else(|| StatsError::TeamNotFound {
                abbreviation: report.team.clone(),
            })?;

        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

        self.conn.execute(
            "INSERT INTO injury_report (description, date, player_id, team_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                report.description,
                report.date,
                player.id.as_i64(),
                team.id.as_i64(),
                now,
                now
            ],
        )?;

        Ok(InjuryReport {
            id: self.conn.last_insert_rowid(),
            description: report.description.clone(),
            date: report.date.clone(),
            player_id: player.id,
            team_id: team.id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get all injury reports enriched with player and team display
    /// fields, newest first
    pub fn injury_reports(&self) -> Result<Vec<InjuryReportView>> {
        let mut stmt = self.conn.prepare(
            "SELECT i.description, i.date, p.name, t.name, t.abbreviated_name
             FROM injury_report i
             JOIN player p ON p.id = i.player_id
             JOIN team t ON t.id = i.team_id
             ORDER BY i.created_at DESC, i.id DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(InjuryReportView {
                description: row.get(0)?,
                date: row.get(1)?,
                player: row.get(2)?,
                team: TeamName {
                    full_name: row.get(3)?,
                    short_name: row.get(4)?,
                },
            })
        })?;

        let mut reports = Vec::new();
        for row in rows {
            reports.push(row?);
        }
        Ok(reports)
    }

    /// Find the single player whose name matches exactly
    pub fn find_player_by_name(&self, name: &str) -> Result<Option<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, age, position, image_url, team_id
             FROM player WHERE name = ?",
        )?;

        let result = stmt.query_row(params![name], |row| {
            Ok(Player {
                id: PlayerId::new(row.get(0)?),
                name: row.get(1)?,
                age: row.get(2)?,
                position: row.get(3)?,
                image_url: row.get(4)?,
                team_id: TeamId::new(row.get(5)?),
            })
        });

        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
