//! Schedule accessor: game creation and filtered lookups.
//!
//! All reads go through one join query with optional filter clauses, so
//! month-filtered, team-filtered, and unfiltered lookups share a single
//! code path and output shape.

use super::{models::*, schema::StatsDatabase};
use crate::error::StatsError;
use crate::months::Month;
use anyhow::Result;
use rusqlite::{params, Row};

/// Fixed timezone suffix appended to every stored game time
pub const GAME_TIME_SUFFIX: &str = " ET";

impl StatsDatabase {
    /// Resolve both team names and insert a schedule row.
    ///
    /// The stored time string is the input with [`GAME_TIME_SUFFIX`]
    /// appended.
    pub fn add_game(&mut self, game: &NewGame) -> Result<Game> {
        let visitor_team = self.find_team_by_name(&game.visitor)?;
        let home_team = self.find_team_by_name(&game.home)?;

        let (visitor_team, home_team) = match (visitor_team, home_team) {
            (Some(v), Some(h)) => (v, h),
            _ => {
                return Err(StatsError::GameTeamsNotFound {
                    visitor: game.visitor.clone(),
                    home: game.home.clone(),
                }
                .into())
            }
        };

        let game_time = format!("{}{}", game.game_time, GAME_TIME_SUFFIX);

        self.conn.execute(
            "INSERT INTO schedule (game_date, game_time, home_team_id, visitor_team_id)
             VALUES (?, ?, ?, ?)",
            params![
                game.game_date,
                game_time,
                home_team.id.as_i64(),
                visitor_team.id.as_i64()
            ],
        )?;

        Ok(Game {
            id: GameId::new(self.conn.last_insert_rowid()),
            game_date: game.game_date.clone(),
            game_time,
            home_team_id: home_team.id,
            visitor_team_id: visitor_team.id,
        })
    }

    /// Find games matching the filter.
    ///
    /// An empty filter returns an empty list rather than the full
    /// schedule; unfiltered listing is `all_games`.
    pub fn find_games(&self, filter: &ScheduleFilter) -> Result<Vec<ScheduledGame>> {
        if filter.month.is_none() && filter.team.is_none() {
            return Ok(Vec::new());
        }
        self.query_games(filter)
    }

    /// Get the full schedule in the same enriched shape
    pub fn all_games(&self) -> Result<Vec<ScheduledGame>> {
        self.query_games(&ScheduleFilter::default())
    }

    /// Shared join query behind `find_games` and `all_games`
    fn query_games(&self, filter: &ScheduleFilter) -> Result<Vec<ScheduledGame>> {
        let mut query = String::from(
            "SELECT s.game_time, s.game_date,
                    home.name, home.abbreviated_name,
                    visitor.name, visitor.abbreviated_name
             FROM schedule s
             LEFT JOIN team home ON home.id = s.home_team_id
             LEFT JOIN team visitor ON visitor.id = s.visitor_team_id",
        );

        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(month) = filter.month {
            query.push_str(" WHERE CAST(strftime('%m', s.game_date) AS INTEGER) = ?");
            params.push(Box::new(month.index()));
        } else if let Some(team) = &filter.team {
            query.push_str(
                " WHERE home.abbreviated_name = ?
                  OR visitor.abbreviated_name = ?",
            );
            params.push(Box::new(team.clone()));
            params.push(Box::new(team.clone()));
        }

        query.push_str(" ORDER BY s.game_date, s.id");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            |row| Self::row_to_scheduled_game(row),
        )?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// Helper to convert a joined row to a ScheduledGame
    fn row_to_scheduled_game(row: &Row) -> rusqlite::Result<ScheduledGame> {
        Ok(ScheduledGame {
            game_time: row.get(0)?,
            game_date: row.get(1)?,
            home_team: TeamName {
                full_name: row.get(2)?,
                short_name: row.get(3)?,
            },
            visitor_team: TeamName {
                full_name: row.get(4)?,
                short_name: row.get(5)?,
            },
        })
    }

    /// Find games in the given calendar month
    pub fn games_by_month(&self, month: Month) -> Result<Vec<ScheduledGame>> {
        self.find_games(&ScheduleFilter {
            month: Some(month),
            team: None,
        })
    }

    /// Find games where the team plays on either side
    pub fn games_by_team(&self, abbreviation: &str) -> Result<Vec<ScheduledGame>> {
        self.find_games(&ScheduleFilter {
            month: None,
            team: Some(abbreviation.to_string()),
        })
    }
}
