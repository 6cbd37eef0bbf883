//! Data models for the storage layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for team row ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for player row ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for schedule row ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub i64);

impl GameId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team row stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub abbreviated_name: String,
}

/// Player row stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub age: u32,
    pub position: String,
    pub image_url: String,
    pub team_id: TeamId,
}

/// Schedule row stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub game_date: String,
    pub game_time: String,
    pub home_team_id: TeamId,
    pub visitor_team_id: TeamId,
}

/// Injury report row stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjuryReport {
    pub id: i64,
    pub description: String,
    pub date: String,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Incoming player data, all fields optional until validated.
///
/// Mirrors the loose shape an upstream route layer hands over; the
/// accessor rejects drafts with missing fields before touching the
/// database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub position: Option<String>,
    pub image_url: Option<String>,
    /// Team abbreviation, e.g. "BOS".
    pub team: Option<String>,
}

/// Input for scheduling a game; teams are referenced by full name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
    pub game_date: String,
    pub game_time: String,
    pub visitor: String,
    pub home: String,
}

/// Input for filing an injury report; the player is referenced by exact
/// name and the team by abbreviation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInjuryReport {
    pub description: String,
    pub date: String,
    pub player: String,
    pub team: String,
}

/// Filter for schedule lookups; at most one mode applies.
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub month: Option<crate::months::Month>,
    pub team: Option<String>,
}

/// Team display fields embedded in enriched query results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamName {
    pub full_name: String,
    pub short_name: String,
}

/// Player enriched with team display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub position: String,
    pub image_url: String,
    pub age: u32,
    pub team: TeamName,
}

/// Scheduled game enriched with both teams' display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub game_time: String,
    pub game_date: String,
    pub home_team: TeamName,
    pub visitor_team: TeamName,
}

/// Injury report enriched with player and team display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjuryReportView {
    pub description: String,
    pub date: String,
    pub player: String,
    pub team: TeamName,
}
