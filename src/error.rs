//! Error types for the courtside data-access layer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data directory error: {message}")]
    DataDir { message: String },

    #[error("Team not found: {abbreviation}")]
    TeamNotFound { abbreviation: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Visitor {visitor:?} or home {home:?} cannot be found")]
    GameTeamsNotFound { visitor: String, home: String },

    #[error("Missing player name")]
    MissingPlayerName,

    #[error("Data missing for {name}: {field}")]
    IncompletePlayer { name: String, field: &'static str },

    #[error("Unrecognized month: {name}")]
    UnknownMonth { name: String },
}

#[cfg(test)]
mod tests;
