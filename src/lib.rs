//! Courtside sports-statistics data layer
//!
//! A Rust library and CLI for storing and querying sports league data:
//! teams, players, the game schedule, and injury reports, backed by a
//! local SQLite database.
//!
//! ## Features
//!
//! - **Team Registry**: Teams with full names and short codes, resolved
//!   by name or abbreviation
//! - **Player Search**: Case-insensitive substring search with results
//!   enriched by team display fields
//! - **Game Schedule**: Schedule games between teams, look them up by
//!   calendar month or by team short code
//! - **Injury Reports**: File and list timestamped injury reports
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtside::storage::{NewGame, StatsDatabase};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut db = StatsDatabase::new_in_memory()?;
//!
//! db.insert_team("Boston Narwhals", "BOS")?;
//! db.insert_team("Denver Yetis", "DEN")?;
//!
//! db.add_game(&NewGame {
//!     game_date: "2026-01-15".to_string(),
//!     game_time: "7:30 PM".to_string(),
//!     visitor: "Denver Yetis".to_string(),
//!     home: "Boston Narwhals".to_string(),
//! })?;
//!
//! let january = db.games_by_month(courtside::Month::January)?;
//! assert_eq!(january.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod months;
pub mod storage;

// Re-export commonly used types
pub use error::{Result, StatsError};
pub use months::Month;
pub use storage::{GameId, PlayerId, StatsDatabase, TeamId};
