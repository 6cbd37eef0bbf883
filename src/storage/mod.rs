//! Storage layer for the courtside data-access library
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `teams`, `players`, `schedule`, `injuries`: per-entity accessors

pub mod injuries;
pub mod models;
pub mod players;
pub mod schedule;
pub mod schema;
pub mod teams;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schedule::GAME_TIME_SUFFIX;
pub use schema::StatsDatabase;
