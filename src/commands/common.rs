//! Helpers shared between command handlers

use crate::storage::StatsDatabase;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Open the database at the given path, or at the default location when
/// no override is supplied
pub fn open_database(db_path: Option<PathBuf>) -> Result<StatsDatabase> {
    match db_path {
        Some(path) => StatsDatabase::open(path),
        None => StatsDatabase::new(),
    }
}

/// Pretty-print a value as JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
