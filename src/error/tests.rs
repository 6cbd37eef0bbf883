//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_sqlite_error_conversion() {
    let sqlite_error = rusqlite::Error::QueryReturnedNoRows;
    let stats_error = StatsError::from(sqlite_error);

    match stats_error {
        StatsError::Sqlite(_) => (),
        _ => panic!("Expected Sqlite error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let stats_error = StatsError::from(io_error);

    match stats_error {
        StatsError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_game_teams_not_found_names_both_lookups() {
    let err = StatsError::GameTeamsNotFound {
        visitor: "Narwhals".to_string(),
        home: "Yetis".to_string(),
    };

    let message = err.to_string();
    assert!(message.contains("Narwhals"));
    assert!(message.contains("Yetis"));
}

#[test]
fn test_incomplete_player_message() {
    let err = StatsError::IncompletePlayer {
        name: "John Doe".to_string(),
        field: "age",
    };

    assert_eq!(err.to_string(), "Data missing for John Doe: age");
}

#[test]
fn test_team_not_found_message() {
    let err = StatsError::TeamNotFound {
        abbreviation: "ABC".to_string(),
    };

    assert_eq!(err.to_string(), "Team not found: ABC");
}
