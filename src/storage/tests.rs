//! Unit tests for storage functionality

use super::*;
use crate::error::StatsError;
use crate::months::Month;

fn create_test_db() -> StatsDatabase {
    StatsDatabase::new_in_memory().unwrap()
}

fn create_test_db_with_teams() -> StatsDatabase {
    let mut db = create_test_db();
    db.insert_team("Boston Narwhals", "BOS").unwrap();
    db.insert_team("Denver Yetis", "DEN").unwrap();
    db.insert_team("Chicago Pike", "CHI").unwrap();
    db
}

fn draft(name: &str, team: &str) -> PlayerDraft {
    PlayerDraft {
        name: Some(name.to_string()),
        age: Some(27),
        position: Some("Center".to_string()),
        image_url: Some(format!("https://img.example/{name}.png")),
        team: Some(team.to_string()),
    }
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_insert_and_find_team_by_name() {
    let mut db = create_test_db();

    let team = db.insert_team("Boston Narwhals", "BOS").unwrap();
    assert_eq!(team.name, "Boston Narwhals");
    assert_eq!(team.abbreviated_name, "BOS");

    let found = db.find_team_by_name("Boston Narwhals").unwrap().unwrap();
    assert_eq!(found.id, team.id);

    // Exact match only
    assert!(db.find_team_by_name("Boston").unwrap().is_none());
}

#[test]
fn test_find_team_by_abbreviation() {
    let db = create_test_db_with_teams();

    let team = db.find_team_by_abbreviation("DEN").unwrap().unwrap();
    assert_eq!(team.name, "Denver Yetis");

    assert!(db.find_team_by_abbreviation("XXX").unwrap().is_none());
}

#[test]
fn test_duplicate_team_name_rejected() {
    let mut db = create_test_db_with_teams();

    let result = db.insert_team("Boston Narwhals", "BO2");
    assert!(result.is_err());
}

#[test]
fn test_all_teams_ordered_by_name() {
    let db = create_test_db_with_teams();

    let teams = db.all_teams().unwrap();
    let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Boston Narwhals", "Chicago Pike", "Denver Yetis"]);
}

#[test]
fn test_create_player() {
    let mut db = create_test_db_with_teams();

    let player = db.create_player(&draft("John Smith", "BOS")).unwrap();
    assert_eq!(player.name, "John Smith");

    let team = db.find_team_by_abbreviation("BOS").unwrap().unwrap();
    assert_eq!(player.team_id, team.id);
}

#[test]
fn test_create_player_missing_name() {
    let mut db = create_test_db_with_teams();

    let mut incomplete = draft("ignored", "BOS");
    incomplete.name = None;

    let err = db.create_player(&incomplete).unwrap_err();
    match err.downcast_ref::<StatsError>() {
        Some(StatsError::MissingPlayerName) => (),
        other => panic!("Expected MissingPlayerName, got {other:?}"),
    }

    assert!(db.all_players().unwrap().is_empty());
}

#[test]
fn test_create_player_missing_fields_inserts_nothing() {
    let mut db = create_test_db_with_teams();

    for field in ["age", "position", "image_url", "team"] {
        let mut incomplete = draft("John Smith", "BOS");
        match field {
            "age" => incomplete.age = None,
            "position" => incomplete.position = None,
            "image_url" => incomplete.image_url = None,
            "team" => incomplete.team = None,
            _ => unreachable!(),
        }

        let err = db.create_player(&incomplete).unwrap_err();
        match err.downcast_ref::<StatsError>() {
            Some(StatsError::IncompletePlayer { name, field: f }) => {
                assert_eq!(name, "John Smith");
                assert_eq!(*f, field);
            }
            other => panic!("Expected IncompletePlayer, got {other:?}"),
        }
    }

    assert!(db.all_players().unwrap().is_empty());
}

#[test]
fn test_create_player_unknown_team() {
    let mut db = create_test_db_with_teams();

    let err = db.create_player(&draft("John Smith", "XXX")).unwrap_err();
    match err.downcast_ref::<StatsError>() {
        Some(StatsError::TeamNotFound { abbreviation }) => assert_eq!(abbreviation, "XXX"),
        other => panic!("Expected TeamNotFound, got {other:?}"),
    }

    assert!(db.all_players().unwrap().is_empty());
}

#[test]
fn test_find_players_substring_case_insensitive() {
    let mut db = create_test_db_with_teams();
    db.create_player(&draft("John Smith", "BOS")).unwrap();
    db.create_player(&draft("Johnny Walker", "DEN")).unwrap();
    db.create_player(&draft("Pete Cohen", "CHI")).unwrap();
    db.create_player(&draft("Alex Carter", "BOS")).unwrap();

    let hits = db.find_players("oh").unwrap();
    let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["John Smith", "Johnny Walker", "Pete Cohen"]);

    // Uppercase fragment matches the same rows
    let hits = db.find_players("OH").unwrap();
    assert_eq!(hits.len(), 3);
}

#[test]
fn test_find_players_enriched_with_team_names() {
    let mut db = create_test_db_with_teams();
    db.create_player(&draft("John Smith", "BOS")).unwrap();

    let hits = db.find_players("Smith").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].team,
        TeamName {
            full_name: "Boston Narwhals".to_string(),
            short_name: "BOS".to_string(),
        }
    );
    assert_eq!(hits[0].age, 27);
    assert_eq!(hits[0].position, "Center");
}

#[test]
fn test_all_players() {
    let mut db = create_test_db_with_teams();
    db.create_player(&draft("John Smith", "BOS")).unwrap();
    db.create_player(&draft("Alex Carter", "DEN")).unwrap();

    let players = db.all_players().unwrap();
    assert_eq!(players.len(), 2);
}

#[test]
fn test_add_game_appends_time_suffix() {
    let mut db = create_test_db_with_teams();

    let game = db
        .add_game(&NewGame {
            game_date: "2026-01-15".to_string(),
            game_time: "7:30 PM".to_string(),
            visitor: "Denver Yetis".to_string(),
            home: "Boston Narwhals".to_string(),
        })
        .unwrap();

    assert_eq!(game.game_time, "7:30 PM ET");

    let visitor = db.find_team_by_name("Denver Yetis").unwrap().unwrap();
    let home = db.find_team_by_name("Boston Narwhals").unwrap().unwrap();
    assert_eq!(game.visitor_team_id, visitor.id);
    assert_eq!(game.home_team_id, home.id);
}

#[test]
fn test_add_game_unknown_team_names_both_lookups() {
    let mut db = create_test_db_with_teams();

    let err = db
        .add_game(&NewGame {
            game_date: "2026-01-15".to_string(),
            game_time: "7:30 PM".to_string(),
            visitor: "Atlantis Krakens".to_string(),
            home: "Boston Narwhals".to_string(),
        })
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Atlantis Krakens"));
    assert!(message.contains("Boston Narwhals"));

    assert!(db.all_games().unwrap().is_empty());
}

#[test]
fn test_find_games_by_month() {
    let mut db = create_test_db_with_teams();
    seed_schedule(&mut db);

    let january = db.games_by_month(Month::January).unwrap();
    assert_eq!(january.len(), 2);
    for game in &january {
        assert!(game.game_date.starts_with("2026-01"));
    }

    let february = db.games_by_month(Month::February).unwrap();
    assert_eq!(february.len(), 1);
    assert_eq!(february[0].game_date, "2026-02-03");

    assert!(db.games_by_month(Month::July).unwrap().is_empty());
}

#[test]
fn test_find_games_by_team_matches_either_side() {
    let mut db = create_test_db_with_teams();
    seed_schedule(&mut db);

    // BOS hosts one game and visits another
    let games = db.games_by_team("BOS").unwrap();
    assert_eq!(games.len(), 2);
    for game in &games {
        assert!(game.home_team.short_name == "BOS" || game.visitor_team.short_name == "BOS");
    }

    // CHI only appears once, as the visitor
    let games = db.games_by_team("CHI").unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].visitor_team.short_name, "CHI");

    assert!(db.games_by_team("XXX").unwrap().is_empty());
}

#[test]
fn test_find_games_empty_filter_returns_nothing() {
    let mut db = create_test_db_with_teams();
    seed_schedule(&mut db);

    let games = db.find_games(&ScheduleFilter::default()).unwrap();
    assert!(games.is_empty());
}

#[test]
fn test_all_games_enriched_shape() {
    let mut db = create_test_db_with_teams();
    seed_schedule(&mut db);

    let games = db.all_games().unwrap();
    assert_eq!(games.len(), 3);

    // Ordered by date
    let dates: Vec<&str> = games.iter().map(|g| g.game_date.as_str()).collect();
    assert_eq!(dates, ["2026-01-15", "2026-01-20", "2026-02-03"]);

    assert_eq!(
        games[0].home_team,
        TeamName {
            full_name: "Boston Narwhals".to_string(),
            short_name: "BOS".to_string(),
        }
    );
}

#[test]
fn test_report_injury_round_trip() {
    let mut db = create_test_db_with_teams();
    db.create_player(&draft("John Smith", "BOS")).unwrap();

    let report = db
        .report_injury(&NewInjuryReport {
            description: "Sprained ankle, day-to-day".to_string(),
            date: "2026-01-16".to_string(),
            player: "John Smith".to_string(),
            team: "BOS".to_string(),
        })
        .unwrap();

    assert!(report.created_at > 0);
    assert_eq!(report.created_at, report.updated_at);

    let reports = db.injury_reports().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].player, "John Smith");
    assert_eq!(reports[0].team.short_name, "BOS");
    assert_eq!(reports[0].description, "Sprained ankle, day-to-day");
}

#[test]
fn test_report_injury_unknown_player() {
    let mut db = create_test_db_with_teams();

    let err = db
        .report_injury(&NewInjuryReport {
            description: "Knee soreness".to_string(),
            date: "2026-01-16".to_string(),
            player: "Nobody".to_string(),
            team: "BOS".to_string(),
        })
        .unwrap_err();

    match err.downcast_ref::<StatsError>() {
        Some(StatsError::PlayerNotFound { name }) => assert_eq!(name, "Nobody"),
        other => panic!("Expected PlayerNotFound, got {other:?}"),
    }
}

#[test]
fn test_clear_all_data() {
    let mut db = create_test_db_with_teams();
    db.create_player(&draft("John Smith", "BOS")).unwrap();
    seed_schedule(&mut db);

    db.clear_all_data().unwrap();

    assert!(db.all_teams().unwrap().is_empty());
    assert!(db.all_players().unwrap().is_empty());
    assert!(db.all_games().unwrap().is_empty());
    assert!(db.injury_reports().unwrap().is_empty());
}

fn seed_schedule(db: &mut StatsDatabase) {
    for (date, time, visitor, home) in [
        ("2026-01-15", "7:30 PM", "Denver Yetis", "Boston Narwhals"),
        ("2026-01-20", "8:00 PM", "Boston Narwhals", "Denver Yetis"),
        ("2026-02-03", "6:00 PM", "Chicago Pike", "Denver Yetis"),
    ] {
        db.add_game(&NewGame {
            game_date: date.to_string(),
            game_time: time.to_string(),
            visitor: visitor.to_string(),
            home: home.to_string(),
        })
        .unwrap();
    }
}
