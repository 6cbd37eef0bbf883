//! Schedule command implementations

use super::common::{open_database, print_json};
use crate::months::Month;
use crate::storage::{NewGame, ScheduleFilter, ScheduledGame};
use anyhow::Result;
use std::path::PathBuf;

/// Handle the schedule add command
pub fn handle_schedule_add(db_path: Option<PathBuf>, game: NewGame) -> Result<()> {
    let mut db = open_database(db_path)?;
    let game = db.add_game(&game)?;

    println!(
        "✓ Scheduled game on {} at {}",
        game.game_date, game.game_time
    );
    Ok(())
}

/// Handle the schedule find command
pub fn handle_schedule_find(
    db_path: Option<PathBuf>,
    month: Option<Month>,
    team: Option<String>,
    as_json: bool,
) -> Result<()> {
    let db = open_database(db_path)?;
    let games = db.find_games(&ScheduleFilter { month, team })?;

    print_games(&games, as_json)
}

/// Handle the schedule list command
pub fn handle_schedule_list(db_path: Option<PathBuf>, as_json: bool) -> Result<()> {
    let db = open_database(db_path)?;
    let games = db.all_games()?;

    print_games(&games, as_json)
}

fn print_games(games: &[ScheduledGame], as_json: bool) -> Result<()> {
    if as_json {
        print_json(&games)?;
    } else if games.is_empty() {
        println!("No games found");
    } else {
        for game in games {
            println!(
                "{} {:<10} {} at {}",
                game.game_date,
                game.game_time,
                game.visitor_team.short_name,
                game.home_team.short_name
            );
        }
    }

    Ok(())
}
