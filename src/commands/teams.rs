//! Team command implementations

use super::common::{open_database, print_json};
use anyhow::Result;
use std::path::PathBuf;

/// Handle the team add command
pub fn handle_team_add(db_path: Option<PathBuf>, name: String, abbr: String) -> Result<()> {
    let mut db = open_database(db_path)?;
    let team = db.insert_team(&name, &abbr)?;

    println!("✓ Added team {} ({})", team.name, team.abbreviated_name);
    Ok(())
}

/// Handle the team list command
pub fn handle_team_list(db_path: Option<PathBuf>, as_json: bool) -> Result<()> {
    let db = open_database(db_path)?;
    let teams = db.all_teams()?;

    if as_json {
        print_json(&teams)?;
    } else if teams.is_empty() {
        println!("No teams found");
    } else {
        for team in &teams {
            println!("{:<4} {}", team.abbreviated_name, team.name);
        }
    }

    Ok(())
}
