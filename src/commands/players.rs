//! Player command implementations

use super::common::{open_database, print_json};
use crate::storage::{PlayerDraft, PlayerProfile};
use anyhow::Result;
use std::path::PathBuf;

/// Handle the player add command
pub fn handle_player_add(db_path: Option<PathBuf>, draft: PlayerDraft) -> Result<()> {
    let mut db = open_database(db_path)?;
    let player = db.create_player(&draft)?;

    println!("✓ Added player {} ({})", player.name, player.position);
    Ok(())
}

/// Handle the player find command
pub fn handle_player_find(db_path: Option<PathBuf>, name: String, as_json: bool) -> Result<()> {
    let db = open_database(db_path)?;
    let players = db.find_players(&name)?;

    print_players(&players, as_json)
}

/// Handle the player list command
pub fn handle_player_list(db_path: Option<PathBuf>, as_json: bool) -> Result<()> {
    let db = open_database(db_path)?;
    let players = db.all_players()?;

    print_players(&players, as_json)
}

fn print_players(players: &[PlayerProfile], as_json: bool) -> Result<()> {
    if as_json {
        print_json(&players)?;
    } else if players.is_empty() {
        println!("No players found");
    } else {
        for player in players {
            println!(
                "{:<24} {:<12} age {:<3} {} ({})",
                player.name, player.position, player.age, player.team.full_name,
                player.team.short_name
            );
        }
    }

    Ok(())
}
