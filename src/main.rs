//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use courtside::{
    cli::{Commands, Courtside, InjuryCmd, PlayerCmd, ScheduleCmd, TeamCmd},
    commands::{
        injuries::{handle_injury_add, handle_injury_list},
        players::{handle_player_add, handle_player_find, handle_player_list},
        schedule::{handle_schedule_add, handle_schedule_find, handle_schedule_list},
        teams::{handle_team_add, handle_team_list},
    },
    storage::{NewGame, NewInjuryReport, PlayerDraft},
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = Courtside::parse();
    let db = app.db;

    match app.command {
        Commands::Team { cmd } => match cmd {
            TeamCmd::Add { name, abbr } => handle_team_add(db, name, abbr)?,
            TeamCmd::List { json } => handle_team_list(db, json)?,
        },

        Commands::Player { cmd } => match cmd {
            PlayerCmd::Add {
                name,
                age,
                position,
                image_url,
                team,
            } => handle_player_add(
                db,
                PlayerDraft {
                    name,
                    age,
                    position,
                    image_url,
                    team,
                },
            )?,
            PlayerCmd::Find { name, json } => handle_player_find(db, name, json)?,
            PlayerCmd::List { json } => handle_player_list(db, json)?,
        },

        Commands::Schedule { cmd } => match cmd {
            ScheduleCmd::Add {
                date,
                time,
                visitor,
                home,
            } => handle_schedule_add(
                db,
                NewGame {
                    game_date: date,
                    game_time: time,
                    visitor,
                    home,
                },
            )?,
            ScheduleCmd::Find { month, team, json } => {
                if month.is_some() && team.is_some() {
                    eprintln!("Error: Cannot specify both --month and --team at the same time");
                    std::process::exit(1);
                }
                handle_schedule_find(db, month, team, json)?
            }
            ScheduleCmd::List { json } => handle_schedule_list(db, json)?,
        },

        Commands::Injury { cmd } => match cmd {
            InjuryCmd::Add {
                player,
                team,
                description,
                date,
            } => handle_injury_add(
                db,
                NewInjuryReport {
                    description,
                    date,
                    player,
                    team,
                },
            )?,
            InjuryCmd::List { json } => handle_injury_list(db, json)?,
        },
    }

    Ok(())
}
