//! CLI argument definitions and parsing.

use crate::months::Month;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "courtside", about = "Sports statistics data store CLI")]
pub struct Courtside {
    /// Path to the SQLite database file (defaults to the user data directory).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage teams
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Manage players
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Manage the game schedule
    Schedule {
        #[clap(subcommand)]
        cmd: ScheduleCmd,
    },

    /// Manage injury reports
    Injury {
        #[clap(subcommand)]
        cmd: InjuryCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Add a team
    Add {
        /// Full team name, e.g. "Boston Narwhals".
        #[clap(long)]
        name: String,

        /// Short code, e.g. "BOS".
        #[clap(long)]
        abbr: String,
    },

    /// List all teams
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Add a player.
    ///
    /// Every field is required for the row to be created; a partial
    /// submission is rejected without touching the database.
    Add {
        #[clap(long)]
        name: Option<String>,

        #[clap(long)]
        age: Option<u32>,

        #[clap(long)]
        position: Option<String>,

        #[clap(long)]
        image_url: Option<String>,

        /// Team short code, e.g. "BOS".
        #[clap(long)]
        team: Option<String>,
    },

    /// Find players by name fragment (case-insensitive substring match)
    Find {
        /// Name fragment, e.g. "oh" matches "John".
        #[clap(long, short = 'n')]
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List all players
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ScheduleCmd {
    /// Schedule a game between two existing teams
    Add {
        /// Game date, ISO format (YYYY-MM-DD).
        #[clap(long)]
        date: String,

        /// Local start time, e.g. "7:30 PM" (stored with the ET suffix).
        #[clap(long)]
        time: String,

        /// Visiting team's full name.
        #[clap(long)]
        visitor: String,

        /// Home team's full name.
        #[clap(long)]
        home: String,
    },

    /// Find games by month or by team abbreviation
    Find {
        /// Filter by month name, e.g. "January".
        #[clap(long, short = 'm')]
        month: Option<Month>,

        /// Filter by team short code, matching either side.
        #[clap(long, short = 't')]
        team: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the full schedule
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum InjuryCmd {
    /// File an injury report for a player
    Add {
        /// Injured player's exact name.
        #[clap(long)]
        player: String,

        /// Team short code, e.g. "BOS".
        #[clap(long)]
        team: String,

        /// Report description, e.g. "Sprained ankle, day-to-day".
        #[clap(long)]
        description: String,

        /// Report date, ISO format (YYYY-MM-DD).
        #[clap(long)]
        date: String,
    },

    /// List all injury reports, newest first
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
