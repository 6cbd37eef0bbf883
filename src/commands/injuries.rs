//! Injury report command implementations

use super::common::{open_database, print_json};
use crate::storage::NewInjuryReport;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the injury add command
pub fn handle_injury_add(db_path: Option<PathBuf>, report: NewInjuryReport) -> Result<()> {
    let mut db = open_database(db_path)?;
    let report = db.report_injury(&report)?;

    println!("✓ Filed injury report dated {}", report.date);
    Ok(())
}

/// Handle the injury list command
pub fn handle_injury_list(db_path: Option<PathBuf>, as_json: bool) -> Result<()> {
    let db = open_database(db_path)?;
    let reports = db.injury_reports()?;

    if as_json {
        print_json(&reports)?;
    } else if reports.is_empty() {
        println!("No injury reports found");
    } else {
        for report in &reports {
            println!(
                "{} {:<24} ({}) {}",
                report.date, report.player, report.team.short_name, report.description
            );
        }
    }

    Ok(())
}
