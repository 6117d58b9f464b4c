//! Daily agenda commands for CLI.

use bunkguard_core::priority::daily_agenda;
use bunkguard_core::storage::{Config, SubjectStore};
use chrono::{Duration, Local, NaiveDate};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Agenda for the configured look-ahead (default: tomorrow)
    Next,
    /// Agenda for a specific date (YYYY-MM-DD)
    For {
        /// Target date
        date: String,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SubjectStore::open()?;

    let date = match action {
        PlanAction::Next => {
            let ahead = Config::load_or_default().plan.ahead_days;
            Local::now().date_naive() + Duration::days(i64::from(ahead))
        }
        PlanAction::For { date } => NaiveDate::parse_from_str(&date, "%Y-%m-%d")?,
    };

    let agenda = daily_agenda(store.subjects(), date);
    let day = date.format("%a, %Y-%m-%d");
    if agenda.is_empty() {
        println!("No classes scheduled for {day}.");
        return Ok(());
    }

    println!("Plan for {day}:");
    for entry in &agenda {
        println!(
            "  [{}] {} (score {})",
            entry.message.to_uppercase(),
            entry.subject_name,
            entry.score
        );
        for reason in &entry.reasons {
            println!("      - {reason}");
        }
    }
    Ok(())
}
