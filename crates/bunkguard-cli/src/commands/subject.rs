//! Subject management commands for CLI.

use bunkguard_core::attendance::ClassesNeeded;
use bunkguard_core::storage::{Config, SubjectStore};
use bunkguard_core::subject::{Subject, DAYS};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Add a new subject
    Add {
        /// Subject name
        name: String,
        /// Classes attended so far
        #[arg(long, default_value = "0")]
        attended: u32,
        /// Classes held so far
        #[arg(long, default_value = "0")]
        total: u32,
        /// Target percentage (default from config)
        #[arg(long)]
        target: Option<u8>,
        /// Comma-separated weekday indices with a class (0=Sun .. 6=Sat)
        #[arg(long)]
        days: Option<String>,
        /// Informational class time, e.g. "09:00"
        #[arg(long)]
        time: Option<String>,
    },
    /// List subjects as JSON
    List,
    /// Show a subject's projection report
    Show {
        /// Subject id or name
        subject: String,
    },
    /// Remove a subject and all its events
    Remove {
        /// Subject id or name
        subject: String,
    },
}

pub fn run(action: SubjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SubjectStore::open()?;

    match action {
        SubjectAction::Add {
            name,
            attended,
            total,
            target,
            days,
            time,
        } => {
            let target = target.unwrap_or_else(|| Config::load_or_default().defaults.target);
            let mut subject = Subject::new(name, attended, total, target);
            if let Some(days) = days {
                subject.schedule = parse_days(&days)?;
            }
            subject.time = time;
            subject.validate()?;
            println!("Subject created: {}", subject.id);
            println!("{}", serde_json::to_string_pretty(&subject)?);
            store.add_subject(subject)?;
        }
        SubjectAction::List => {
            println!("{}", serde_json::to_string_pretty(store.subjects())?);
        }
        SubjectAction::Show { subject } => {
            let subject = resolve(&store, &subject)?;
            let report = subject.project()?;
            println!("{} ({}/{} attended, target {}%)",
                subject.name, subject.attended, subject.total, subject.target);
            println!("Current: {}%  [{}]", report.current_pct, report.risk.label());
            match report.needed {
                ClassesNeeded::Count(0) => {
                    println!("Safe: you can miss {} more classes.", report.bunkable);
                }
                ClassesNeeded::Count(n) => {
                    println!("Danger: attend the next {n} classes back-to-back.");
                }
                ClassesNeeded::Unreachable => {
                    println!("Danger: a 100% target cannot be recovered.");
                }
            }
            if !subject.schedule.is_empty() {
                let days: Vec<&str> = subject
                    .schedule
                    .iter()
                    .map(|&d| DAYS[d as usize])
                    .collect();
                println!("Schedule: {}", days.join(", "));
            }
        }
        SubjectAction::Remove { subject } => {
            let id = resolve(&store, &subject)?.id.clone();
            let removed = store.remove_subject(&id)?;
            println!("Subject removed: {}", removed.name);
        }
    }
    Ok(())
}

/// Find a subject by id or exact name.
pub fn resolve<'a>(
    store: &'a SubjectStore,
    key: &str,
) -> Result<&'a Subject, Box<dyn std::error::Error>> {
    store
        .resolve(key)
        .ok_or_else(|| format!("Subject not found: {key}").into())
}

fn parse_days(days: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    days.split(',')
        .map(|s| {
            s.trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid weekday index: {s}").into())
        })
        .collect()
}
