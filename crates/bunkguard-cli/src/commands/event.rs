//! Graded event commands for CLI.

use bunkguard_core::storage::SubjectStore;
use bunkguard_core::subject::{Event, EventKind};
use bunkguard_core::summary::pending_events;
use chrono::{Local, NaiveDate};
use clap::Subcommand;

use super::subject::resolve;

#[derive(Subcommand)]
pub enum EventAction {
    /// Attach an event to a subject
    Add {
        /// Subject id or name
        subject: String,
        /// Event title
        title: String,
        /// Event kind: assignment, test, or exam (default: assignment)
        #[arg(long, default_value = "assignment")]
        kind: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Toggle an event's completed flag
    Toggle {
        /// Subject id or name
        subject: String,
        /// Event id
        event_id: String,
    },
    /// List all incomplete events, nearest due date first
    Pending,
}

pub fn run(action: EventAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SubjectStore::open()?;

    match action {
        EventAction::Add {
            subject,
            title,
            kind,
            date,
        } => {
            let id = resolve(&store, &subject)?.id.clone();
            let kind = match kind.as_str() {
                "test" => EventKind::Test,
                "exam" => EventKind::Exam,
                _ => EventKind::Assignment,
            };
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
            let event = Event::new(title, kind, date);
            println!("Event created: {}", event.id);
            println!("{}", serde_json::to_string_pretty(&event)?);
            store.add_event(&id, event)?;
        }
        EventAction::Toggle { subject, event_id } => {
            let id = resolve(&store, &subject)?.id.clone();
            let completed = store.toggle_event(&id, &event_id)?;
            println!(
                "Event {event_id} is now {}",
                if completed { "completed" } else { "pending" }
            );
        }
        EventAction::Pending => {
            let today = Local::now().date_naive();
            let pending = pending_events(store.subjects(), today);
            if pending.is_empty() {
                println!("No pending work.");
                return Ok(());
            }
            for item in &pending {
                println!(
                    "  {} [{}] {} ({}) -- {}",
                    item.date,
                    item.kind.label(),
                    item.title,
                    item.subject_name,
                    item.urgency.label()
                );
            }
        }
    }
    Ok(())
}
