//! Daily attendance marking commands for CLI.

use bunkguard_core::actions::{apply, Action, ActionOutcome};
use bunkguard_core::storage::SubjectStore;
use chrono::Local;
use clap::Subcommand;

use super::subject::resolve;

#[derive(Subcommand)]
pub enum MarkAction {
    /// Mark today's class as attended
    Present {
        /// Subject id or name
        subject: String,
    },
    /// Mark today's class as missed
    Absent {
        /// Subject id or name
        subject: String,
    },
    /// Record today's class as cancelled
    Cancelled {
        /// Subject id or name
        subject: String,
    },
    /// Undo today's action
    Undo {
        /// Subject id or name
        subject: String,
    },
}

pub fn run(action: MarkAction) -> Result<(), Box<dyn std::error::Error>> {
    let (key, core_action) = match &action {
        MarkAction::Present { subject } => (subject, Action::Present),
        MarkAction::Absent { subject } => (subject, Action::Absent),
        MarkAction::Cancelled { subject } => (subject, Action::Cancelled),
        MarkAction::Undo { subject } => (subject, Action::Undo),
    };

    let mut store = SubjectStore::open()?;
    let id = resolve(&store, key)?.id.clone();
    let today = Local::now().date_naive();

    let (outcome, name, attended, total) = store.update(&id, |subject| {
        let outcome = apply(subject, core_action, today);
        (outcome, subject.name.clone(), subject.attended, subject.total)
    })?;

    match outcome {
        ActionOutcome::Marked(status) => {
            println!("Marked {} for today: {name}", status.label());
        }
        ActionOutcome::Undone(status) => {
            println!("Undid today's {}: {name}", status.label());
        }
        ActionOutcome::Ignored => {
            println!("No change: already marked today, or nothing to undo.");
        }
    }
    println!("Attended {attended}/{total}");
    Ok(())
}
