//! Attendance overview command for CLI.

use bunkguard_core::attendance::SafetyStatus;
use bunkguard_core::storage::SubjectStore;
use bunkguard_core::summary::overview;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = SubjectStore::open()?;
    let lines = overview(store.subjects())?;
    if lines.is_empty() {
        println!("No subjects yet. Add one with `subject add`.");
        return Ok(());
    }

    for line in &lines {
        let marker = match line.status {
            SafetyStatus::Safe => "ok",
            SafetyStatus::Danger => "!!",
        };
        println!(
            "  [{marker}] {:<20} {:>6.2}%  {}",
            line.name,
            line.current_pct,
            line.risk.label()
        );
    }
    Ok(())
}
