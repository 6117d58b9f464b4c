//! Cross-subject summaries.
//!
//! Two read-only views over the whole subject list: the pending-work
//! list (every incomplete graded event, nearest due date first) and a
//! one-line attendance overview per subject.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attendance::{RiskLevel, SafetyStatus};
use crate::error::ValidationError;
use crate::subject::{EventKind, Subject};

/// How soon a pending event is due, bucketed by calendar-day distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueUrgency {
    Overdue,
    Today,
    Tomorrow,
    InDays(u32),
}

impl DueUrgency {
    pub fn for_dates(due: NaiveDate, today: NaiveDate) -> Self {
        let days = (due - today).num_days();
        match days {
            d if d < 0 => DueUrgency::Overdue,
            0 => DueUrgency::Today,
            1 => DueUrgency::Tomorrow,
            d => DueUrgency::InDays(d as u32),
        }
    }

    pub fn label(&self) -> String {
        match self {
            DueUrgency::Overdue => "overdue".to_string(),
            DueUrgency::Today => "due today".to_string(),
            DueUrgency::Tomorrow => "due tomorrow".to_string(),
            DueUrgency::InDays(d) => format!("due in {d} days"),
        }
    }
}

/// An incomplete event joined with its owning subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingEvent {
    pub subject_id: String,
    pub subject_name: String,
    pub event_id: String,
    pub title: String,
    pub kind: EventKind,
    pub date: NaiveDate,
    pub urgency: DueUrgency,
}

/// All incomplete events across `subjects`, nearest due date first.
/// Completed events are excluded regardless of date.
pub fn pending_events(subjects: &[Subject], today: NaiveDate) -> Vec<PendingEvent> {
    let mut pending: Vec<PendingEvent> = subjects
        .iter()
        .flat_map(|subject| {
            subject
                .events
                .iter()
                .filter(|event| !event.completed)
                .map(|event| PendingEvent {
                    subject_id: subject.id.clone(),
                    subject_name: subject.name.clone(),
                    event_id: event.id.clone(),
                    title: event.title.clone(),
                    kind: event.kind,
                    date: event.date,
                    urgency: DueUrgency::for_dates(event.date, today),
                })
        })
        .collect();
    pending.sort_by_key(|event| event.date);
    pending
}

/// One status line per subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectOverview {
    pub id: String,
    pub name: String,
    pub current_pct: f64,
    pub status: SafetyStatus,
    pub risk: RiskLevel,
}

/// Project every subject against its own target.
///
/// # Errors
/// Propagates `ValidationError` from the first subject whose counters
/// violate the contract.
pub fn overview(subjects: &[Subject]) -> Result<Vec<SubjectOverview>, ValidationError> {
    subjects
        .iter()
        .map(|subject| {
            let report = subject.project()?;
            Ok(SubjectOverview {
                id: subject.id.clone(),
                name: subject.name.clone(),
                current_pct: report.current_pct,
                status: report.status,
                risk: report.risk,
            })
        })
        .collect()
}
