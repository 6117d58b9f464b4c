//! Subject and event data model.
//!
//! A subject carries its attendance counters, the weekly schedule it is
//! taught on, and the graded events (assignments, tests, exams) attached
//! to it. Records round-trip through serde; `schedule` and `events`
//! default to empty so documents written before those fields existed
//! still deserialize.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Display names for weekday indices (0=Sun .. 6=Sat).
pub const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday index of a calendar date (0=Sun .. 6=Sat).
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Kind of graded event attached to a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Assignment,
    Test,
    Exam,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Assignment => "assignment",
            EventKind::Test => "test",
            EventKind::Exam => "exam",
        }
    }
}

/// An assignment, test, or exam due on a calendar day.
///
/// Events live inside exactly one subject and are removed only when the
/// subject itself is removed. `completed` is toggled by the user and is
/// independent of the attendance counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub kind: EventKind,
    /// Due date, local calendar day only (no time component).
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

impl Event {
    pub fn new(title: impl Into<String>, kind: EventKind, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            kind,
            date,
            completed: false,
        }
    }
}

/// Status of the single attendance action committed on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Present,
    Absent,
    Cancelled,
}

impl ActionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActionStatus::Present => "present",
            ActionStatus::Absent => "absent",
            ActionStatus::Cancelled => "cancelled",
        }
    }
}

/// The one action taken against a subject on `date`.
///
/// There is no daily reset job: a record dated on a previous day simply
/// stops matching "today" and the subject reads as unmarked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastAction {
    pub date: NaiveDate,
    pub status: ActionStatus,
}

/// A tracked subject with attendance counters and schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// Classes attended to date. Invariant: `attended <= total`.
    pub attended: u32,
    /// Classes held to date.
    pub total: u32,
    /// Required attendance percentage, 1..=100.
    pub target: u8,
    /// Weekday indices with a recurring class (0=Sun .. 6=Sat).
    #[serde(default)]
    pub schedule: Vec<u8>,
    /// Informational wall-clock time of day, e.g. "09:00".
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub last_action: Option<LastAction>,
}

impl Subject {
    /// Create a subject with a fresh id and no events or recorded action.
    pub fn new(name: impl Into<String>, attended: u32, total: u32, target: u8) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            attended,
            total,
            target,
            schedule: Vec::new(),
            time: None,
            events: Vec::new(),
            last_action: None,
        }
    }

    /// Check the counter and target contract.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidSubjectState` when the name is
    /// empty, `attended > total`, the target is outside 1..=100, or the
    /// schedule contains an out-of-range or duplicate weekday.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidSubjectState(
                "subject name is empty".to_string(),
            ));
        }
        if self.attended > self.total {
            return Err(ValidationError::InvalidSubjectState(format!(
                "attended ({}) exceeds total ({})",
                self.attended, self.total
            )));
        }
        if self.target < 1 || self.target > 100 {
            return Err(ValidationError::InvalidSubjectState(format!(
                "target {}% outside 1..=100",
                self.target
            )));
        }
        for (i, &day) in self.schedule.iter().enumerate() {
            if day > 6 {
                return Err(ValidationError::InvalidSubjectState(format!(
                    "schedule day index {day} outside 0..=6"
                )));
            }
            if self.schedule[..i].contains(&day) {
                return Err(ValidationError::InvalidSubjectState(format!(
                    "schedule contains day index {day} twice"
                )));
            }
        }
        Ok(())
    }

    /// Whether the subject has a recurring class on `date`'s weekday.
    pub fn has_class_on(&self, date: NaiveDate) -> bool {
        self.schedule.contains(&weekday_index(date))
    }

    /// The action already committed for `today`, if any.
    ///
    /// Derived purely from `(last_action, today)` -- a stale record from
    /// an earlier day yields `None`.
    pub fn marked_on(&self, today: NaiveDate) -> Option<ActionStatus> {
        self.last_action
            .filter(|action| action.date == today)
            .map(|action| action.status)
    }
}
