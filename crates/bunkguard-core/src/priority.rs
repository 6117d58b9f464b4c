//! Daily priority engine.
//!
//! Ranks subjects for a given calendar day by combining schedule
//! membership, graded events due that day, and attendance shortfall.
//! A subject with no class on the day is excluded from the agenda
//! entirely rather than ranked at zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::subject::Subject;

/// Score added once when at least one event is due on the target day.
pub const EVENT_WEIGHT: u32 = 100;

/// Score added when the attendance ratio sits strictly below target.
pub const ATTENDANCE_WEIGHT: u32 = 50;

/// Priority band for one subject on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    fn from_score(score: u32) -> Self {
        if score >= EVENT_WEIGHT {
            PriorityLevel::High
        } else if score >= ATTENDANCE_WEIGHT {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PriorityLevel::High => "must attend",
            PriorityLevel::Medium => "should attend",
            PriorityLevel::Low => "safe to skip",
        }
    }

    /// Fixed display color tag for UI layers.
    pub fn color(&self) -> &'static str {
        match self {
            PriorityLevel::High => "danger",
            PriorityLevel::Medium => "warning",
            PriorityLevel::Low => "safe",
        }
    }
}

/// Priority verdict for one subject on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPriority {
    pub subject_name: String,
    pub score: u32,
    pub level: PriorityLevel,
    pub message: String,
    /// Event reasons first, then the attendance-risk reason.
    pub reasons: Vec<String>,
}

/// Compute the priority of `subject` on `date`.
///
/// Returns `None` when the subject has no class on that weekday; the
/// caller must drop it from the day's agenda. Events due on the day add
/// [`EVENT_WEIGHT`] once regardless of how many there are, with one
/// reason per event. An attendance ratio strictly below target adds
/// [`ATTENDANCE_WEIGHT`]; a subject with no classes held counts as 0%,
/// below any target.
pub fn priority_for(subject: &Subject, date: NaiveDate) -> Option<DailyPriority> {
    if !subject.has_class_on(date) {
        return None;
    }

    let mut score = 0;
    let mut reasons = Vec::new();

    let due_today: Vec<_> = subject.events.iter().filter(|e| e.date == date).collect();
    if !due_today.is_empty() {
        score += EVENT_WEIGHT;
        for event in &due_today {
            reasons.push(format!("{}: {}", event.kind.label(), event.title));
        }
    }

    let below_target = subject.total == 0
        || 100 * u64::from(subject.attended) < u64::from(subject.target) * u64::from(subject.total);
    if below_target {
        score += ATTENDANCE_WEIGHT;
        let current_pct = if subject.total == 0 {
            0.0
        } else {
            f64::from(subject.attended) / f64::from(subject.total) * 100.0
        };
        reasons.push(format!("attendance lagging ({current_pct:.1}%)"));
    }

    let level = PriorityLevel::from_score(score);
    Some(DailyPriority {
        subject_name: subject.name.clone(),
        score,
        level,
        message: level.message().to_string(),
        reasons,
    })
}

/// Ranked agenda for `date`: every applicable subject, highest score
/// first. Ties keep input order (stable sort).
pub fn daily_agenda(subjects: &[Subject], date: NaiveDate) -> Vec<DailyPriority> {
    let mut agenda: Vec<_> = subjects
        .iter()
        .filter_map(|subject| priority_for(subject, date))
        .collect();
    agenda.sort_by(|a, b| b.score.cmp(&a.score));
    agenda
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::{Event, EventKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2026-08-24 is a Monday (weekday index 1).
    fn monday() -> NaiveDate {
        date(2026, 8, 24)
    }

    fn scheduled_subject(name: &str, attended: u32, total: u32) -> Subject {
        let mut subject = Subject::new(name, attended, total, 75);
        subject.schedule = vec![1, 3]; // Mon, Wed
        subject
    }

    #[test]
    fn no_class_that_day_is_not_applicable() {
        let subject = scheduled_subject("Maths", 10, 12);
        assert!(priority_for(&subject, date(2026, 8, 25)).is_none()); // Tuesday
        assert!(priority_for(&subject, monday()).is_some());

        let unscheduled = Subject::new("Workshop", 4, 5, 75);
        assert!(priority_for(&unscheduled, monday()).is_none());
    }

    #[test]
    fn event_on_the_day_with_safe_attendance_scores_exactly_event_weight() {
        let mut subject = scheduled_subject("Physics", 12, 14);
        subject
            .events
            .push(Event::new("Unit test", EventKind::Test, monday()));

        let priority = priority_for(&subject, monday()).unwrap();
        assert_eq!(priority.score, 100);
        assert_eq!(priority.level, PriorityLevel::High);
        assert_eq!(priority.message, "must attend");
        assert_eq!(priority.reasons.len(), 1);
        assert_eq!(priority.reasons[0], "test: Unit test");
    }

    #[test]
    fn multiple_events_add_the_weight_once_but_a_reason_each() {
        let mut subject = scheduled_subject("Physics", 12, 14);
        subject
            .events
            .push(Event::new("Lab report", EventKind::Assignment, monday()));
        subject
            .events
            .push(Event::new("Quiz", EventKind::Test, monday()));
        subject
            .events
            .push(Event::new("Later quiz", EventKind::Test, date(2026, 8, 31)));

        let priority = priority_for(&subject, monday()).unwrap();
        assert_eq!(priority.score, 100);
        assert_eq!(priority.reasons.len(), 2);
    }

    #[test]
    fn lagging_attendance_alone_is_medium() {
        let subject = scheduled_subject("Chemistry", 6, 10);
        let priority = priority_for(&subject, monday()).unwrap();
        assert_eq!(priority.score, 50);
        assert_eq!(priority.level, PriorityLevel::Medium);
        assert_eq!(priority.message, "should attend");
        assert_eq!(priority.reasons, vec!["attendance lagging (60.0%)"]);
    }

    #[test]
    fn event_and_lagging_attendance_stack() {
        let mut subject = scheduled_subject("Chemistry", 6, 10);
        subject
            .events
            .push(Event::new("Viva", EventKind::Exam, monday()));

        let priority = priority_for(&subject, monday()).unwrap();
        assert_eq!(priority.score, 150);
        assert_eq!(priority.level, PriorityLevel::High);
        // Event reasons come before the attendance reason.
        assert_eq!(priority.reasons[0], "exam: Viva");
        assert_eq!(priority.reasons[1], "attendance lagging (60.0%)");
    }

    #[test]
    fn safe_attendance_and_no_events_is_low() {
        let subject = scheduled_subject("History", 10, 12);
        let priority = priority_for(&subject, monday()).unwrap();
        assert_eq!(priority.score, 0);
        assert_eq!(priority.level, PriorityLevel::Low);
        assert_eq!(priority.message, "safe to skip");
        assert!(priority.reasons.is_empty());
    }

    #[test]
    fn zero_total_counts_as_lagging() {
        let subject = scheduled_subject("New elective", 0, 0);
        let priority = priority_for(&subject, monday()).unwrap();
        assert_eq!(priority.score, 50);
        assert_eq!(priority.reasons, vec!["attendance lagging (0.0%)"]);
    }

    #[test]
    fn agenda_sorts_by_score_descending_and_keeps_tie_order() {
        let safe = scheduled_subject("Safe", 10, 12);
        let lagging_a = scheduled_subject("Lagging A", 6, 10);
        let lagging_b = scheduled_subject("Lagging B", 5, 10);
        let mut urgent = scheduled_subject("Urgent", 6, 10);
        urgent
            .events
            .push(Event::new("Midsem", EventKind::Exam, monday()));
        let mut off_day = Subject::new("Off day", 2, 10, 75);
        off_day.schedule = vec![2]; // Tuesday only

        let subjects = vec![safe, lagging_a, lagging_b, urgent, off_day];
        let agenda = daily_agenda(&subjects, monday());

        assert_eq!(agenda.len(), 4);
        assert_eq!(agenda[0].subject_name, "Urgent");
        assert_eq!(agenda[1].subject_name, "Lagging A");
        assert_eq!(agenda[2].subject_name, "Lagging B");
        assert_eq!(agenda[3].subject_name, "Safe");
    }
}
