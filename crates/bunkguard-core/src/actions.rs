//! Per-day attendance action state machine.
//!
//! A subject commits at most one counted action per calendar day. The
//! marked/unmarked state is derived from `last_action.date == today`, so
//! a record from an earlier day lapses on its own -- there is no daily
//! reset step. Re-invoking an action on an already-marked day is a
//! silent no-op, not an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::subject::{ActionStatus, LastAction, Subject};

/// A user action against a subject for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Class held, student attended.
    Present,
    /// Class held, student missed it.
    Absent,
    /// Class did not happen; recorded for the day but counters untouched.
    Cancelled,
    /// Reverse whatever was recorded today.
    Undo,
}

/// What [`apply`] did to the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Counters updated (where applicable) and the action recorded.
    Marked(ActionStatus),
    /// Today's recorded action was reversed and cleared.
    Undone(ActionStatus),
    /// Nothing changed: already marked today, or undo with nothing to undo.
    Ignored,
}

/// Apply a daily action to a single subject.
///
/// `today` comes from the caller's wall clock; the machine itself never
/// reads the clock. Counter decrements on undo saturate at zero.
pub fn apply(subject: &mut Subject, action: Action, today: NaiveDate) -> ActionOutcome {
    let marked = subject.marked_on(today);
    match (action, marked) {
        (Action::Undo, Some(status)) => {
            match status {
                ActionStatus::Present => {
                    subject.total = subject.total.saturating_sub(1);
                    subject.attended = subject.attended.saturating_sub(1);
                }
                ActionStatus::Absent => {
                    subject.total = subject.total.saturating_sub(1);
                }
                ActionStatus::Cancelled => {}
            }
            subject.last_action = None;
            ActionOutcome::Undone(status)
        }
        (Action::Undo, None) => ActionOutcome::Ignored,
        (_, Some(_)) => ActionOutcome::Ignored,
        (Action::Present, None) => {
            subject.total += 1;
            subject.attended += 1;
            record(subject, ActionStatus::Present, today)
        }
        (Action::Absent, None) => {
            subject.total += 1;
            record(subject, ActionStatus::Absent, today)
        }
        (Action::Cancelled, None) => record(subject, ActionStatus::Cancelled, today),
    }
}

fn record(subject: &mut Subject, status: ActionStatus, today: NaiveDate) -> ActionOutcome {
    subject.last_action = Some(LastAction {
        date: today,
        status,
    });
    ActionOutcome::Marked(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 8, 24)
    }

    #[test]
    fn present_counts_in_both_numerator_and_denominator() {
        let mut subject = Subject::new("Maths", 10, 14, 75);
        let outcome = apply(&mut subject, Action::Present, today());
        assert_eq!(outcome, ActionOutcome::Marked(ActionStatus::Present));
        assert_eq!((subject.attended, subject.total), (11, 15));
        assert_eq!(subject.marked_on(today()), Some(ActionStatus::Present));
    }

    #[test]
    fn absent_counts_only_the_class_held() {
        let mut subject = Subject::new("Maths", 10, 14, 75);
        apply(&mut subject, Action::Absent, today());
        assert_eq!((subject.attended, subject.total), (10, 15));
        assert_eq!(subject.marked_on(today()), Some(ActionStatus::Absent));
    }

    #[test]
    fn cancelled_records_without_touching_counters() {
        let mut subject = Subject::new("Maths", 10, 14, 75);
        apply(&mut subject, Action::Cancelled, today());
        assert_eq!((subject.attended, subject.total), (10, 14));
        assert_eq!(subject.marked_on(today()), Some(ActionStatus::Cancelled));
    }

    #[test]
    fn second_action_on_the_same_day_is_ignored() {
        let mut subject = Subject::new("Maths", 10, 14, 75);
        apply(&mut subject, Action::Present, today());
        assert_eq!(
            apply(&mut subject, Action::Present, today()),
            ActionOutcome::Ignored
        );
        assert_eq!(
            apply(&mut subject, Action::Absent, today()),
            ActionOutcome::Ignored
        );
        // Counters changed exactly once.
        assert_eq!((subject.attended, subject.total), (11, 15));
        assert_eq!(subject.marked_on(today()), Some(ActionStatus::Present));
    }

    #[test]
    fn present_then_undo_is_identity_on_a_fresh_subject() {
        let mut subject = Subject::new("New elective", 0, 0, 75);
        apply(&mut subject, Action::Present, today());
        let outcome = apply(&mut subject, Action::Undo, today());
        assert_eq!(outcome, ActionOutcome::Undone(ActionStatus::Present));
        assert_eq!((subject.attended, subject.total), (0, 0));
        assert!(subject.last_action.is_none());
    }

    #[test]
    fn undo_reverses_each_status_correctly() {
        let mut subject = Subject::new("Maths", 10, 14, 75);
        apply(&mut subject, Action::Absent, today());
        apply(&mut subject, Action::Undo, today());
        assert_eq!((subject.attended, subject.total), (10, 14));

        apply(&mut subject, Action::Cancelled, today());
        apply(&mut subject, Action::Undo, today());
        assert_eq!((subject.attended, subject.total), (10, 14));
        assert!(subject.last_action.is_none());
    }

    #[test]
    fn undo_with_nothing_recorded_today_is_ignored() {
        let mut subject = Subject::new("Maths", 10, 14, 75);
        assert_eq!(
            apply(&mut subject, Action::Undo, today()),
            ActionOutcome::Ignored
        );

        // A record from yesterday is out of reach.
        apply(&mut subject, Action::Present, date(2026, 8, 23));
        assert_eq!(
            apply(&mut subject, Action::Undo, today()),
            ActionOutcome::Ignored
        );
        assert_eq!((subject.attended, subject.total), (11, 15));
    }

    #[test]
    fn marked_state_lapses_on_the_next_day() {
        let mut subject = Subject::new("Maths", 10, 14, 75);
        apply(&mut subject, Action::Present, date(2026, 8, 23));
        // Next day: the stale record no longer blocks a new action.
        let outcome = apply(&mut subject, Action::Absent, today());
        assert_eq!(outcome, ActionOutcome::Marked(ActionStatus::Absent));
        assert_eq!((subject.attended, subject.total), (11, 16));
    }

    #[test]
    fn undo_then_remark_is_allowed_within_the_day() {
        let mut subject = Subject::new("Maths", 10, 14, 75);
        apply(&mut subject, Action::Absent, today());
        apply(&mut subject, Action::Undo, today());
        let outcome = apply(&mut subject, Action::Present, today());
        assert_eq!(outcome, ActionOutcome::Marked(ActionStatus::Present));
        assert_eq!((subject.attended, subject.total), (11, 15));
    }
}
