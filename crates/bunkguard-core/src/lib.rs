//! # Bunkguard Core Library
//!
//! This library provides the core business logic for Bunkguard, a
//! per-subject class attendance tracker built around a minimum
//! attendance percentage rule. It implements a CLI-first philosophy
//! where all operations are available via a standalone CLI binary; any
//! GUI would be a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Attendance projection**: pure math from attended/total/target
//!   counts to a safety verdict, needed/bunkable counts, and a risk tier
//! - **Daily priority**: ranks subjects for a given day from schedule
//!   membership, same-day graded events, and attendance shortfall
//! - **Action state machine**: applies one present/absent/cancelled
//!   action per subject per calendar day, with same-day undo
//! - **Storage**: JSON subject document and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`project`]: attendance projection function
//! - [`priority_for`] / [`daily_agenda`]: the daily priority engine
//! - [`apply`]: the per-day action state machine
//! - [`SubjectStore`]: subject list persistence
//! - [`Config`]: application configuration management

pub mod actions;
pub mod attendance;
pub mod error;
pub mod priority;
pub mod storage;
pub mod subject;
pub mod summary;

pub use actions::{apply, Action, ActionOutcome};
pub use attendance::{project, AttendanceReport, ClassesNeeded, RiskLevel, SafetyStatus};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use priority::{daily_agenda, priority_for, DailyPriority, PriorityLevel};
pub use storage::{Config, SubjectStore};
pub use subject::{ActionStatus, Event, EventKind, LastAction, Subject, DAYS};
pub use summary::{overview, pending_events, DueUrgency, PendingEvent, SubjectOverview};
