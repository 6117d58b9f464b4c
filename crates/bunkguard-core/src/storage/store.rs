//! JSON document store for the subject list.
//!
//! The whole list is persisted as one document under a fixed record
//! name and replaced on every mutation, so callers never observe a
//! partially written list. The store owns no decision logic; the
//! engines in `attendance`, `priority`, and `actions` operate on the
//! records it hands out.

use std::fs;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::subject::{Event, Subject};

use super::data_dir;

/// Fixed record name the subject list is stored under.
pub const SUBJECTS_RECORD: &str = "subjects.json";

/// File-backed store for the authoritative subject list.
pub struct SubjectStore {
    path: PathBuf,
    subjects: Vec<Subject>,
}

impl SubjectStore {
    /// Open the store at `~/.config/bunkguard/subjects.json`.
    ///
    /// A missing document yields an empty list.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created or the
    /// document exists but cannot be parsed.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir()?.join(SUBJECTS_RECORD);
        Self::open_at(path)
    }

    /// Open the store at an explicit path (used by tests).
    ///
    /// # Errors
    /// Returns an error if the document exists but cannot be read or
    /// parsed. Only a missing document yields the empty list; any other
    /// failure must surface rather than let a later save overwrite the
    /// user's data.
    pub fn open_at(path: PathBuf) -> Result<Self, StoreError> {
        let subjects = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| StoreError::LoadFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(StoreError::LoadFailed {
                    path,
                    message: e.to_string(),
                })
            }
        };
        Ok(Self { path, subjects })
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn get(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Find a subject by id, or by exact name when no id matches.
    pub fn resolve(&self, key: &str) -> Option<&Subject> {
        self.get(key)
            .or_else(|| self.subjects.iter().find(|s| s.name == key))
    }

    /// Append a subject and persist the list.
    ///
    /// # Errors
    /// Returns an error if the document cannot be written.
    pub fn add_subject(&mut self, subject: Subject) -> Result<(), StoreError> {
        self.subjects.push(subject);
        self.save()
    }

    /// Remove a subject (and with it all its events) and persist.
    ///
    /// # Errors
    /// Returns `SubjectNotFound` if no subject has the given id.
    pub fn remove_subject(&mut self, id: &str) -> Result<Subject, StoreError> {
        let index = self
            .subjects
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::SubjectNotFound(id.to_string()))?;
        let removed = self.subjects.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Mutate one subject in place and persist the list.
    ///
    /// The closure's return value is handed back, so callers can thread
    /// an engine outcome through the update.
    ///
    /// # Errors
    /// Returns `SubjectNotFound` if no subject has the given id.
    pub fn update<T>(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut Subject) -> T,
    ) -> Result<T, StoreError> {
        let subject = self
            .subjects
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::SubjectNotFound(id.to_string()))?;
        let result = f(subject);
        self.save()?;
        Ok(result)
    }

    /// Attach an event to a subject and persist.
    ///
    /// # Errors
    /// Returns `SubjectNotFound` if no subject has the given id.
    pub fn add_event(&mut self, subject_id: &str, event: Event) -> Result<(), StoreError> {
        self.update(subject_id, |subject| subject.events.push(event))
    }

    /// Flip an event's completed flag and persist. Returns the new flag.
    ///
    /// # Errors
    /// Returns `SubjectNotFound` or `EventNotFound`.
    pub fn toggle_event(&mut self, subject_id: &str, event_id: &str) -> Result<bool, StoreError> {
        let subject = self
            .subjects
            .iter_mut()
            .find(|s| s.id == subject_id)
            .ok_or_else(|| StoreError::SubjectNotFound(subject_id.to_string()))?;
        let event = subject
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| StoreError::EventNotFound(event_id.to_string()))?;
        event.completed = !event.completed;
        let completed = event.completed;
        self.save()?;
        Ok(completed)
    }

    fn save(&self) -> Result<(), StoreError> {
        let content =
            serde_json::to_string_pretty(&self.subjects).map_err(|e| StoreError::SaveFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        fs::write(&self.path, content).map_err(|e| StoreError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::EventKind;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, SubjectStore) {
        let dir = TempDir::new().unwrap();
        let store = SubjectStore::open_at(dir.path().join(SUBJECTS_RECORD)).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_document_yields_empty_list() {
        let (_dir, store) = open_temp();
        assert!(store.subjects().is_empty());
    }

    #[test]
    fn unparseable_document_is_an_error_not_an_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SUBJECTS_RECORD);
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            SubjectStore::open_at(path),
            Err(StoreError::LoadFailed { .. })
        ));
    }

    #[test]
    fn unreadable_document_is_never_silently_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SUBJECTS_RECORD);
        // Invalid UTF-8: the document exists but cannot be read as text.
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            SubjectStore::open_at(path.clone()),
            Err(StoreError::LoadFailed { .. })
        ));
        // The original bytes are still on disk.
        assert_eq!(std::fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00]);
    }

    #[test]
    fn add_persists_and_reloads() {
        let (dir, mut store) = open_temp();
        let subject = Subject::new("Physics", 10, 12, 75);
        let id = subject.id.clone();
        store.add_subject(subject).unwrap();

        let reloaded = SubjectStore::open_at(dir.path().join(SUBJECTS_RECORD)).unwrap();
        assert_eq!(reloaded.subjects().len(), 1);
        assert_eq!(reloaded.get(&id).unwrap().name, "Physics");
    }

    #[test]
    fn remove_drops_the_subject_and_its_events() {
        let (dir, mut store) = open_temp();
        let mut subject = Subject::new("Physics", 10, 12, 75);
        subject.events.push(Event::new(
            "Lab report",
            EventKind::Assignment,
            NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
        ));
        let id = subject.id.clone();
        store.add_subject(subject).unwrap();
        store.add_subject(Subject::new("Maths", 8, 10, 75)).unwrap();

        store.remove_subject(&id).unwrap();
        assert!(store.get(&id).is_none());

        let reloaded = SubjectStore::open_at(dir.path().join(SUBJECTS_RECORD)).unwrap();
        assert_eq!(reloaded.subjects().len(), 1);
        assert_eq!(reloaded.subjects()[0].name, "Maths");
    }

    #[test]
    fn update_threads_the_closure_result_through() {
        let (_dir, mut store) = open_temp();
        let subject = Subject::new("Physics", 10, 12, 75);
        let id = subject.id.clone();
        store.add_subject(subject).unwrap();

        let new_total = store
            .update(&id, |s| {
                s.total += 1;
                s.total
            })
            .unwrap();
        assert_eq!(new_total, 13);
        assert_eq!(store.get(&id).unwrap().total, 13);

        assert!(matches!(
            store.update("missing", |_| ()),
            Err(StoreError::SubjectNotFound(_))
        ));
    }

    #[test]
    fn toggle_event_flips_completed() {
        let (_dir, mut store) = open_temp();
        let subject = Subject::new("Physics", 10, 12, 75);
        let subject_id = subject.id.clone();
        store.add_subject(subject).unwrap();

        let event = Event::new(
            "Quiz",
            EventKind::Test,
            NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
        );
        let event_id = event.id.clone();
        store.add_event(&subject_id, event).unwrap();

        assert!(store.toggle_event(&subject_id, &event_id).unwrap());
        assert!(!store.toggle_event(&subject_id, &event_id).unwrap());
        assert!(matches!(
            store.toggle_event(&subject_id, "missing"),
            Err(StoreError::EventNotFound(_))
        ));
    }

    #[test]
    fn resolve_matches_id_then_exact_name() {
        let (_dir, mut store) = open_temp();
        let subject = Subject::new("Physics", 10, 12, 75);
        let id = subject.id.clone();
        store.add_subject(subject).unwrap();

        assert_eq!(store.resolve(&id).unwrap().name, "Physics");
        assert_eq!(store.resolve("Physics").unwrap().id, id);
        assert!(store.resolve("Astronomy").is_none());
    }
}
