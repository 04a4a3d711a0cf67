//! Storage layer for the personal assistant
//!
//! One pretty-printed JSON array per record kind, written atomically, with
//! an optional audit trail shared by every store.

pub mod file_io;
pub mod store;

pub use file_io::{json_file_valid, read_json, write_json_atomic};
pub use store::Store;

use std::path::PathBuf;

use crate::audit::AuditLogger;
use crate::config::{AssistantPaths, Settings};
use crate::error::AssistantError;
use crate::models::{Contact, FinanceRecord, Note, Task};

/// State of one backing file, as reported by `assistant config`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Missing,
    Valid,
    Corrupt,
}

/// Main storage coordinator that provides access to every store
pub struct Storage {
    paths: AssistantPaths,
    pub notes: Store<Note>,
    pub tasks: Store<Task>,
    pub contacts: Store<Contact>,
    pub finance: Store<FinanceRecord>,
    audit: AuditLogger,
}

impl Storage {
    /// Create the stores under `paths`, auditing them unless disabled
    pub fn new(paths: AssistantPaths, settings: &Settings) -> Result<Self, AssistantError> {
        paths.ensure_directories()?;

        let audit = AuditLogger::new(paths.audit_log());
        let logger = settings.audit_enabled.then(|| audit.clone());

        Ok(Self {
            notes: open_store(paths.notes_file(), &logger),
            tasks: open_store(paths.tasks_file(), &logger),
            contacts: open_store(paths.contacts_file(), &logger),
            finance: open_store(paths.finance_file(), &logger),
            audit,
            paths,
        })
    }

    pub fn paths(&self) -> &AssistantPaths {
        &self.paths
    }

    /// The audit log, readable even when new entries are disabled
    pub fn audit_log(&self) -> &AuditLogger {
        &self.audit
    }

    /// Every backing file with its current state
    pub fn file_status(&self) -> Vec<(&'static str, PathBuf, FileStatus)> {
        [
            ("notes", self.paths.notes_file()),
            ("tasks", self.paths.tasks_file()),
            ("contacts", self.paths.contacts_file()),
            ("finance", self.paths.finance_file()),
        ]
        .into_iter()
        .map(|(name, path)| {
            let status = if !path.exists() {
                FileStatus::Missing
            } else if json_file_valid(&path) {
                FileStatus::Valid
            } else {
                FileStatus::Corrupt
            };
            (name, path, status)
        })
        .collect()
    }
}

fn open_store<R: crate::models::Record>(path: PathBuf, logger: &Option<AuditLogger>) -> Store<R> {
    match logger {
        Some(logger) => Store::with_audit(path, logger.clone()),
        None => Store::new(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteDraft;
    use tempfile::TempDir;

    fn draft() -> NoteDraft {
        NoteDraft {
            title: "hello".into(),
            content: "".into(),
        }
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage
            .file_status()
            .iter()
            .all(|(_, _, status)| *status == FileStatus::Missing));
    }

    #[test]
    fn test_audit_follows_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());

        let disabled = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let storage = Storage::new(paths.clone(), &disabled).unwrap();
        storage.notes.create(draft()).unwrap();
        assert!(!storage.audit_log().exists());

        let storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.notes.create(draft()).unwrap();
        assert_eq!(storage.audit_log().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_file_status_detects_corruption() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        storage.notes.create(draft()).unwrap();
        std::fs::write(storage.paths().tasks_file(), "garbage").unwrap();

        let status = storage.file_status();
        assert_eq!(status[0].2, FileStatus::Valid);
        assert_eq!(status[1].2, FileStatus::Corrupt);
        assert_eq!(status[2].2, FileStatus::Missing);
    }
}
