//! Generic record store backed by one JSON file
//!
//! Every public operation re-reads the backing file, so two stores pointing
//! at the same path always agree and nothing is cached between calls.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::error::{AssistantError, AssistantResult};
use crate::interchange::{export_to_path, import_from_path, ExportOutcome};
use crate::models::{CreateOutcome, Record, RecordId, UpdateOutcome};

use super::file_io::{read_json, write_json_atomic};

/// Persistence and CRUD for one record kind
#[derive(Debug, Clone)]
pub struct Store<R: Record> {
    path: PathBuf,
    audit: Option<AuditLogger>,
    _kind: PhantomData<R>,
}

impl<R: Record> Store<R> {
    /// Create a store without an audit trail
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            audit: None,
            _kind: PhantomData,
        }
    }

    /// Create a store that appends every mutation to `logger`
    pub fn with_audit(path: PathBuf, logger: AuditLogger) -> Self {
        Self {
            audit: Some(logger),
            ..Self::new(path)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in file order; an absent file is an empty store
    pub fn load(&self) -> AssistantResult<Vec<R>> {
        read_json(&self.path)
    }

    /// Replace the backing file with `records`
    pub fn save(&self, records: &[R]) -> AssistantResult<()> {
        write_json_atomic(&self.path, &records)
    }

    /// One past the highest id in use, or 1 for an empty set
    ///
    /// Imported ids are trusted, so the highest one may already be
    /// `RecordId::MAX`; that store cannot take another record.
    pub fn next_id(records: &[R]) -> AssistantResult<RecordId> {
        match records.iter().map(R::id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                AssistantError::Validation(format!(
                    "{} id space exhausted (highest id is {})",
                    R::KIND.label(),
                    max
                ))
            }),
        }
    }

    /// Validate a draft, append it under a fresh id and save
    pub fn create(&self, draft: R::Draft) -> AssistantResult<CreateOutcome<R>> {
        let mut records = self.load()?;
        let outcome = R::from_draft(Self::next_id(&records)?, draft)?;

        records.push(outcome.record.clone());
        self.save(&records)?;

        let record = &outcome.record;
        self.audit(|| {
            vec![AuditEntry::create(
                R::KIND,
                record.id(),
                Some(record.display_name()),
                record,
            )]
        })?;

        Ok(outcome)
    }

    /// First record with this id, if any
    pub fn find(&self, id: RecordId) -> AssistantResult<Option<R>> {
        Ok(self.load()?.into_iter().find(|r| r.id() == id))
    }

    /// Like [`find`](Self::find), but a missing record is an error
    pub fn get(&self, id: RecordId) -> AssistantResult<R> {
        self.find(id)?
            .ok_or_else(|| AssistantError::not_found(R::KIND.label(), id))
    }

    /// Apply every valid field of `patch` to the record with this id
    ///
    /// Nothing is written when the id is unknown.
    pub fn update(&self, id: RecordId, patch: R::Patch) -> AssistantResult<UpdateOutcome<R>> {
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| AssistantError::not_found(R::KIND.label(), id))?;

        let before = record.clone();
        let rejected = record.apply_patch(patch);
        let after = record.clone();

        self.save(&records)?;

        self.audit(|| {
            let diff = match (serde_json::to_value(&before), serde_json::to_value(&after)) {
                (Ok(b), Ok(a)) => generate_diff(&b, &a),
                _ => None,
            };
            vec![AuditEntry::update(
                R::KIND,
                id,
                Some(after.display_name()),
                &before,
                &after,
                diff,
            )]
        })?;

        Ok(UpdateOutcome {
            record: after,
            rejected,
        })
    }

    /// Remove every record with this id and save
    ///
    /// Returns whether anything was removed; an unknown id is not an error.
    pub fn delete(&self, id: RecordId) -> AssistantResult<bool> {
        let records = self.load()?;
        let (removed, kept): (Vec<R>, Vec<R>) = records.into_iter().partition(|r| r.id() == id);

        self.save(&kept)?;

        self.audit(|| {
            removed
                .iter()
                .map(|r| AuditEntry::delete(R::KIND, id, Some(r.display_name()), r))
                .collect()
        })?;

        Ok(!removed.is_empty())
    }

    /// Records matching `predicate`, in file order
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> AssistantResult<Vec<R>> {
        Ok(self.load()?.into_iter().filter(|r| predicate(r)).collect())
    }

    /// Append every row of a CSV file to the store
    ///
    /// Ids are taken from the file as-is. If any row fails to decode the
    /// store is left untouched.
    pub fn import_csv(&self, source: &Path) -> AssistantResult<usize> {
        let imported: Vec<R> = import_from_path(source)?;
        let mut records = self.load()?;
        records.extend(imported.iter().cloned());
        self.save(&records)?;

        self.audit(|| {
            imported
                .iter()
                .map(|r| AuditEntry::import(R::KIND, r.id(), Some(r.display_name()), r))
                .collect()
        })?;

        Ok(imported.len())
    }

    /// Write the whole store to a CSV file
    pub fn export_csv(&self, destination: &Path) -> AssistantResult<ExportOutcome> {
        export_to_path(destination, &self.load()?)
    }

    fn audit(&self, entries: impl FnOnce() -> Vec<AuditEntry>) -> AssistantResult<()> {
        match &self.audit {
            Some(logger) => logger.log_batch(&entries()),
            None => Ok(()),
        }
    }
}
