//! Core data models for the personal assistant
//!
//! This module contains the four record kinds (notes, tasks, contacts and
//! finance records) and the [`Record`] trait that lets a single generic
//! [`Store`](crate::storage::Store) persist any of them.

pub mod contact;
pub mod dates;
pub mod finance;
pub mod note;
pub mod task;

pub use contact::{Contact, ContactDraft, ContactPatch};
pub use finance::{FinanceDraft, FinancePatch, FinanceRecord};
pub use note::{Note, NoteDraft, NotePatch};
pub use task::{Priority, Task, TaskDraft, TaskPatch};

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::audit::EntityType;
use crate::error::{AssistantError, AssistantResult};
use crate::interchange::CsvRow;

/// Identifier assigned by a store, never by the caller
pub type RecordId = u64;

/// A field value that was not accepted as given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRejection {
    pub field: &'static str,
    pub reason: String,
}

impl FieldRejection {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// Build a rejection from a validator error, keeping only its reason
    pub fn from_error(field: &'static str, err: &AssistantError) -> Self {
        Self::new(field, err.detail())
    }
}

impl fmt::Display for FieldRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Result of creating a record
///
/// `warnings` lists inputs that were replaced by a default instead of
/// rejecting the whole operation.
#[derive(Debug, Clone)]
pub struct CreateOutcome<R> {
    pub record: R,
    pub warnings: Vec<FieldRejection>,
}

impl<R> CreateOutcome<R> {
    pub fn clean(record: R) -> Self {
        Self {
            record,
            warnings: Vec::new(),
        }
    }
}

/// Result of a best-effort partial update
///
/// Every field in `rejected` kept its previous value; all other supplied
/// fields were applied.
#[derive(Debug, Clone)]
pub struct UpdateOutcome<R> {
    pub record: R,
    pub rejected: Vec<FieldRejection>,
}

/// Shape shared by every persisted record kind
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Raw field strings collected for a create
    type Draft;
    /// Optional raw field strings for an edit; `None` keeps the current value
    type Patch;

    /// Entity kind, used for audit entries and error messages
    const KIND: EntityType;

    /// CSV header, in column order
    const CSV_HEADERS: &'static [&'static str];

    fn id(&self) -> RecordId;

    /// Short human-readable label (title, name, ...)
    fn display_name(&self) -> String;

    /// Validate a draft and build the record under `id`
    fn from_draft(id: RecordId, draft: Self::Draft) -> AssistantResult<CreateOutcome<Self>>;

    /// Apply every individually valid field of `patch`, reporting the rest
    fn apply_patch(&mut self, patch: Self::Patch) -> Vec<FieldRejection>;

    /// Encode as CSV cells, in `CSV_HEADERS` order
    fn to_csv_row(&self) -> Vec<String>;

    /// Decode one CSV data row
    fn from_csv_row(row: &CsvRow<'_>) -> AssistantResult<Self>;
}

/// Validate an optional edited value and store it, or record why not
pub(crate) fn apply_field<T>(
    rejected: &mut Vec<FieldRejection>,
    field: &'static str,
    input: Option<String>,
    slot: &mut T,
    parse: impl FnOnce(&str) -> AssistantResult<T>,
) {
    let Some(raw) = input else {
        return;
    };

    match parse(&raw) {
        Ok(value) => *slot = value,
        Err(e) => rejected.push(FieldRejection::from_error(field, &e)),
    }
}
