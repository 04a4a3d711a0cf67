//! CSV interchange for record stores
//!
//! Converts between a store's records and a flat header + rows CSV file with
//! one column per field, in the column order each record kind declares.
//!
//! - `import`: header-driven decoding; all-or-nothing per file
//! - `export`: header followed by one row per record, in store order

pub mod export;
pub mod import;

pub use export::{export_to, export_to_path, ExportOutcome};
pub use import::{import_from, import_from_path};

use std::collections::HashMap;

use csv::StringRecord;

use crate::error::{AssistantError, AssistantResult};
use crate::models::RecordId;

/// One data row of an import, with columns addressed by header name
pub struct CsvRow<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a StringRecord,
    line: u64,
}

impl<'a> CsvRow<'a> {
    pub(crate) fn new(
        columns: &'a HashMap<String, usize>,
        record: &'a StringRecord,
        line: u64,
    ) -> Self {
        Self {
            columns,
            record,
            line,
        }
    }

    /// Line of the source file this row came from (header is line 1)
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Raw cell value
    pub fn get(&self, column: &str) -> AssistantResult<&'a str> {
        self.columns
            .get(column)
            .and_then(|&idx| self.record.get(idx))
            .ok_or_else(|| self.error(column, "value is missing"))
    }

    /// Cell value as owned text, untouched
    pub fn text(&self, column: &str) -> AssistantResult<String> {
        self.get(column).map(str::to_string)
    }

    /// The integer `id` column
    pub fn id(&self) -> AssistantResult<RecordId> {
        self.decode("id", |s| {
            s.trim()
                .parse::<RecordId>()
                .map_err(|_| format!("'{}' is not a valid id", s))
        })
    }

    /// Coerce a cell, wrapping any failure with its row and column
    pub fn decode<T>(
        &self,
        column: &str,
        coerce: impl FnOnce(&str) -> Result<T, String>,
    ) -> AssistantResult<T> {
        let raw = self.get(column)?;
        coerce(raw).map_err(|reason| self.error(column, &reason))
    }

    fn error(&self, column: &str, reason: &str) -> AssistantError {
        AssistantError::Import(format!(
            "line {}, column '{}': {}",
            self.line, column, reason
        ))
    }
}
