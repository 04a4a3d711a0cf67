//! Note model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::dates::{self, timestamp_serde};
use super::{apply_field, CreateOutcome, FieldRejection, Record, RecordId};
use crate::audit::EntityType;
use crate::error::AssistantResult;
use crate::interchange::CsvRow;
use crate::validation;

/// A free-form note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    /// Creation time, refreshed on every edit
    #[serde(with = "timestamp_serde")]
    pub timestamp: NaiveDateTime,
}

/// Fields for a new note
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// Edited note fields
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Record for Note {
    type Draft = NoteDraft;
    type Patch = NotePatch;

    const KIND: EntityType = EntityType::Note;
    const CSV_HEADERS: &'static [&'static str] = &["id", "title", "content", "timestamp"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn from_draft(id: RecordId, draft: NoteDraft) -> AssistantResult<CreateOutcome<Self>> {
        let title = validation::non_empty_text("title", &draft.title)?;

        Ok(CreateOutcome::clean(Self {
            id,
            title,
            content: draft.content,
            timestamp: dates::now_timestamp(),
        }))
    }

    fn apply_patch(&mut self, patch: NotePatch) -> Vec<FieldRejection> {
        let mut rejected = Vec::new();

        apply_field(&mut rejected, "title", patch.title, &mut self.title, |s| {
            validation::non_empty_text("title", s)
        });
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.timestamp = dates::now_timestamp();

        rejected
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.content.clone(),
            dates::format_timestamp(self.timestamp),
        ]
    }

    fn from_csv_row(row: &CsvRow<'_>) -> AssistantResult<Self> {
        Ok(Self {
            id: row.id()?,
            title: row.text("title")?,
            content: row.text("content")?,
            timestamp: row.decode("timestamp", |s| {
                NaiveDateTime::parse_from_str(s.trim(), dates::TIMESTAMP_FORMAT)
                    .map_err(|e| format!("'{}' is not a DD-MM-YYYY HH:MM:SS timestamp ({})", s, e))
            })?,
        })
    }
}
