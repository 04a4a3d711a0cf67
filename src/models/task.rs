//! Task model
//!
//! Tasks carry a completion flag, a three-level priority and a due date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dates::{self, date_serde};
use super::{apply_field, CreateOutcome, FieldRejection, Record, RecordId};
use crate::audit::EntityType;
use crate::error::AssistantResult;
use crate::interchange::CsvRow;
use crate::validation;

/// CSV token for a completed task; any other value reads as not done
pub const DONE_TOKEN: &str = "True";
pub const NOT_DONE_TOKEN: &str = "False";

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Priority::High, Priority::Medium, Priority::Low]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("unknown priority '{}'", s.trim())),
        }
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub done: bool,
    pub priority: Priority,
    #[serde(with = "date_serde")]
    pub due_date: NaiveDate,
}

/// Fields for a new task
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
}

/// Edited task fields
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub done: Option<bool>,
}

impl TaskPatch {
    /// Patch that only marks the task as completed
    pub fn mark_done() -> Self {
        Self {
            done: Some(true),
            ..Self::default()
        }
    }
}

impl Task {
    pub fn status_label(&self) -> &'static str {
        if self.done {
            "Done"
        } else {
            "Pending"
        }
    }
}

impl Record for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    const KIND: EntityType = EntityType::Task;
    const CSV_HEADERS: &'static [&'static str] =
        &["id", "title", "description", "done", "priority", "due_date"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn from_draft(id: RecordId, draft: TaskDraft) -> AssistantResult<CreateOutcome<Self>> {
        let title = validation::non_empty_text("title", &draft.title)?;
        let (priority, warning) = validation::priority_or_default(&draft.priority);
        let due_date = validation::parse_date(&draft.due_date)?;

        Ok(CreateOutcome {
            record: Self {
                id,
                title,
                description: draft.description,
                done: false,
                priority,
                due_date,
            },
            warnings: warning.into_iter().collect(),
        })
    }

    fn apply_patch(&mut self, patch: TaskPatch) -> Vec<FieldRejection> {
        let mut rejected = Vec::new();

        apply_field(&mut rejected, "title", patch.title, &mut self.title, |s| {
            validation::non_empty_text("title", s)
        });
        if let Some(description) = patch.description {
            self.description = description;
        }
        apply_field(
            &mut rejected,
            "priority",
            patch.priority,
            &mut self.priority,
            validation::parse_priority,
        );
        apply_field(
            &mut rejected,
            "due_date",
            patch.due_date,
            &mut self.due_date,
            validation::parse_date,
        );
        if let Some(done) = patch.done {
            self.done = done;
        }

        rejected
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            if self.done { DONE_TOKEN } else { NOT_DONE_TOKEN }.to_string(),
            self.priority.to_string(),
            dates::format_date(self.due_date),
        ]
    }

    fn from_csv_row(row: &CsvRow<'_>) -> AssistantResult<Self> {
        Ok(Self {
            id: row.id()?,
            title: row.text("title")?,
            description: row.text("description")?,
            done: row.text("done")? == DONE_TOKEN,
            priority: row.decode("priority", |s| s.parse::<Priority>())?,
            due_date: row.decode("due_date", |s| {
                validation::parse_date(s).map_err(|e| e.detail())
            })?,
        })
    }
}
