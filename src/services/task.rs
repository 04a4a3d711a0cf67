//! Task service
//!
//! Marking tasks done and filtering by status, priority or due date.

use chrono::NaiveDate;

use crate::error::AssistantResult;
use crate::models::{Priority, RecordId, Task, TaskPatch};
use crate::storage::Storage;

/// A single criterion for narrowing the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    /// Tasks whose done flag equals the value
    Status { done: bool },
    Priority(Priority),
    /// Tasks due on exactly this date
    DueDate(NaiveDate),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match *self {
            TaskFilter::Status { done } => task.done == done,
            TaskFilter::Priority(priority) => task.priority == priority,
            TaskFilter::DueDate(date) => task.due_date == date,
        }
    }
}

/// Service for task management
pub struct TaskService<'a> {
    storage: &'a Storage,
}

impl<'a> TaskService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the done flag on a task
    ///
    /// Marking an already completed task is not an error.
    pub fn mark_done(&self, id: RecordId) -> AssistantResult<Task> {
        Ok(self.storage.tasks.update(id, TaskPatch::mark_done())?.record)
    }

    /// Tasks matching `filter`, in store order
    pub fn filter(&self, filter: TaskFilter) -> AssistantResult<Vec<Task>> {
        self.storage.tasks.filter(|task| filter.matches(task))
    }
}
