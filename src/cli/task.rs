//! Task CLI commands

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use super::common;
use crate::config::Settings;
use crate::display::{format_task_details, format_task_list};
use crate::error::AssistantResult;
use crate::models::{RecordId, TaskDraft, TaskPatch};
use crate::services::{TaskFilter, TaskService};
use crate::storage::Storage;
use crate::validation::{parse_date, parse_priority};

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a new task
    Create {
        /// Task title
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// High, Medium or Low; anything else falls back to Medium
        #[arg(short, long, default_value = "Medium")]
        priority: String,
        /// Due date (DD-MM-YYYY)
        #[arg(long)]
        due: String,
    },
    /// List all tasks
    List {
        /// Maximum number of tasks to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a task
    Show { id: RecordId },
    /// Mark a task as done
    Done { id: RecordId },
    /// Edit a task; omitted fields keep their value
    Edit {
        id: RecordId,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        priority: Option<String>,
        /// Due date (DD-MM-YYYY)
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete a task
    Delete { id: RecordId },
    /// Show tasks matching one criterion
    Filter(FilterArgs),
    /// Append tasks from a CSV file
    Import { file: PathBuf },
    /// Write all tasks to a CSV file
    Export { file: PathBuf },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct FilterArgs {
    /// Completion status
    #[arg(short, long, value_enum)]
    status: Option<StatusArg>,
    /// Exact priority
    #[arg(short, long)]
    priority: Option<String>,
    /// Exact due date (DD-MM-YYYY)
    #[arg(long)]
    due: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Done,
    Pending,
}

impl FilterArgs {
    fn to_filter(&self) -> AssistantResult<TaskFilter> {
        if let Some(status) = self.status {
            return Ok(TaskFilter::Status {
                done: matches!(status, StatusArg::Done),
            });
        }
        if let Some(priority) = &self.priority {
            return Ok(TaskFilter::Priority(parse_priority(priority)?));
        }
        let due = self.due.as_deref().unwrap_or_default();
        Ok(TaskFilter::DueDate(parse_date(due)?))
    }
}

/// Handle a task command
pub fn handle_task_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TaskCommands,
) -> AssistantResult<()> {
    let store = &storage.tasks;
    let service = TaskService::new(storage);

    match cmd {
        TaskCommands::Create {
            title,
            description,
            priority,
            due,
        } => {
            let outcome = store.create(TaskDraft {
                title,
                description,
                priority,
                due_date: due,
            })?;
            println!("Created task #{}: {}", outcome.record.id, outcome.record.title);
            common::print_warnings(&outcome.warnings);
        }

        TaskCommands::List { limit } => {
            let tasks = common::apply_limit(store.load()?, limit, settings);
            println!("{}", format_task_list(&tasks));
        }

        TaskCommands::Show { id } => {
            print!("{}", format_task_details(&store.get(id)?));
        }

        TaskCommands::Done { id } => {
            let task = service.mark_done(id)?;
            println!("Task #{} marked as done: {}", task.id, task.title);
        }

        TaskCommands::Edit {
            id,
            title,
            description,
            priority,
            due,
        } => {
            let outcome = store.update(
                id,
                TaskPatch {
                    title,
                    description,
                    priority,
                    due_date: due,
                    done: None,
                },
            )?;
            println!("Updated task #{}: {}", id, outcome.record.title);
            common::print_rejections(&outcome.rejected);
        }

        TaskCommands::Delete { id } => common::delete(store, id)?,

        TaskCommands::Filter(args) => {
            let tasks = service.filter(args.to_filter()?)?;
            println!("{}", format_task_list(&tasks));
        }

        TaskCommands::Import { file } => common::import(store, &file)?,
        TaskCommands::Export { file } => common::export(store, &file)?,
    }

    Ok(())
}
