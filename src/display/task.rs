//! Task display formatting

use super::{column_width, truncate};
use crate::models::dates::format_date;
use crate::models::Task;

const TITLE_MAX: usize = 40;

/// Format tasks as a table with status, priority and due date
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let titles: Vec<String> = tasks.iter().map(|t| truncate(&t.title, TITLE_MAX)).collect();
    let title_width = column_width("Title", titles.iter().map(String::as_str));

    let mut output = format!(
        "{:>4}  {:<title_width$}  {:<7}  {:<8}  {}\n",
        "ID",
        "Title",
        "Status",
        "Priority",
        "Due",
        title_width = title_width
    );
    output.push_str(&format!(
        "{:->4}  {:-<title_width$}  {:-<7}  {:-<8}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width
    ));

    for (task, title) in tasks.iter().zip(&titles) {
        output.push_str(&format!(
            "{:>4}  {:<title_width$}  {:<7}  {:<8}  {}\n",
            task.id,
            title,
            task.status_label(),
            task.priority.to_string(),
            format_date(task.due_date),
            title_width = title_width
        ));
    }

    output
}

pub fn format_task_details(task: &Task) -> String {
    let mut output = format!("Task #{}: {}\n", task.id, task.title);
    output.push_str(&format!("  Status:      {}\n", task.status_label()));
    output.push_str(&format!("  Priority:    {}\n", task.priority));
    output.push_str(&format!("  Due:         {}\n", format_date(task.due_date)));
    if !task.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", task.description));
    }
    output
}
