//! Note display formatting

use super::{column_width, truncate};
use crate::models::dates::format_timestamp;
use crate::models::Note;

const TITLE_MAX: usize = 40;

/// Format notes as a table of id, title and timestamp
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found.".to_string();
    }

    let titles: Vec<String> = notes.iter().map(|n| truncate(&n.title, TITLE_MAX)).collect();
    let title_width = column_width("Title", titles.iter().map(String::as_str));

    let mut output = format!(
        "{:>4}  {:<title_width$}  {}\n",
        "ID",
        "Title",
        "Updated",
        title_width = title_width
    );
    output.push_str(&format!(
        "{:->4}  {:-<title_width$}  {:-<19}\n",
        "",
        "",
        "",
        title_width = title_width
    ));

    for (note, title) in notes.iter().zip(&titles) {
        output.push_str(&format!(
            "{:>4}  {:<title_width$}  {}\n",
            note.id,
            title,
            format_timestamp(note.timestamp),
            title_width = title_width
        ));
    }

    output
}

/// Format a single note with its full content
pub fn format_note_details(note: &Note) -> String {
    let mut output = format!("Note #{}: {}\n", note.id, note.title);
    output.push_str(&format!("  Updated: {}\n", format_timestamp(note.timestamp)));
    output.push('\n');
    output.push_str(&note.content);
    output.push('\n');
    output
}
