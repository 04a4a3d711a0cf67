//! Note CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use super::common;
use crate::config::Settings;
use crate::display::{format_note_details, format_note_list};
use crate::error::AssistantResult;
use crate::models::{NoteDraft, NotePatch, RecordId};
use crate::storage::Storage;

/// Note subcommands
#[derive(Subcommand)]
pub enum NoteCommands {
    /// Create a new note
    Create {
        /// Note title
        title: String,
        /// Note body
        #[arg(short, long, default_value = "")]
        content: String,
    },
    /// List all notes
    List {
        /// Maximum number of notes to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a note with its content
    Show { id: RecordId },
    /// Edit a note; omitted fields keep their value
    Edit {
        id: RecordId,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete { id: RecordId },
    /// Append notes from a CSV file
    Import { file: PathBuf },
    /// Write all notes to a CSV file
    Export { file: PathBuf },
}

/// Handle a note command
pub fn handle_note_command(
    storage: &Storage,
    settings: &Settings,
    cmd: NoteCommands,
) -> AssistantResult<()> {
    let store = &storage.notes;

    match cmd {
        NoteCommands::Create { title, content } => {
            let outcome = store.create(NoteDraft { title, content })?;
            println!("Created note #{}: {}", outcome.record.id, outcome.record.title);
        }

        NoteCommands::List { limit } => {
            let notes = common::apply_limit(store.load()?, limit, settings);
            println!("{}", format_note_list(&notes));
        }

        NoteCommands::Show { id } => {
            print!("{}", format_note_details(&store.get(id)?));
        }

        NoteCommands::Edit { id, title, content } => {
            let outcome = store.update(id, NotePatch { title, content })?;
            println!("Updated note #{}: {}", id, outcome.record.title);
            common::print_rejections(&outcome.rejected);
        }

        NoteCommands::Delete { id } => common::delete(store, id)?,
        NoteCommands::Import { file } => common::import(store, &file)?,
        NoteCommands::Export { file } => common::export(store, &file)?,
    }

    Ok(())
}
