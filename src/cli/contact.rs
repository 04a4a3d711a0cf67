//! Contact CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use super::common;
use crate::config::Settings;
use crate::display::{format_contact_details, format_contact_list};
use crate::error::AssistantResult;
use crate::models::{ContactDraft, ContactPatch, RecordId};
use crate::services::ContactService;
use crate::storage::Storage;

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Create a new contact
    Create {
        name: String,
        #[arg(short, long, default_value = "")]
        phone: String,
        #[arg(short, long, default_value = "")]
        email: String,
    },
    /// List all contacts
    List {
        /// Maximum number of contacts to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a contact
    Show { id: RecordId },
    /// Find contacts by name (any case) or phone
    Search { query: String },
    /// Edit a contact; omitted fields keep their value
    Edit {
        id: RecordId,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a contact
    Delete { id: RecordId },
    /// Append contacts from a CSV file
    Import { file: PathBuf },
    /// Write all contacts to a CSV file
    Export { file: PathBuf },
}

/// Handle a contact command
pub fn handle_contact_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ContactCommands,
) -> AssistantResult<()> {
    let store = &storage.contacts;

    match cmd {
        ContactCommands::Create { name, phone, email } => {
            let outcome = store.create(ContactDraft { name, phone, email })?;
            println!("Created contact #{}: {}", outcome.record.id, outcome.record.name);
        }

        ContactCommands::List { limit } => {
            let contacts = common::apply_limit(store.load()?, limit, settings);
            println!("{}", format_contact_list(&contacts));
        }

        ContactCommands::Show { id } => {
            print!("{}", format_contact_details(&store.get(id)?));
        }

        ContactCommands::Search { query } => {
            let contacts = ContactService::new(storage).search(&query)?;
            println!("{}", format_contact_list(&contacts));
        }

        ContactCommands::Edit {
            id,
            name,
            phone,
            email,
        } => {
            let outcome = store.update(id, ContactPatch { name, phone, email })?;
            println!("Updated contact #{}: {}", id, outcome.record.name);
            common::print_rejections(&outcome.rejected);
        }

        ContactCommands::Delete { id } => common::delete(store, id)?,
        ContactCommands::Import { file } => common::import(store, &file)?,
        ContactCommands::Export { file } => common::export(store, &file)?,
    }

    Ok(())
}
