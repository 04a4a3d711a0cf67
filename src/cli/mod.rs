//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the stores and services.

pub mod audit;
pub mod calc;
mod common;
pub mod contact;
pub mod finance;
pub mod note;
pub mod task;

pub use audit::handle_audit_command;
pub use calc::handle_calc_command;
pub use contact::{handle_contact_command, ContactCommands};
pub use finance::{handle_finance_command, FinanceCommands};
pub use note::{handle_note_command, NoteCommands};
pub use task::{handle_task_command, TaskCommands};
