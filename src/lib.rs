//! Personal assistant - notes, tasks, contacts and finances from the terminal
//!
//! Each record kind lives in its own JSON file and is managed through the same
//! generic store, with CSV import/export alongside and an audit trail of
//! every change.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: the crate error type
//! - `models`: the four record kinds and the `Record` trait
//! - `validation`: per-field acceptance rules
//! - `storage`: generic JSON-backed `Store` and the `Storage` coordinator
//! - `interchange`: CSV import and export
//! - `audit`: append-only log of mutations
//! - `services`: task, contact and finance operations beyond CRUD
//! - `calc`: closed-grammar arithmetic evaluator
//! - `display`: terminal formatting
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use assistant::config::{AssistantPaths, Settings};
//! use assistant::models::NoteDraft;
//! use assistant::storage::Storage;
//!
//! let paths = AssistantPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//!
//! let created = storage.notes.create(NoteDraft {
//!     title: "Groceries".into(),
//!     content: "milk, eggs".into(),
//! })?;
//! ```

pub mod audit;
pub mod calc;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod interchange;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{AssistantError, AssistantResult};
