//! Audit trail for record mutations
//!
//! Every create, update, delete and CSV import is appended to a JSONL file
//! with before/after snapshots of the record.
//!
//! - `AuditEntry`: one logged operation with timestamp and record snapshots
//! - `AuditLogger`: appends entries to and reads them back from the log file
//! - `generate_diff`: a one-line summary of the fields an update changed

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
