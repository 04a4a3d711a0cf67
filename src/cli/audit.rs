//! Audit log command

use crate::error::AssistantResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> AssistantResult<()> {
    let log = storage.audit_log();
    let entries = log.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries in {}", log.path().display());
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
