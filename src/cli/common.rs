//! Pieces shared by every record-kind command

use std::path::Path;

use crate::config::Settings;
use crate::display::format_rejections;
use crate::error::AssistantResult;
use crate::interchange::ExportOutcome;
use crate::models::{FieldRejection, Record, RecordId};
use crate::storage::Store;

/// Keep at most `limit` records, falling back to the configured default
pub(crate) fn apply_limit<R>(
    mut records: Vec<R>,
    limit: Option<usize>,
    settings: &Settings,
) -> Vec<R> {
    if let Some(max) = limit.or(settings.list_limit) {
        records.truncate(max);
    }
    records
}

pub(crate) fn print_warnings(warnings: &[FieldRejection]) {
    print!("{}", format_rejections("Warning: defaults used for", warnings));
}

pub(crate) fn print_rejections(rejected: &[FieldRejection]) {
    print!("{}", format_rejections("Not changed (previous value kept):", rejected));
}

pub(crate) fn delete<R: Record>(store: &Store<R>, id: RecordId) -> AssistantResult<()> {
    if store.delete(id)? {
        println!("Deleted {} #{}", R::KIND.label().to_lowercase(), id);
    } else {
        println!("No {} with ID {}; nothing deleted.", R::KIND.label().to_lowercase(), id);
    }
    Ok(())
}

pub(crate) fn import<R: Record>(store: &Store<R>, file: &Path) -> AssistantResult<()> {
    let count = store.import_csv(file)?;
    println!("Imported {} {} from {}", count, R::KIND.plural(), file.display());
    Ok(())
}

pub(crate) fn export<R: Record>(store: &Store<R>, file: &Path) -> AssistantResult<()> {
    match store.export_csv(file)? {
        ExportOutcome::Written(count) => {
            println!("Exported {} {} to {}", count, R::KIND.plural(), file.display())
        }
        ExportOutcome::NothingToExport => println!("No {} to export.", R::KIND.plural()),
    }
    Ok(())
}
