//! CSV export

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{AssistantError, AssistantResult};
use crate::models::Record;

/// What an export to a file did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The file was written with this many data rows
    Written(usize),
    /// There were no records; no file was created
    NothingToExport,
}

/// Write a header row followed by one row per record
pub fn export_to<R: Record, W: Write>(destination: W, records: &[R]) -> AssistantResult<()> {
    let mut writer = csv::Writer::from_writer(destination);

    writer
        .write_record(R::CSV_HEADERS)
        .map_err(|e| AssistantError::Export(e.to_string()))?;

    for record in records {
        writer
            .write_record(record.to_csv_row())
            .map_err(|e| AssistantError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| AssistantError::Export(e.to_string()))?;

    Ok(())
}

/// Export records to a CSV file
///
/// An empty record set leaves the filesystem untouched. Rows go to a
/// sibling temp file that replaces `path` only once fully written, so a
/// failed export never leaves a partial CSV behind.
pub fn export_to_path<R: Record>(path: &Path, records: &[R]) -> AssistantResult<ExportOutcome> {
    if records.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let temp_path = temp_path_for(path);

    let result = write_temp(&temp_path, records).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| {
            AssistantError::Export(format!("Failed to write {}: {}", path.display(), e))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result.map(|()| ExportOutcome::Written(records.len()))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("export"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_temp<R: Record>(temp_path: &Path, records: &[R]) -> AssistantResult<()> {
    let file = File::create(temp_path).map_err(|e| {
        AssistantError::Export(format!(
            "Failed to create file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    export_to(&mut writer, records)?;

    writer
        .flush()
        .map_err(|e| AssistantError::Export(e.to_string()))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| AssistantError::Export(e.to_string()))
}
