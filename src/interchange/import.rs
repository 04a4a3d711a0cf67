//! CSV import
//!
//! The header row decides where each column lives, so files whose columns are
//! reordered still import. Decoding stops at the first bad cell and returns
//! nothing, leaving the store untouched.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use super::CsvRow;
use crate::error::{AssistantError, AssistantResult};
use crate::models::Record;

/// Decode every data row of a CSV source into records
pub fn import_from<R: Record, Rd: Read>(source: Rd) -> AssistantResult<Vec<R>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AssistantError::Import(format!("Failed to read header row: {}", e)))?
        .clone();

    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_string(), idx))
        .collect();

    let missing: Vec<&str> = R::CSV_HEADERS
        .iter()
        .copied()
        .filter(|name| !columns.contains_key(*name))
        .collect();
    if !missing.is_empty() {
        return Err(AssistantError::Import(format!(
            "Header is missing column(s): {} (expected {})",
            missing.join(", "),
            R::CSV_HEADERS.join(",")
        )));
    }

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            AssistantError::Import(format!("Error reading CSV record {}: {}", idx + 1, e))
        })?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);

        let row = CsvRow::new(&columns, &record, line);
        records.push(R::from_csv_row(&row)?);
    }

    Ok(records)
}

/// Decode a CSV file into records
pub fn import_from_path<R: Record>(path: &Path) -> AssistantResult<Vec<R>> {
    let file = File::open(path).map_err(|e| {
        AssistantError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;

    import_from(BufReader::new(file))
}
