//! File I/O utilities with atomic writes
//!
//! Provides CSV read/write helpers that won't leave a half-written file behind
//! on failure.

use std::fs::{self, File};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

/// Read CSV records from a file, returning an empty list if the file doesn't exist
///
/// The first row must be a header naming every column in `header`, in order.
pub fn read_csv<T, P>(path: P, header: &[&str]) -> Result<Vec<T>, BudgetError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::Reader::from_reader(file);

    let found = reader
        .headers()
        .map_err(|e| BudgetError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?;
    if !found.iter().map(str::trim).eq(header.iter().copied()) {
        return Err(BudgetError::Storage(format!(
            "Unexpected header in {}: {:?}",
            path.display(),
            found
        )));
    }

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| BudgetError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write CSV records to a file atomically (write to temp, then rename)
///
/// The header row is always written, even for an empty list.
pub fn write_csv_atomic<T, P>(path: P, header: &[&str], records: &[T]) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(header)
        .map_err(|e| BudgetError::Storage(format!("Failed to write header: {}", e)))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| BudgetError::Storage(format!("Failed to serialize data: {}", e)))?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
