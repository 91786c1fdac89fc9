// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::Logbook;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: one object per record, keyed by column name.
pub(crate) fn export_json(book: &Logbook, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let rows: Vec<serde_json::Value> = book
        .records
        .iter()
        .map(|record| {
            let map: serde_json::Map<String, serde_json::Value> = book
                .columns
                .iter()
                .zip(record.values.iter())
                .map(|(col, value)| (col.clone(), serde_json::Value::String(value.clone())))
                .collect();
            serde_json::Value::Object(map)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, header row included.
pub(crate) fn export_csv(book: &Logbook, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(&book.columns)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for record in &book.records {
        wtr.write_record(&record.values)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
