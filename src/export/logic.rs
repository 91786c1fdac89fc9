// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, timestamped_filename};
use crate::models::Logbook;

use std::path::PathBuf;

/// Logica de alto nivel para el export de una vista filtrada.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the filtered subset to disk.
    ///
    /// - `file`: explicit output path; `None` falls back to a timestamped
    ///   name (`<prefix>_<YYYYMMDD_HHMMSS>.<ext>`) in the working directory.
    /// - `sheet_name`: worksheet name for the XLSX format.
    pub fn write(
        book: &Logbook,
        format: ExportFormat,
        file: Option<&str>,
        prefix: &str,
        sheet_name: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(timestamped_filename(prefix, format)),
        };

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Xlsx => export_xlsx(book, &path, sheet_name),
            ExportFormat::Csv => export_csv(book, &path),
            ExportFormat::Json => export_json(book, &path),
        }
    }
}
