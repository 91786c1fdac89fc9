//! XLSX bytes → [`Logbook`].
//!
//! First worksheet only; column headers come from the first row. When a
//! "Fecha y Hora" column is present, derived "Fecha" and "Hora" columns are
//! filled from it (appended when the sheet does not already carry them, as
//! a re-imported export would), so views and exports can use them like any
//! other column.

use crate::errors::{AppError, AppResult};
use crate::models::logbook::{COL_DATE, COL_TIME, COL_TIMESTAMP, Logbook, Record};
use calamine::{Data, Reader, Xlsx};
use chrono::NaiveDateTime;
use std::io::Cursor;

/// Text formats accepted for a timestamp cell when the workbook stores it as
/// a string instead of a native Excel date.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
];

pub fn parse_logbook(bytes: &[u8]) -> AppResult<Logbook> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = Xlsx::new(cursor).map_err(|e| AppError::Workbook(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Workbook("workbook has no sheets".to_string()))?
        .map_err(|e| AppError::Workbook(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Logbook::default());
    };

    let mut columns: Vec<String> = header_row.iter().map(cell_to_string).collect();
    let sheet_width = columns.len();

    let ts_idx = columns.iter().position(|c| c == COL_TIMESTAMP);

    let (date_idx, time_idx) = if ts_idx.is_some() {
        (
            Some(ensure_column(&mut columns, COL_DATE)),
            Some(ensure_column(&mut columns, COL_TIME)),
        )
    } else {
        (None, None)
    };

    let width = columns.len();
    let mut book = Logbook::new(columns);

    for row in rows {
        let mut values: Vec<String> = row.iter().map(cell_to_string).collect();
        values.truncate(sheet_width);
        values.resize(width, String::new());

        if values.iter().all(|v| v.trim().is_empty()) {
            continue;
        }

        let timestamp = ts_idx.and_then(|i| row.get(i)).and_then(cell_to_datetime);

        // Derived columns always reflect the parsed timestamp, also when
        // the sheet carried stale "Fecha"/"Hora" cells of its own.
        if let Some(idx) = date_idx {
            values[idx] = timestamp
                .map(|ts| ts.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
        }
        if let Some(idx) = time_idx {
            values[idx] = timestamp
                .map(|ts| ts.format("%H:%M:%S").to_string())
                .unwrap_or_default();
        }

        book.records.push(Record { timestamp, values });
    }

    Ok(book)
}

/// Index of `name` in `columns`, appending it when absent.
fn ensure_column(columns: &mut Vec<String>, name: &str) -> usize {
    match columns.iter().position(|c| c == name) {
        Some(idx) => idx,
        None => {
            columns.push(name.to_string());
            columns.len() - 1
        }
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => format!("{}", f),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR({:?})", e),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => format!("{}", dt),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

fn cell_to_datetime(cell: &Data) -> Option<NaiveDateTime> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime(),
        Data::DateTimeIso(s) => parse_timestamp_text(s),
        Data::String(s) => parse_timestamp_text(s),
        _ => None,
    }
}

fn parse_timestamp_text(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
