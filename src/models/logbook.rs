use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;

/// Well-known column names of the handover workbook.
/// Anything outside this set is free-form and passes through opaquely.
pub const COL_TIMESTAMP: &str = "Fecha y Hora";
pub const COL_DATE: &str = "Fecha";
pub const COL_TIME: &str = "Hora";
pub const COL_USER: &str = "Nombre";
pub const COL_ACTIVITY: &str = "Actividad";

/// Columns already covered by the fixed part of a record panel.
pub const PRIMARY_COLUMNS: [&str; 5] =
    [COL_TIMESTAMP, COL_DATE, COL_TIME, COL_USER, COL_ACTIVITY];

/// One shift-handover entry.
///
/// `values` is aligned with the owning [`Logbook`]'s column order;
/// `timestamp` is the parsed "Fecha y Hora" cell, `None` when the column is
/// absent or the cell is not a recognizable date-time.
#[derive(Debug, Clone)]
pub struct Record {
    pub timestamp: Option<NaiveDateTime>,
    pub values: Vec<String>,
}

impl Record {
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }
}

/// The full in-memory table of handover entries, loaded wholesale per fetch.
/// Record order follows spreadsheet file order. Filtering always produces a
/// derived Logbook and never mutates the base snapshot.
#[derive(Debug, Clone, Default)]
pub struct Logbook {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Logbook {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell value of `record` under column `name`. Blank cells and missing
    /// columns both come back as `None`.
    pub fn field<'a>(&self, record: &'a Record, name: &str) -> Option<&'a str> {
        let idx = self.column_index(name)?;
        let value = record.values.get(idx)?.trim();
        if value.is_empty() { None } else { Some(value) }
    }

    /// Sorted unique non-blank values of a column.
    pub fn distinct(&self, name: &str) -> Vec<String> {
        let Some(idx) = self.column_index(name) else {
            return Vec::new();
        };

        let set: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.values.get(idx))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .collect();

        set.into_iter().map(String::from).collect()
    }

    pub fn distinct_count(&self, name: &str) -> usize {
        self.distinct(name).len()
    }

    /// Earliest and latest derived dates, when any record carries one.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().filter_map(Record::date);
        let first = dates.next()?;

        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some((min, max))
    }

    /// Derived subset sharing this snapshot's column set.
    pub fn with_records(&self, records: Vec<Record>) -> Logbook {
        Logbook {
            columns: self.columns.clone(),
            records,
        }
    }
}
