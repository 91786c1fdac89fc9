//! Per-record detail panels and compact listings.
//!
//! A panel mirrors the record expander of the web dashboard: a one-line
//! title, the fixed identity fields, then every remaining non-empty column.

use crate::models::logbook::{
    COL_ACTIVITY, COL_DATE, COL_TIME, COL_USER, Logbook, PRIMARY_COLUMNS, Record,
};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{bold, pad_right};
use crate::utils::table::Table;

const NA: &str = "N/A";
const LABEL_WIDTH: usize = 11;

/// Print one record. `show_date` distinguishes the general view (full
/// timestamp in the title) from the today view (time only).
pub fn print_record(book: &Logbook, record: &Record, show_date: bool) {
    let fecha = book.field(record, COL_DATE).unwrap_or(NA);
    let hora = book.field(record, COL_TIME).unwrap_or(NA);
    let nombre = book.field(record, COL_USER).unwrap_or(NA);
    let actividad = book.field(record, COL_ACTIVITY).unwrap_or(NA);

    let title = if show_date {
        format!("🕐 {fecha} {hora} - {nombre} - {actividad}")
    } else {
        format!("🕐 {hora} - {nombre} - {actividad}")
    };

    println!("\n{}", bold(&title));

    print_field("Usuario", nombre);
    print_field("Actividad", actividad);
    if show_date {
        print_field("Fecha", fecha);
    }
    print_field("Hora", hora);

    for (idx, column) in book.columns.iter().enumerate() {
        if PRIMARY_COLUMNS.contains(&column.as_str()) {
            continue;
        }
        if let Some(value) = record.values.get(idx) {
            let value = value.trim();
            if !value.is_empty() {
                print_field(column, value);
            }
        }
    }
}

fn print_field(label: &str, value: &str) {
    println!(
        "  {} {}",
        bold(&pad_right(&format!("{label}:"), LABEL_WIDTH)),
        colorize_optional(value)
    );
}

/// Compact one-line-per-record listing for `--summary`.
pub fn summary_table(book: &Logbook) -> String {
    let mut table = Table::new(vec![
        COL_DATE.to_string(),
        COL_TIME.to_string(),
        COL_USER.to_string(),
        COL_ACTIVITY.to_string(),
    ]);

    for record in &book.records {
        table.add_row(vec![
            book.field(record, COL_DATE).unwrap_or(NA).to_string(),
            book.field(record, COL_TIME).unwrap_or(NA).to_string(),
            book.field(record, COL_USER).unwrap_or(NA).to_string(),
            book.field(record, COL_ACTIVITY).unwrap_or(NA).to_string(),
        ]);
    }

    table.render()
}
