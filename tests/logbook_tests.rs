//! Library-level checks of the filtering, aggregation and parsing
//! invariants the views are built on.

mod common;
use bitacora::core::filter::{FilterCriteria, today_subset};
use bitacora::core::stats;
use bitacora::export::xlsx_bytes;
use bitacora::models::logbook::{COL_DATE, COL_TIME, Logbook};
use bitacora::remote::client::decode_base64_content;
use bitacora::remote::workbook::parse_logbook;
use common::{sample_book, today, yesterday};

/// Parse the fixture through the real XLSX pipeline so records carry
/// derived timestamps, exactly as a fetched workbook would.
fn loaded_sample() -> Logbook {
    let bytes = xlsx_bytes(&sample_book(), "Bitácora").expect("fixture workbook");
    parse_logbook(&bytes).expect("parse fixture")
}

#[test]
fn test_unconstrained_filter_is_identity() {
    let book = loaded_sample();
    let filtered = FilterCriteria::default().apply(&book);

    assert_eq!(filtered.len(), book.len());
    assert_eq!(filtered.columns, book.columns);
}

#[test]
fn test_range_filter_is_inclusive_of_both_bounds() {
    let book = loaded_sample();

    let criteria = FilterCriteria {
        bounds: Some((yesterday(), today())),
        ..Default::default()
    };
    assert_eq!(criteria.apply(&book).len(), 5);

    let only_yesterday = FilterCriteria {
        bounds: Some((yesterday(), yesterday())),
        ..Default::default()
    };
    let filtered = only_yesterday.apply(&book);
    assert_eq!(filtered.len(), 2);
    for record in &filtered.records {
        assert_eq!(record.date(), Some(yesterday()));
    }
}

#[test]
fn test_today_subset_matches_derived_date_and_sorts_descending() {
    let book = loaded_sample();
    let hoy = today_subset(&book, today());

    assert_eq!(hoy.len(), 3);
    for record in &hoy.records {
        assert_eq!(record.date(), Some(today()));
    }

    for pair in hoy.records.windows(2) {
        assert!(
            pair[0].timestamp >= pair[1].timestamp,
            "today view must render most recent first"
        );
    }
}

#[test]
fn test_stats_for_the_ana_luis_scenario() {
    let book = loaded_sample();

    let general = stats::compute(&book);
    assert_eq!(general.total, 5);
    assert_eq!(general.users, 2);
    assert_eq!(general.activities, 3);
    assert_eq!(general.days, 2);

    let hoy = stats::compute(&today_subset(&book, today()));
    assert_eq!(hoy.total, 3);
    assert_eq!(hoy.users, 2);
    assert_eq!(hoy.activities, 2);

    let luis = FilterCriteria {
        user: Some("Luis".to_string()),
        ..Default::default()
    }
    .apply(&today_subset(&book, today()));
    assert_eq!(luis.len(), 1);
}

#[test]
fn test_parse_derives_date_and_time_columns() {
    let book = loaded_sample();

    let date_idx = book.column_index(COL_DATE).expect("derived Fecha");
    let time_idx = book.column_index(COL_TIME).expect("derived Hora");

    let first = &book.records[0];
    assert_eq!(first.values[date_idx], today().format("%Y-%m-%d").to_string());
    assert_eq!(first.values[time_idx], "08:15:00");
}

#[test]
fn test_parse_headers_only_workbook_is_empty() {
    let empty = Logbook::new(
        ["Fecha y Hora", "Nombre", "Actividad"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    );
    let bytes = xlsx_bytes(&empty, "Bitácora").expect("empty workbook");

    let book = parse_logbook(&bytes).expect("parse empty");
    assert!(book.is_empty());
    assert!(book.has_column("Nombre"));
}

#[test]
fn test_decode_base64_content_strips_newlines() {
    // GitHub chunks the payload across lines.
    let decoded = decode_base64_content("aG9s\nYSBt\ndW5kbw==\n").expect("decode");
    assert_eq!(decoded, b"hola mundo");

    assert!(decode_base64_content("not base64 at all!").is_err());
}
