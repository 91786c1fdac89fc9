#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bitacora::export::xlsx_bytes;
use bitacora::models::logbook::{Logbook, Record};
use bitacora::remote::cache::SnapshotCache;
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bita() -> Command {
    cargo_bin_cmd!("bitacora")
}

/// Fresh scratch directory inside the system temp dir.
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bitacora", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Config file path inside the scratch dir. Most tests leave it absent so
/// the binary runs on defaults (no remote coordinates).
pub fn config_path(dir: &PathBuf) -> String {
    dir.join("bitacora.conf").to_string_lossy().to_string()
}

pub fn cache_path(dir: &PathBuf) -> String {
    dir.join("cache").to_string_lossy().to_string()
}

pub fn temp_out(dir: &PathBuf, name: &str, ext: &str) -> String {
    let p = dir.join(format!("{}_out.{}", name, ext));
    fs::remove_file(&p).ok();
    p.to_string_lossy().to_string()
}

/// Build a logbook fixture the way the form application writes the sheet:
/// no derived columns, timestamps as text cells.
pub fn book_from_rows(columns: &[&str], rows: &[&[&str]]) -> Logbook {
    let mut book = Logbook::new(columns.iter().map(|c| c.to_string()).collect());
    for row in rows {
        book.records.push(Record {
            timestamp: None,
            values: row.iter().map(|v| v.to_string()).collect(),
        });
    }
    book
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn yesterday() -> NaiveDate {
    today().pred_opt().expect("yesterday")
}

/// The five-record scenario used across tests: three entries today (two by
/// Ana, one by Luis) and two by Ana yesterday.
pub fn sample_book() -> Logbook {
    let hoy = today().format("%Y-%m-%d").to_string();
    let ayer = yesterday().format("%Y-%m-%d").to_string();

    let rows: Vec<Vec<String>> = vec![
        vec![
            format!("{hoy} 08:15:00"),
            "Ana".to_string(),
            "Corte de turno".to_string(),
            "Sin novedades".to_string(),
        ],
        vec![
            format!("{hoy} 12:45:00"),
            "Ana".to_string(),
            "Conciliación".to_string(),
            String::new(),
        ],
        vec![
            format!("{hoy} 14:15:00"),
            "Luis".to_string(),
            "Corte de turno".to_string(),
            "Pendiente arqueo".to_string(),
        ],
        vec![
            format!("{ayer} 09:00:00"),
            "Ana".to_string(),
            "Corte de turno".to_string(),
            String::new(),
        ],
        vec![
            format!("{ayer} 17:15:00"),
            "Ana".to_string(),
            "Cierre".to_string(),
            "Caja cuadrada".to_string(),
        ],
    ];

    let mut book = Logbook::new(
        ["Fecha y Hora", "Nombre", "Actividad", "Observaciones"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    );
    for row in rows {
        book.records.push(Record {
            timestamp: None,
            values: row,
        });
    }
    book
}

/// Seed the snapshot slot with a freshly-stamped workbook so view commands
/// run offline and inside the TTL window.
pub fn seed_cache(dir: &PathBuf, book: &Logbook) {
    let bytes = xlsx_bytes(book, "Bitácora").expect("fixture workbook");
    let cache = SnapshotCache::new(dir.join("cache"), 60);
    cache.store(&bytes).expect("seed cache");
}
