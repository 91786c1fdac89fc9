mod common;
use common::{bita, cache_path, config_path, sample_book, seed_cache, setup_dir};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_today_shows_only_todays_records() {
    let dir = setup_dir("today_all");
    seed_cache(&dir, &sample_book());

    bita()
        .args([
            "--config",
            &config_path(&dir),
            "--cache-dir",
            &cache_path(&dir),
            "today",
        ])
        .assert()
        .success()
        .stdout(contains("Bitácora de Hoy"))
        .stdout(contains("Registros de Hoy: 3"))
        .stdout(contains("Luis"))
        // Yesterday's closing entry must not leak into the today view.
        .stdout(contains("Caja cuadrada").not());
}

#[test]
fn test_today_orders_most_recent_first() {
    let dir = setup_dir("today_order");
    seed_cache(&dir, &sample_book());

    let output = bita()
        .args([
            "--config",
            &config_path(&dir),
            "--cache-dir",
            &cache_path(&dir),
            "today",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);
    let first = stdout.find("14:15:00").expect("newest entry rendered");
    let second = stdout.find("12:45:00").expect("mid entry rendered");
    let third = stdout.find("08:15:00").expect("oldest entry rendered");
    assert!(first < second && second < third, "expected newest-first order");
}

#[test]
fn test_today_filter_by_user() {
    let dir = setup_dir("today_user");
    seed_cache(&dir, &sample_book());

    bita()
        .args([
            "--config",
            &config_path(&dir),
            "--cache-dir",
            &cache_path(&dir),
            "today",
            "--user",
            "Luis",
        ])
        .assert()
        .success()
        .stdout(contains("Registros de Hoy: 1"))
        .stdout(contains("Pendiente arqueo"));
}

#[test]
fn test_today_unknown_user_message() {
    let dir = setup_dir("today_unknown_user");
    seed_cache(&dir, &sample_book());

    bita()
        .args([
            "--config",
            &config_path(&dir),
            "--cache-dir",
            &cache_path(&dir),
            "today",
            "--user",
            "Nadie",
        ])
        .assert()
        .success()
        .stdout(contains("Registros de Hoy: 0"))
        .stdout(contains("No hay registros para Nadie en el día de hoy."));
}

#[test]
fn test_today_without_todays_records_warns() {
    let dir = setup_dir("today_empty");

    let ts = format!(
        "{} 10:00:00",
        common::yesterday().format("%Y-%m-%d")
    );
    let book = common::book_from_rows(
        &["Fecha y Hora", "Nombre", "Actividad"],
        &[&[ts.as_str(), "Ana", "Corte de turno"]],
    );
    seed_cache(&dir, &book);

    bita()
        .args([
            "--config",
            &config_path(&dir),
            "--cache-dir",
            &cache_path(&dir),
            "today",
        ])
        .assert()
        .success()
        .stdout(contains("Entregas de Hoy"))
        .stdout(contains("No hay registros para el día de hoy."));
}
