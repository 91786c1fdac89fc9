mod common;
use common::{bita, config_path, setup_dir};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_init_creates_config_skeleton() {
    let dir = setup_dir("config_init");
    let cfg = config_path(&dir);

    bita()
        .args([
            "--config",
            &cfg,
            "--cache-dir",
            &common::cache_path(&dir),
            "init",
        ])
        .assert()
        .success()
        .stdout(contains("Config file:"));

    assert!(Path::new(&cfg).exists());

    let content = fs::read_to_string(&cfg).expect("read skeleton");
    assert!(content.contains("repo_owner"));
    assert!(content.contains("cache_ttl_secs"));
}

#[test]
fn test_config_check_names_missing_fields() {
    let dir = setup_dir("config_check_missing");

    bita()
        .args([
            "--config",
            &config_path(&dir),
            "config",
            "--check",
        ])
        .assert()
        .failure()
        .stdout(contains("Missing required field: token"))
        .stdout(contains("Missing required field: repo_owner"))
        .stderr(contains("Error de configuración: falta 'token'"));
}

#[test]
fn test_config_check_passes_when_complete() {
    let dir = setup_dir("config_check_complete");
    let cfg = config_path(&dir);

    fs::write(
        &cfg,
        "token: ghp_abc123\nrepo_owner: gopass\nrepo_name: bitacora-datos\nfile_path: registros/bitacora.xlsx\n",
    )
    .expect("write config");

    bita()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration complete"));
}

#[test]
fn test_config_print_masks_token() {
    let dir = setup_dir("config_print");
    let cfg = config_path(&dir);

    fs::write(
        &cfg,
        "token: ghp_secret_value\nrepo_owner: gopass\nrepo_name: bitacora-datos\nfile_path: registros/bitacora.xlsx\n",
    )
    .expect("write config");

    bita()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("********"))
        .stdout(contains("ghp_secret_value").not());
}

#[test]
fn test_env_overrides_fill_missing_values() {
    let dir = setup_dir("config_env_override");

    // Token supplied by the environment: the next missing field is named.
    bita()
        .env("BITACORA_TOKEN", "ghp_from_env")
        .args([
            "--config",
            &config_path(&dir),
            "config",
            "--check",
        ])
        .assert()
        .failure()
        .stdout(contains("Missing required field: token").not())
        .stderr(contains("Error de configuración: falta 'repo_owner'"));
}
