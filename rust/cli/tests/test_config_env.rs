//! Configuration precedence through the real process environment.
//!
//! Every test here touches `PATIENCE_*` variables, so they run serially.

use serde_json::Value;
use serial_test::serial;
use std::io::{Cursor, Write};

const VARS: &[&str] = &["PATIENCE_CONFIG", "PATIENCE_SEED", "PATIENCE_LOG"];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn show_config(extra: &[&str]) -> (i32, String, String) {
    let mut args = vec!["klondike", "--show-config"];
    args.extend_from_slice(extra);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(String::new());
    let code = patience_cli::run_with_input(args, &mut input, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn defaults_without_environment() {
    clear_env();
    let (code, out, _) = show_config(&[]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"].as_str(), Some("default"));
    assert_eq!(json["log_filter"]["value"].as_str(), Some("warn"));
}

#[test]
#[serial]
fn precedence_cli_over_env_over_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 1\nlog_filter = \"info\"").unwrap();
    unsafe {
        std::env::set_var("PATIENCE_CONFIG", file.path());
    }

    let (_, out, _) = show_config(&[]);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(1));
    assert_eq!(json["seed"]["source"].as_str(), Some("file"));
    assert_eq!(json["log_filter"]["source"].as_str(), Some("file"));

    unsafe {
        std::env::set_var("PATIENCE_SEED", "2");
    }
    let (_, out, _) = show_config(&[]);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(2));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));

    let (_, out, _) = show_config(&["--seed", "3"]);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(3));
    assert_eq!(json["seed"]["source"].as_str(), Some("cli"));
    assert_eq!(json["log_filter"]["value"].as_str(), Some("info"));

    clear_env();
}

#[test]
#[serial]
fn env_seed_drives_the_game() {
    clear_env();
    unsafe {
        std::env::set_var("PATIENCE_SEED", "31337");
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new("quit\n".to_string());
    let code = patience_cli::run_with_input(["klondike"], &mut input, &mut out, &mut err);
    clear_env();

    assert_eq!(code, 0);
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Klondike, seed 31337\n"));
}

#[test]
#[serial]
fn invalid_env_seed_is_an_error() {
    clear_env();
    unsafe {
        std::env::set_var("PATIENCE_SEED", "lots");
    }
    let (code, out, err) = show_config(&[]);
    clear_env();

    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Configuration error: Invalid seed: lots"));
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    unsafe {
        std::env::set_var("PATIENCE_CONFIG", dir.path().join("absent.toml"));
    }
    let (code, _, err) = show_config(&[]);
    clear_env();

    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"));
}

#[test]
#[serial]
fn invalid_cli_seed_overrides_env_with_a_warning() {
    clear_env();
    unsafe {
        std::env::set_var("PATIENCE_SEED", "5");
    }
    let (code, out, err) = show_config(&["--seed", "five"]);
    clear_env();

    assert_eq!(code, 0);
    assert!(err.starts_with("WARNING: Seed 'five' is not a number"));
    let json: Value = serde_json::from_str(&out).unwrap();
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"].as_str(), Some("cli"));
}
