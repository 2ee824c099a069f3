//! Tests for TOML game configuration.

use std::fs;
use tempfile::TempDir;

use perfect_tictactoe::GameConfig;
use tictactoe_engine::Mark;

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(&path, "computer_mark = \"O\"\nhuman_name = \"Guest\"\n").expect("Failed to write TOML");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.computer_mark(), Mark::O);
    assert_eq!(config.human_name(), "Guest");
}

#[test]
fn test_missing_keys_use_defaults() {
    let config = GameConfig::from_toml("").expect("Empty config is valid");
    assert_eq!(config, GameConfig::default());
    assert_eq!(*config.computer_mark(), Mark::X);
    assert_eq!(config.human_name(), "Player");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_from_file_reports_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_mark_is_rejected() {
    let err = GameConfig::from_toml("computer_mark = \"Z\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_cli_override() {
    let config = GameConfig::default().with_computer_mark(Mark::O);
    assert_eq!(*config.computer_mark(), Mark::O);
}
