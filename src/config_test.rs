use crate::config::{AdbConfig, CommandTokens, ShellScripts};
use std::{fs, path::PathBuf};
use tempfile::TempDir;

fn create_test_config(dir: &TempDir, contents: &str) -> PathBuf {
    let config_path = dir.path().join(".adbandroidconfig");
    fs::write(&config_path, contents).unwrap();
    config_path
}

#[test]
fn test_default_tokens() {
    let config = AdbConfig::default();
    assert_eq!(config.prefix, "adb");
    assert_eq!(config.commands.get_serialno, "get-serialno");
    assert_eq!(config.commands.wait_for_device, "wait-for-device");
    assert_eq!(config.commands.start_server, "start-server");
    assert_eq!(config.commands.kill_server, "kill-server");
    assert_eq!(config.commands.get_state, "get-state");
    assert_eq!(config.scripts.ps, "ps");
    assert_eq!(config.scripts.package_list, "pm list packages");
}

#[test]
fn test_dump_package_info_template() {
    let scripts = ShellScripts::default();
    assert_eq!(
        scripts.dump_package_info_for("com.example.app"),
        "dumpsys package com.example.app"
    );
}

#[test]
fn test_empty_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(&temp_dir, "");

    let config = AdbConfig::load_from_path(&config_path);
    assert_eq!(config, AdbConfig::default());
}

#[test]
fn test_missing_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = AdbConfig::load_from_path(&temp_dir.path().join("nope"));
    assert_eq!(config, AdbConfig::default());
}

#[test]
fn test_partial_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_contents = r#"
prefix = "/opt/platform-tools/adb"

[commands]
devices = "devices"
get_serialno = "get-serialno"

[scripts]
package_list = "pm list packages -3"
"#;
    let config_path = create_test_config(&temp_dir, config_contents);

    let config = AdbConfig::load_from_path(&config_path);
    assert_eq!(config.prefix, "/opt/platform-tools/adb");
    assert_eq!(config.scripts.package_list, "pm list packages -3");
    // Untouched sections keep their defaults
    assert_eq!(config.scripts.ps, "ps");
    assert_eq!(config.commands, CommandTokens::default());
}

#[test]
fn test_invalid_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(&temp_dir, "this is not valid toml");

    let config = AdbConfig::load_from_path(&config_path);
    assert_eq!(config, AdbConfig::default());
    assert!(AdbConfig::try_load_from_path(&config_path).is_err());
}

#[test]
fn test_wrong_type_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(&temp_dir, "prefix = 123\n");

    let err = AdbConfig::try_load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, crate::error::AdbError::Config { .. }));
}

#[test]
fn test_tilde_prefix_is_expanded() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(&temp_dir, "prefix = \"~/sdk/adb\"\n");

    let config = AdbConfig::load_from_path(&config_path);
    assert!(!config.prefix.starts_with('~'));
    assert!(config.prefix.ends_with("sdk/adb"));
}

#[test]
fn test_with_prefix() {
    let config = AdbConfig::default().with_prefix("/usr/bin/adb");
    assert_eq!(config.prefix, "/usr/bin/adb");
}
