mod common;

use common::ReplydeskTest;
use replydesk::config::{CONFIG_ENV, Config};
use serial_test::serial;

#[test]
fn test_config_defaults() {
    let test = ReplydeskTest::empty();
    assert_eq!(test.run_success(&["config", "get", "latency.generate_ms"]).trim(), "2000");
    assert_eq!(test.run_success(&["config", "get", "display.utc_offset_hours"]).trim(), "3");
    assert_eq!(test.run_success(&["config", "get", "source.path"]).trim(), "not set");
}

#[test]
fn test_config_set_persists() {
    let test = ReplydeskTest::empty();
    test.run_success(&["config", "set", "export.sheet_name", "Тикеты"]);
    test.run_success(&["config", "set", "latency.sync_ms", "10"]);

    assert_eq!(test.run_success(&["config", "get", "export.sheet_name"]).trim(), "Тикеты");
    assert_eq!(test.run_success(&["config", "get", "latency.sync_ms"]).trim(), "10");

    let yaml = test.read_config();
    assert!(yaml.contains("sync_ms: 10"));
}

#[test]
fn test_config_set_rejects_bad_values() {
    let test = ReplydeskTest::empty();

    let stderr = test.run_failure(&["config", "set", "display.utc_offset_hours", "99"]);
    assert!(stderr.contains("display.utc_offset_hours"));

    let stderr = test.run_failure(&["config", "set", "source.kind", "http"]);
    assert!(stderr.contains("invalid source kind"));

    let stderr = test.run_failure(&["config", "get", "github.token"]);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_config_show_json() {
    let test = ReplydeskTest::new();
    let output = test.run_success(&["config", "show", "--json"]);

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["values"]["latency.load_ms"], "0");
    assert_eq!(json["values"]["source.kind"], "mock");
    assert!(json["values"]["source.path"].is_null());
}

#[test]
fn test_export_uses_configured_file_name() {
    let test = ReplydeskTest::new();
    test.run_success(&["config", "set", "export.csv_file_name", "inbox.csv"]);
    test.run_success(&["export", "csv"]);
    assert!(test.path("inbox.csv").exists());
}

#[test]
fn test_invalid_config_file_fails() {
    let test = ReplydeskTest::empty();
    test.write_config("display:\n  utc_offset_hours: 40\n");
    let stderr = test.run_failure(&["ls"]);
    assert!(stderr.contains("configuration error"));
}

#[test]
#[serial]
fn test_config_env_overrides_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(&path, "latency:\n  load_ms: 5\n").unwrap();

    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let config = Config::load();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    let config = config.unwrap();
    assert_eq!(config.latency.load_ms, 5);
    assert_eq!(config.latency.generate_ms, 2000);
    assert_eq!(Config::config_path(), std::path::PathBuf::from(".replydesk/config.yaml"));
}
