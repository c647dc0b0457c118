//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

mod support;

use std::path::PathBuf;

use serial_test::serial;
use shiftpulse_domain::{MetricType, ShiftPulseError};
use shiftpulse_infra::config;
use support::Fixtures;

fn clear_env() {
    for var in [
        "SHIFTPULSE_OUTLIER_THRESHOLD",
        "SHIFTPULSE_METRIC",
        "SHIFTPULSE_CALENDAR_PATH",
        "SHIFTPULSE_MAPPING_PATH",
        "SHIFTPULSE_LOG_LEVEL",
        "SHIFTPULSE_LOG_JSON",
    ] {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_from_toml_file() {
    clear_env();
    let fixtures = Fixtures::new();
    let path = fixtures.write(
        "shiftpulse.toml",
        r#"
[report]
outlier_threshold_pct = 800.0
metric = "efficiency"

[catalogs]
shift_calendar_path = "data/calendar.csv"
process_mapping_path = "data/mapping.toml"

[logging]
level = "debug"
json = true
"#,
    );

    let config = config::load_from_file(Some(path)).expect("config should load");

    assert!((config.report.outlier_threshold_pct - 800.0).abs() < f64::EPSILON);
    assert_eq!(config.report.metric, MetricType::Efficiency);
    assert_eq!(config.catalogs.shift_calendar_path, Some(PathBuf::from("data/calendar.csv")));
    assert_eq!(config.catalogs.process_mapping_path, Some(PathBuf::from("data/mapping.toml")));
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
#[serial]
fn test_load_config_from_json_file() {
    clear_env();
    let fixtures = Fixtures::new();
    let path =
        fixtures.write("config.json", r#"{"catalogs": {"shift_calendar_path": "cal.json"}}"#);

    let config = config::load_from_file(Some(path)).expect("config should load");
    assert_eq!(config.catalogs.shift_calendar_path, Some(PathBuf::from("cal.json")));
    assert_eq!(config.report.metric, MetricType::Utilization);
    assert_eq!(config.logging.level, "info");
}

#[test]
#[serial]
fn test_empty_file_uses_defaults() {
    clear_env();
    let fixtures = Fixtures::new();
    let path = fixtures.write("shiftpulse.toml", "");

    let config = config::load_from_file(Some(path)).expect("empty TOML is valid");
    assert_eq!(config, shiftpulse_domain::Config::default());
}

#[test]
#[serial]
fn test_environment_wins_over_file() {
    clear_env();
    let fixtures = Fixtures::new();
    let path = fixtures.write("shiftpulse.toml", "[report]\nmetric = \"efficiency\"\n");
    std::env::set_var("SHIFTPULSE_METRIC", "utilization");
    std::env::set_var("SHIFTPULSE_MAPPING_PATH", "/srv/mapping.csv");

    let config = config::load_from_file(Some(path)).expect("config should load");
    assert_eq!(config.report.metric, MetricType::Utilization);
    assert_eq!(config.catalogs.process_mapping_path, Some(PathBuf::from("/srv/mapping.csv")));
    clear_env();
}

#[test]
#[serial]
fn test_invalid_file_is_config_error() {
    clear_env();
    let fixtures = Fixtures::new();
    let path = fixtures.write("shiftpulse.json", r#"{"report": {"metric": "speed"}}"#);

    let result = config::load_from_file(Some(path));
    assert!(matches!(result, Err(ShiftPulseError::Config(_))));
}

#[test]
fn test_missing_explicit_file_is_config_error() {
    let result = config::load_from_file(Some(PathBuf::from("/nonexistent/shiftpulse.toml")));
    assert!(matches!(result, Err(ShiftPulseError::Config(_))));
}
