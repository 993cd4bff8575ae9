use std::fs;
use std::time::Duration;

use postcraft_app::{load_config, AppConfig, LogDestination};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn defaults_match_generation_contract() {
    let config = AppConfig::default();
    let settings = config.generation_settings();

    assert_eq!(settings.request_timeout, Duration::from_millis(30_000));
    assert_eq!(config.log_destination, LogDestination::File);
}

#[test]
fn partial_file_keeps_defaults_for_missing_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("postcraft.ron");
    fs::write(
        &path,
        r#"(endpoint: "https://posts.example.com/generate", log_destination: Both)"#,
    )
    .unwrap();

    let config = load_config(Some(path.as_path())).unwrap();

    assert_eq!(config.endpoint, "https://posts.example.com/generate");
    assert_eq!(config.log_destination, LogDestination::Both);
    assert_eq!(config.request_timeout_ms, 30_000);
    assert_eq!(config.log_level, "info");
}

#[test]
fn timeout_override_flows_into_settings() {
    let config = AppConfig::from_ron("(request_timeout_ms: 1500)").unwrap();
    let settings = config.generation_settings();

    assert_eq!(settings.request_timeout, Duration::from_millis(1500));
}

#[test]
fn malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.ron");
    fs::write(&path, "(endpoint: 42").unwrap();

    assert!(load_config(Some(path.as_path())).is_err());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.ron");

    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("absent.ron"));
}

#[test]
fn config_round_trips_through_ron() {
    let config = AppConfig {
        endpoint: "http://localhost:8080/generate".to_string(),
        log_destination: LogDestination::Terminal,
        ..AppConfig::default()
    };
    let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();

    assert_eq!(AppConfig::from_ron(&text).unwrap(), config);
}
