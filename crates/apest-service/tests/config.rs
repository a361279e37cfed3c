use apest_core::models::dimension::ApestDimension;
use apest_service::config::{ConfigError, LogFormat, ServiceConfig, load_config, save_config};
use serde_json::json;

fn write(dir: &tempfile::TempDir, value: serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    std::fs::write(&path, value.to_string()).unwrap();
    path
}

#[test]
fn defaults_are_valid() {
    let config = ServiceConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.priority().unwrap(), ApestDimension::ALL);
    assert_eq!(config.required_completion_percentage, 100);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, json!({ "log_format": "pretty" }));

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.required_completion_percentage, 0);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn current_config_keeps_its_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        json!({
            "config_version": 1,
            "dimension_priority": ["teaching", "shepherding", "evangelistic", "prophetic", "apostolic"],
        }),
    );

    let config = load_config(&path).unwrap();
    assert_eq!(config.required_completion_percentage, 100);
    assert_eq!(config.priority().unwrap()[0], ApestDimension::Teaching);
}

#[test]
fn newer_versions_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, json!({ "config_version": 7 }));

    assert!(matches!(
        load_config(&path),
        Err(ConfigError::UnsupportedVersion(7))
    ));
}

#[test]
fn priority_must_be_a_permutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        json!({
            "config_version": 1,
            "dimension_priority": ["teaching", "teaching", "evangelistic", "prophetic", "apostolic"],
        }),
    );
    assert!(matches!(load_config(&path), Err(ConfigError::InvalidPriority)));

    let short = ServiceConfig {
        dimension_priority: vec![ApestDimension::Apostolic],
        ..ServiceConfig::default()
    };
    assert!(matches!(short.validate(), Err(ConfigError::InvalidPriority)));
}

#[test]
fn threshold_is_a_percentage() {
    let config = ServiceConfig {
        required_completion_percentage: 101,
        ..ServiceConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidCompletion(101))
    ));
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn saved_config_loads_back_stamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = ServiceConfig {
        config_version: 0,
        required_completion_percentage: 80,
        ..ServiceConfig::default()
    };

    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.required_completion_percentage, 80);
}
