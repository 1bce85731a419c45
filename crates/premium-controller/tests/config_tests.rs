use std::io::Write;

use premium_controller::ControllerConfig;
use premium_protocol::DEFAULT_API_URL;

#[test]
fn test_defaults() {
    let config = ControllerConfig::default();
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert!(config.warm_up);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_from_file_fills_missing_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_url = \"https://estimator.example.com/\"").unwrap();

    let config = ControllerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.api_url, "https://estimator.example.com");
    assert!(config.warm_up);
}

#[test]
fn test_from_file_full() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_url = \"http://10.0.0.5:8000\"").unwrap();
    writeln!(file, "warm_up = false").unwrap();
    writeln!(file, "log_level = \"debug\"").unwrap();

    let config = ControllerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.api_url, "http://10.0.0.5:8000");
    assert!(!config.warm_up);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_url = ").unwrap();
    let err = ControllerConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(ControllerConfig::load(Some(missing.as_path())).is_err());
}

#[test]
fn test_api_url_override() {
    let config = ControllerConfig::default().with_api_url(Some("http://svc:9000/".into()));
    assert_eq!(config.api_url, "http://svc:9000");
}

#[test]
fn test_blank_override_is_ignored() {
    let config = ControllerConfig::default().with_api_url(Some("   ".into()));
    assert_eq!(config.api_url, DEFAULT_API_URL);
    let config = ControllerConfig::default().with_api_url(None);
    assert_eq!(config.api_url, DEFAULT_API_URL);
}
