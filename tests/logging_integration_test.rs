//! Integration tests for logging functionality

use confinject::config::LoggingConfig;
use confinject::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_rotation, "daily");
    assert!(!config.json_console);
}

#[test]
fn test_init_logging_with_file_layer() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
        json_console: false,
    };

    // Only one subscriber can be installed per process; this is the only
    // test in this binary that installs one.
    let guard = init_logging("debug", &config).expect("Failed to initialize logging");
    tracing::info!(key = "server.port", "Logging from integration test");
    drop(guard);

    assert!(log_path.exists());
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let result = init_logging("verbose", &LoggingConfig::default());
    assert!(result.is_err());
}
