// tests/config_roundtrip.rs
//! Integration tests for configuration loading and export

use tremor_core::config::{ConfigLoader, SourceKind, SystemConfig};

#[test]
fn test_export_then_reload_preserves_settings() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("tremor.toml");

    let mut config = SystemConfig::default();
    config.monitor.tick_interval_ms = 500;
    config.monitor.alerts_enabled = false;

    ConfigLoader::export_config(&config, &path).expect("failed to export config");
    let reloaded = ConfigLoader::load_config_file(&path).expect("failed to reload config");

    assert_eq!(reloaded.monitor.tick_interval_ms, 500);
    assert!(!reloaded.monitor.alerts_enabled);
    assert_eq!(reloaded.hal.source, SourceKind::Simulator);
}

#[test]
fn test_partial_file_overrides_only_named_fields() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("tremor.toml");
    std::fs::write(
        &path,
        "[monitor]\nhistory_capacity = 40\n\n[hal]\nsource = \"simulator\"\n\n[hal.simulator]\nfrequency_min_hz = 3.0\nfrequency_max_hz = 8.0\namplitude_min = 30.0\namplitude_max = 100.0\nseed = 9\n",
    )
    .expect("failed to write config");

    let config = ConfigLoader::load_config_file(&path).expect("failed to load config");

    assert_eq!(config.monitor.history_capacity, 40);
    assert_eq!(config.monitor.tick_interval_ms, 1000);
    assert!(config.monitor.monitoring_enabled);
    assert_eq!(config.hal.simulator.unwrap().seed, Some(9));
}

#[test]
fn test_loader_surfaces_validation_errors_from_disk() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("tremor.toml");
    std::fs::write(&path, "[monitor]\nhistory_capacity = 0\n").expect("failed to write config");

    let error = ConfigLoader::load_config_file(&path).unwrap_err();
    assert!(error.to_string().contains("History capacity"));
}
