use quotesync_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = QuoteConfig::from_toml("").unwrap();

    assert_eq!(config.storage.backend, StorageBackend::File);
    assert_eq!(config.storage.path, "quotesync-data");

    assert!(config.remote.endpoint_url.is_none());
    assert_eq!(config.remote.timeout_secs, 10);
    assert_eq!(config.remote.max_retries, 3);
    assert_eq!(config.remote.initial_backoff_ms, 500);
    assert_eq!(config.remote.max_backoff_ms, 5_000);
    assert_eq!(config.remote.mock_latency_ms, 0);

    assert_eq!(config.sync.interval_secs, 30);
    assert!(config.sync.sync_on_start);

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
backend = "sqlite"

[remote]
endpoint_url = "http://localhost:8080"

[sync]
interval_secs = 5
"#;
    let config = QuoteConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.backend, StorageBackend::Sqlite);
    assert_eq!(config.storage.path, "quotesync-data"); // default
    assert_eq!(
        config.remote.endpoint_url.as_deref(),
        Some("http://localhost:8080")
    );
    assert_eq!(config.remote.max_retries, 3); // default
    assert_eq!(config.sync.interval_secs, 5);
    assert!(config.sync.sync_on_start); // default
}

#[test]
fn config_rejects_unknown_backend() {
    let err = QuoteConfig::from_toml("[storage]\nbackend = \"floppy\"\n").unwrap_err();
    assert!(matches!(
        err,
        quotesync_core::QuoteError::Config { .. }
    ));
}

#[test]
fn config_serde_roundtrip() {
    let mut config = QuoteConfig::default();
    config.storage.backend = StorageBackend::Memory;
    config.sync.interval_secs = 90;
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = QuoteConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.storage.backend, StorageBackend::Memory);
    assert_eq!(roundtripped.sync.interval_secs, 90);
}

#[test]
fn config_load_reports_missing_file() {
    let err = QuoteConfig::load(std::path::Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(err.to_string().contains("not/here.toml"));
}
