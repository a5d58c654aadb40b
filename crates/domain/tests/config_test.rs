use rescuedogs_mcp_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;
use std::time::Duration;

// ============================================================================
// Defaults and file loading
// ============================================================================

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "https://api.rescuedogs.me");
    assert_eq!(config.images.base_url, "https://images.rescuedogs.me");
    assert_eq!(config.images.cdn_domain, "rescuedogs.me");
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.image_timeout(), Duration::from_secs(5));
    assert_eq!(config.retry_backoff(), Duration::ZERO);
    assert_eq!(config.default_cache_ttl(), Duration::from_secs(600));
    assert_eq!(config.sweep_interval(), Duration::from_secs(120));
    assert_eq!(config.images.max_images, 5);
    assert_eq!(config.logging.level, "info");
    assert!(config.api.user_agent.starts_with("rescuedogs-mcp-server/"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
[api]
base_url = "http://localhost:9000"

[cache]
sweep_interval_secs = 30
"#,
    )
    .unwrap();

    assert_eq!(config.api.base_url, "http://localhost:9000");
    assert_eq!(config.api.request_timeout_secs, 10);
    assert_eq!(config.cache.sweep_interval_secs, 30);
    assert_eq!(config.cache.default_ttl_secs, 600);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

    let config = Config::load(file.path().to_str(), CliOverrides::default()).unwrap();

    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = Config::load(Some("/nonexistent/rescuedogs.toml"), CliOverrides::default());

    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let result = Config::from_toml("[api\nbase_url = ");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn test_env_overrides_file_values() {
    let mut config = Config::from_toml("[api]\nbase_url = \"http://file\"").unwrap();

    config.apply_env(|key| match key {
        "RESCUEDOGS_API_URL" => Some("http://env-api".to_string()),
        "RESCUEDOGS_IMAGE_URL" => Some("http://env-images".to_string()),
        _ => None,
    });

    assert_eq!(config.api.base_url, "http://env-api");
    assert_eq!(config.images.base_url, "http://env-images");
}

#[test]
fn test_empty_env_value_ignored() {
    let mut config = Config::default();

    config.apply_env(|_| Some(String::new()));

    assert_eq!(config.api.base_url, "https://api.rescuedogs.me");
}

#[test]
fn test_cli_overrides_env() {
    let mut config = Config::default();
    config.apply_env(|key| (key == "RESCUEDOGS_API_URL").then(|| "http://env".to_string()));

    config.apply_overrides(CliOverrides {
        api_url: Some("http://cli".to_string()),
        image_url: None,
        log_level: Some("warn".to_string()),
    });

    assert_eq!(config.api.base_url, "http://cli");
    assert_eq!(config.logging.level, "warn");
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_rejects_non_http_url() {
    let mut config = Config::default();
    config.api.base_url = "ftp://api.example".to_string();

    let err = config.validate().unwrap_err();

    assert!(err.to_string().contains("api.base_url"));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.images.timeout_secs = 0;

    let err = config.validate().unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidValue { field: "images.timeout_secs", .. }
    ));
}
