use super::{ApiConfig, CacheConfig, ConfigError, ImagesConfig, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ENV_API_URL: &str = "RESCUEDOGS_API_URL";
pub const ENV_IMAGE_URL: &str = "RESCUEDOGS_IMAGE_URL";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line. They win over the file and the
/// environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub image_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Defaults, then the optional TOML file, then environment, then CLI.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `RESCUEDOGS_API_URL` / `RESCUEDOGS_IMAGE_URL`. Empty values are
    /// ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(url) = lookup(ENV_IMAGE_URL).filter(|v| !v.trim().is_empty()) {
            self.images.base_url = url;
        }
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.api_url {
            self.api.base_url = url;
        }
        if let Some(url) = overrides.image_url {
            self.images.base_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("api.base_url", &self.api.base_url)?;
        validate_url("images.base_url", &self.images.base_url)?;

        if self.api.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.request_timeout_secs",
                reason: "must be > 0".to_string(),
            });
        }
        if self.images.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "images.timeout_secs",
                reason: "must be > 0".to_string(),
            });
        }
        if self.images.cdn_domain.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "images.cdn_domain",
                reason: "must not be empty".to_string(),
            });
        }
        if self.cache.default_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.default_ttl_secs",
                reason: "must be > 0".to_string(),
            });
        }
        if self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.sweep_interval_secs",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.images.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.api.retry_backoff_ms)
    }

    pub fn default_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.default_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.cache.sweep_interval_secs)
    }
}

fn validate_url(field: &'static str, url: &str) -> Result<(), ConfigError> {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ConfigError::InvalidValue {
            field,
            reason: format!("'{}' is not an http(s) URL", url),
        }),
    }
}
