use serde::{Deserialize, Serialize};

/// Logging configuration. Output always goes to stderr.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (default: "info").
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
