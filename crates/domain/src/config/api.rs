use serde::{Deserialize, Serialize};

/// Upstream REST API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout for data endpoints (default: 10)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Delay before the single retry of a transient failure (default: 0)
    #[serde(default)]
    pub retry_backoff_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
            retry_backoff_ms: 0,
        }
    }
}

fn default_base_url() -> String {
    "https://api.rescuedogs.me".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("rescuedogs-mcp-server/{}", env!("CARGO_PKG_VERSION"))
}
