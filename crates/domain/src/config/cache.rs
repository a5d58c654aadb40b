use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// TTL for writes that do not name a category lifetime (default: 600)
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: u64,

    /// Interval between expired-entry sweeps (default: 120)
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    600
}

fn default_sweep_interval_secs() -> u64 {
    120
}
