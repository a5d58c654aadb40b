use serde::{Deserialize, Serialize};

/// Image CDN settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImagesConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Only image URLs whose host contains this domain are rewritten
    /// through the transform endpoint.
    #[serde(default = "default_cdn_domain")]
    pub cdn_domain: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound on images attached to a single list response
    #[serde(default = "default_max_images")]
    pub max_images: usize,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cdn_domain: default_cdn_domain(),
            timeout_secs: default_timeout_secs(),
            max_images: default_max_images(),
        }
    }
}

fn default_base_url() -> String {
    "https://images.rescuedogs.me".to_string()
}

fn default_cdn_domain() -> String {
    "rescuedogs.me".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_images() -> usize {
    5
}
