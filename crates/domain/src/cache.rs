use crate::vocabulary::ImagePreset;
use std::time::Duration;

/// Lifetime applied when a write does not name one.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// Partition of the response cache key space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheCategory {
    BreedStats,
    Statistics,
    Organizations,
    FilterCounts,
    Image,
}

impl CacheCategory {
    pub fn default_ttl(&self) -> Duration {
        match self {
            CacheCategory::BreedStats
            | CacheCategory::Statistics
            | CacheCategory::Organizations => Duration::from_secs(10 * 60),
            CacheCategory::FilterCounts => Duration::from_secs(5 * 60),
            CacheCategory::Image => Duration::from_secs(30 * 60),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheCategory::BreedStats => "breed_stats",
            CacheCategory::Statistics => "statistics",
            CacheCategory::Organizations => "organizations",
            CacheCategory::FilterCounts => "filter_counts",
            CacheCategory::Image => "image",
        }
    }
}

pub fn breed_stats_key() -> String {
    CacheCategory::BreedStats.as_str().to_string()
}

pub fn statistics_key() -> String {
    CacheCategory::Statistics.as_str().to_string()
}

pub fn organizations_key() -> String {
    CacheCategory::Organizations.as_str().to_string()
}

pub fn filter_counts_key(filter_hash: &str) -> String {
    format!("filter_counts:{}", filter_hash)
}

pub fn image_key(url: &str, preset: ImagePreset) -> String {
    format!("image:{}:{}", url, preset)
}
