use rescuedogs_mcp_domain::{BreedStats, FilterCountsResponse, Organization, Statistics};
use std::sync::Arc;
use std::time::Duration;

use super::ImageData;

/// Payloads the response cache can hold. Values are shared, never copied.
#[derive(Debug, Clone)]
pub enum CachedData {
    BreedStats(Arc<BreedStats>),
    Statistics(Arc<Statistics>),
    Organizations(Arc<Vec<Organization>>),
    FilterCounts(Arc<FilterCountsResponse>),
    Image(Arc<ImageData>),
}

impl CachedData {
    pub fn into_breed_stats(self) -> Option<Arc<BreedStats>> {
        match self {
            CachedData::BreedStats(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_statistics(self) -> Option<Arc<Statistics>> {
        match self {
            CachedData::Statistics(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_organizations(self) -> Option<Arc<Vec<Organization>>> {
        match self {
            CachedData::Organizations(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_filter_counts(self) -> Option<Arc<FilterCountsResponse>> {
        match self {
            CachedData::FilterCounts(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_image(self) -> Option<Arc<ImageData>> {
        match self {
            CachedData::Image(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub keys: usize,
    pub hits: u64,
    pub misses: u64,
}

/// TTL key/value store shared by all use cases.
///
/// `get` treats an expired entry as absent. `set` overwrites; `None` as TTL
/// means the store's default lifetime.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<CachedData>;

    fn set(&self, key: &str, value: CachedData, ttl: Option<Duration>);

    fn has(&self, key: &str) -> bool;

    fn delete(&self, key: &str) -> bool;

    /// Drop every entry at once.
    fn flush(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove expired entries, returning how many were dropped.
    fn sweep_expired(&self) -> usize;

    fn stats(&self) -> CacheStats;
}
