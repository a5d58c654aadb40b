use rescuedogs_mcp_domain::{
    cache::filter_counts_key, CacheCategory, DomainError, FilterCountsResponse, FilterCriteria,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{CacheStore, CachedData, RescueApi};

pub struct GetFilterCountsUseCase {
    api: Arc<dyn RescueApi>,
    cache: Arc<dyn CacheStore>,
}

impl GetFilterCountsUseCase {
    pub fn new(api: Arc<dyn RescueApi>, cache: Arc<dyn CacheStore>) -> Self {
        Self { api, cache }
    }

    /// Filter counts are cached per distinct filter set.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        filters: &FilterCriteria,
    ) -> Result<Arc<FilterCountsResponse>, DomainError> {
        let key = filter_counts_key(&filters.filter_hash());
        if let Some(counts) = self.cache.get(&key).and_then(CachedData::into_filter_counts) {
            debug!(key = %key, "Cache HIT");
            return Ok(counts);
        }
        debug!(key = %key, "Cache MISS");

        let counts = Arc::new(self.api.get_filter_counts(&filters.to_query()).await?);
        self.cache.set(
            &key,
            CachedData::FilterCounts(Arc::clone(&counts)),
            Some(CacheCategory::FilterCounts.default_ttl()),
        );
        Ok(counts)
    }
}
