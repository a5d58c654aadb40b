use rescuedogs_mcp_domain::{cache::statistics_key, CacheCategory, DomainError, Statistics};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{CacheStore, CachedData, RescueApi};

pub struct GetStatisticsUseCase {
    api: Arc<dyn RescueApi>,
    cache: Arc<dyn CacheStore>,
}

impl GetStatisticsUseCase {
    pub fn new(api: Arc<dyn RescueApi>, cache: Arc<dyn CacheStore>) -> Self {
        Self { api, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Arc<Statistics>, DomainError> {
        let key = statistics_key();
        if let Some(stats) = self.cache.get(&key).and_then(CachedData::into_statistics) {
            debug!(key = %key, "Cache HIT");
            return Ok(stats);
        }
        debug!(key = %key, "Cache MISS");

        let stats = Arc::new(self.api.get_statistics().await?);
        self.cache.set(
            &key,
            CachedData::Statistics(Arc::clone(&stats)),
            Some(CacheCategory::Statistics.default_ttl()),
        );
        Ok(stats)
    }
}
