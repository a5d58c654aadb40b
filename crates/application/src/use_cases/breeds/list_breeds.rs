use rescuedogs_mcp_domain::{cache::breed_stats_key, BreedStats, CacheCategory, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{CacheStore, CachedData, RescueApi};

pub struct ListBreedsUseCase {
    api: Arc<dyn RescueApi>,
    cache: Arc<dyn CacheStore>,
}

impl ListBreedsUseCase {
    pub fn new(api: Arc<dyn RescueApi>, cache: Arc<dyn CacheStore>) -> Self {
        Self { api, cache }
    }

    /// Cached breed statistics narrowed to `breed_group` and `min_count`.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        breed_group: Option<&str>,
        min_count: u64,
    ) -> Result<Arc<BreedStats>, DomainError> {
        let stats = self.breed_stats().await?;

        if breed_group.is_none() && min_count <= 1 {
            return Ok(stats);
        }
        Ok(Arc::new(stats.filtered(breed_group, min_count)))
    }

    async fn breed_stats(&self) -> Result<Arc<BreedStats>, DomainError> {
        let key = breed_stats_key();
        if let Some(stats) = self.cache.get(&key).and_then(CachedData::into_breed_stats) {
            debug!(key = %key, "Cache HIT");
            return Ok(stats);
        }
        debug!(key = %key, "Cache MISS");

        let stats = Arc::new(self.api.get_breed_stats().await?);
        self.cache.set(
            &key,
            CachedData::BreedStats(Arc::clone(&stats)),
            Some(CacheCategory::BreedStats.default_ttl()),
        );
        Ok(stats)
    }
}
