use rescuedogs_mcp_domain::{
    cache::organizations_key, normalize_country_for_api, CacheCategory, DomainError,
    Organization, OrganizationQuery,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::{CacheStore, CachedData, RescueApi};

pub struct ListOrganizationsUseCase {
    api: Arc<dyn RescueApi>,
    cache: Arc<dyn CacheStore>,
}

impl ListOrganizationsUseCase {
    pub fn new(api: Arc<dyn RescueApi>, cache: Arc<dyn CacheStore>) -> Self {
        Self { api, cache }
    }

    /// Only the unfiltered listing (no country) goes through the cache.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        country: Option<&str>,
        active_only: bool,
        limit: u32,
    ) -> Result<Arc<Vec<Organization>>, DomainError> {
        let country = normalize_country_for_api(country);
        let key = organizations_key();

        if country.is_none() {
            if let Some(orgs) = self.cache.get(&key).and_then(CachedData::into_organizations) {
                debug!(key = %key, "Cache HIT");
                return Ok(orgs);
            }
            debug!(key = %key, "Cache MISS");
        }

        let query = OrganizationQuery {
            country: country.clone(),
            active_only: Some(active_only),
            limit: Some(limit),
            offset: None,
        };
        let orgs = Arc::new(self.api.get_organizations(&query).await?);

        if country.is_none() {
            self.cache.set(
                &key,
                CachedData::Organizations(Arc::clone(&orgs)),
                Some(CacheCategory::Organizations.default_ttl()),
            );
        }

        info!(count = orgs.len(), country = ?country, "Organizations listed");
        Ok(orgs)
    }
}
