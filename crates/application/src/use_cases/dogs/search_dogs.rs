use rescuedogs_mcp_domain::{
    cache::organizations_key, normalize_country_for_api, AgeCategory, CacheCategory,
    DogSearchQuery, DomainError, EnergyLevel, ExperienceLevel, HomeType, Organization,
    OrganizationQuery, Sex, Size,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{bulk_enrichment, DogListing};
use crate::ports::{CacheStore, CachedData, RescueApi};

/// Search input in caller vocabulary.
#[derive(Debug, Clone)]
pub struct SearchDogsRequest {
    pub query: Option<String>,
    pub breed: Option<String>,
    pub breed_group: Option<String>,
    pub size: Option<Size>,
    pub age_category: Option<AgeCategory>,
    pub sex: Option<Sex>,
    pub energy_level: Option<EnergyLevel>,
    pub experience_level: Option<ExperienceLevel>,
    pub home_type: Option<HomeType>,
    pub adoptable_to_country: Option<String>,
    pub organization_id: Option<i64>,
    pub good_with_kids: Option<bool>,
    pub good_with_dogs: Option<bool>,
    pub good_with_cats: Option<bool>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for SearchDogsRequest {
    fn default() -> Self {
        Self {
            query: None,
            breed: None,
            breed_group: None,
            size: None,
            age_category: None,
            sex: None,
            energy_level: None,
            experience_level: None,
            home_type: None,
            adoptable_to_country: None,
            organization_id: None,
            good_with_kids: None,
            good_with_dogs: None,
            good_with_cats: None,
            limit: 10,
            offset: 0,
        }
    }
}

pub struct SearchDogsUseCase {
    api: Arc<dyn RescueApi>,
    cache: Arc<dyn CacheStore>,
}

impl SearchDogsUseCase {
    pub fn new(api: Arc<dyn RescueApi>, cache: Arc<dyn CacheStore>) -> Self {
        Self { api, cache }
    }

    #[instrument(skip(self, request), fields(limit = request.limit, offset = request.offset))]
    pub async fn execute(&self, request: SearchDogsRequest) -> Result<DogListing, DomainError> {
        let mut search = request.query.clone().filter(|q| !q.trim().is_empty());
        let mut organization_id = request.organization_id;

        // A free-text query naming a rescue becomes an organization filter.
        if organization_id.is_none() {
            if let Some(query) = search.as_deref() {
                if let Some(org) = self.match_organization(query).await {
                    debug!(org_id = org.id, org = %org.name, "Query matched organization");
                    organization_id = Some(org.id);
                    search = None;
                }
            }
        }

        let query = DogSearchQuery {
            search,
            breed: request.breed,
            breed_group: request.breed_group,
            standardized_size: request.size,
            age_category: request.age_category,
            sex: request.sex,
            energy_level: request.energy_level,
            home_type: request.home_type,
            experience_level: request.experience_level,
            available_to_country: normalize_country_for_api(
                request.adoptable_to_country.as_deref(),
            ),
            organization_id,
            good_with_kids: request.good_with_kids,
            good_with_dogs: request.good_with_dogs,
            good_with_cats: request.good_with_cats,
            limit: Some(request.limit),
            offset: Some(request.offset),
        };

        let dogs = self.api.search_dogs(&query).await?;
        let enhanced = bulk_enrichment(self.api.as_ref(), &dogs).await;

        info!(
            results = dogs.len(),
            enhanced = enhanced.len(),
            "Dog search completed"
        );

        Ok(DogListing {
            dogs,
            enhanced,
            limit: request.limit,
            offset: request.offset,
        })
    }

    async fn match_organization(&self, query: &str) -> Option<Organization> {
        let orgs = self.active_organizations().await?;
        orgs.iter().find(|o| o.matches_name(query)).cloned()
    }

    async fn active_organizations(&self) -> Option<Arc<Vec<Organization>>> {
        let key = organizations_key();
        if let Some(orgs) = self.cache.get(&key).and_then(CachedData::into_organizations) {
            debug!(key = %key, "Cache HIT");
            return Some(orgs);
        }
        debug!(key = %key, "Cache MISS");

        match self.api.get_organizations(&OrganizationQuery::active()).await {
            Ok(orgs) => {
                let orgs = Arc::new(orgs);
                self.cache.set(
                    &key,
                    CachedData::Organizations(Arc::clone(&orgs)),
                    Some(CacheCategory::Organizations.default_ttl()),
                );
                Some(orgs)
            }
            Err(e) => {
                warn!(error = %e, "Organization lookup failed, searching by text");
                None
            }
        }
    }
}
