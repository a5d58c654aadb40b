use rescuedogs_mcp_domain::{
    normalize_country_for_api, ActivityLevel, DogSearchQuery, DomainError, EnergyLevel,
    Experience, ExperienceLevel, HomeType, LivingSituation,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{bulk_enrichment, DogListing};
use crate::ports::RescueApi;

#[derive(Debug, Clone)]
pub struct MatchPreferencesRequest {
    pub living_situation: LivingSituation,
    pub activity_level: ActivityLevel,
    pub experience: Experience,
    pub has_children: Option<bool>,
    pub has_other_dogs: Option<bool>,
    pub has_cats: Option<bool>,
    pub adoptable_to_country: Option<String>,
    pub limit: u32,
}

/// Backend filters derived from the caller's lifestyle answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedCriteria {
    pub home_type: HomeType,
    pub energy_level: EnergyLevel,
    pub experience_level: ExperienceLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_with_kids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_with_dogs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_with_cats: Option<bool>,
}

impl MatchedCriteria {
    pub fn from_request(request: &MatchPreferencesRequest) -> Self {
        Self {
            home_type: request.living_situation.home_type(),
            energy_level: request.activity_level.energy_level(),
            experience_level: request.experience.experience_level(),
            good_with_kids: request.has_children,
            good_with_dogs: request.has_other_dogs,
            good_with_cats: request.has_cats,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub criteria: MatchedCriteria,
    pub listing: DogListing,
}

pub struct MatchPreferencesUseCase {
    api: Arc<dyn RescueApi>,
}

impl MatchPreferencesUseCase {
    pub fn new(api: Arc<dyn RescueApi>) -> Self {
        Self { api }
    }

    #[instrument(skip(self, request), fields(limit = request.limit))]
    pub async fn execute(&self, request: &MatchPreferencesRequest) -> Result<MatchResult, DomainError> {
        let criteria = MatchedCriteria::from_request(request);

        let query = DogSearchQuery {
            home_type: Some(criteria.home_type),
            energy_level: Some(criteria.energy_level),
            experience_level: Some(criteria.experience_level),
            available_to_country: normalize_country_for_api(
                request.adoptable_to_country.as_deref(),
            ),
            good_with_kids: criteria.good_with_kids,
            good_with_dogs: criteria.good_with_dogs,
            good_with_cats: criteria.good_with_cats,
            limit: Some(request.limit),
            ..Default::default()
        };

        let dogs = self.api.search_dogs(&query).await?;
        let enhanced = bulk_enrichment(self.api.as_ref(), &dogs).await;

        info!(
            home_type = %criteria.home_type,
            energy_level = %criteria.energy_level,
            experience_level = %criteria.experience_level,
            results = dogs.len(),
            "Preference match completed"
        );

        Ok(MatchResult {
            criteria,
            listing: DogListing {
                dogs,
                enhanced,
                limit: request.limit,
                offset: 0,
            },
        })
    }
}
