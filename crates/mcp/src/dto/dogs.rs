use super::check_range;
use rescuedogs_mcp_application::use_cases::{MatchPreferencesRequest, SearchDogsRequest};
use rescuedogs_mcp_domain::{
    ActivityLevel, AgeCategory, DomainError, EnergyLevel, Experience, ExperienceLevel, HomeType,
    ImagePreset, LivingSituation, ResponseFormat, Sex, Size,
};
use serde::Deserialize;

fn default_search_limit() -> u32 {
    10
}

fn default_match_limit() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_medium_preset() -> ImagePreset {
    ImagePreset::Medium
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchDogsInput {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub breed_group: Option<String>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub age_category: Option<AgeCategory>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub energy_level: Option<EnergyLevel>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub home_type: Option<HomeType>,
    #[serde(default)]
    pub adoptable_to_country: Option<String>,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub good_with_kids: Option<bool>,
    #[serde(default)]
    pub good_with_dogs: Option<bool>,
    #[serde(default)]
    pub good_with_cats: Option<bool>,
    #[serde(default = "default_search_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub include_images: bool,
    #[serde(default)]
    pub image_preset: ImagePreset,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl SearchDogsInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_range("limit", self.limit, 1, 50)
    }

    pub fn to_request(&self) -> SearchDogsRequest {
        SearchDogsRequest {
            query: self.query.clone(),
            breed: self.breed.clone(),
            breed_group: self.breed_group.clone(),
            size: self.size,
            age_category: self.age_category,
            sex: self.sex,
            energy_level: self.energy_level,
            experience_level: self.experience_level,
            home_type: self.home_type,
            adoptable_to_country: self.adoptable_to_country.clone(),
            organization_id: self.organization_id,
            good_with_kids: self.good_with_kids,
            good_with_dogs: self.good_with_dogs,
            good_with_cats: self.good_with_cats,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetDogDetailsInput {
    pub slug: String,
    #[serde(default = "default_true")]
    pub include_image: bool,
    #[serde(default = "default_medium_preset")]
    pub image_preset: ImagePreset,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchPreferencesInput {
    pub living_situation: LivingSituation,
    pub activity_level: ActivityLevel,
    pub experience: Experience,
    #[serde(default)]
    pub has_children: Option<bool>,
    #[serde(default)]
    pub has_other_dogs: Option<bool>,
    #[serde(default)]
    pub has_cats: Option<bool>,
    #[serde(default)]
    pub adoptable_to_country: Option<String>,
    #[serde(default = "default_match_limit")]
    pub limit: u32,
    #[serde(default)]
    pub include_images: bool,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl MatchPreferencesInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_range("limit", self.limit, 1, 20)
    }

    pub fn to_request(&self) -> MatchPreferencesRequest {
        MatchPreferencesRequest {
            living_situation: self.living_situation,
            activity_level: self.activity_level,
            experience: self.experience,
            has_children: self.has_children,
            has_other_dogs: self.has_other_dogs,
            has_cats: self.has_cats,
            adoptable_to_country: self.adoptable_to_country.clone(),
            limit: self.limit,
        }
    }
}
