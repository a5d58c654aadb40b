use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate breed statistics from `/api/animals/breeds/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedStats {
    pub total_dogs: u64,
    pub unique_breeds: u64,
    pub purebred_count: u64,
    pub crossbreed_count: u64,
    pub breed_groups: Vec<BreedGroupCount>,
    pub qualifying_breeds: Vec<QualifyingBreed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedGroupCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualifyingBreed {
    pub primary_breed: String,
    pub breed_slug: Option<String>,
    pub breed_type: Option<String>,
    pub breed_group: Option<String>,
    pub count: u64,
    pub average_age_months: Option<f64>,
    pub organization_count: u64,
    pub organizations: Vec<String>,
    pub age_distribution: Option<BTreeMap<String, u64>>,
    pub size_distribution: Option<BTreeMap<String, u64>>,
    pub sex_distribution: Option<BTreeMap<String, u64>>,
    pub personality_traits: Vec<String>,
    pub experience_distribution: Option<BTreeMap<String, u64>>,
    pub personality_metrics: Option<BTreeMap<String, MetricValue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub percentage: f64,
    pub label: String,
}

impl BreedStats {
    /// Keep only breeds of the given group (case-insensitive) with at least
    /// `min_count` dogs. Aggregate counters are left untouched.
    pub fn filtered(&self, breed_group: Option<&str>, min_count: u64) -> BreedStats {
        let group = breed_group.map(str::to_lowercase);
        let qualifying_breeds = self
            .qualifying_breeds
            .iter()
            .filter(|b| match &group {
                Some(g) => b
                    .breed_group
                    .as_deref()
                    .is_some_and(|bg| bg.to_lowercase() == *g),
                None => true,
            })
            .filter(|b| min_count <= 1 || b.count >= min_count)
            .cloned()
            .collect();

        BreedStats {
            qualifying_breeds,
            ..self.clone()
        }
    }
}

/// Platform-wide statistics from `/api/animals/statistics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_dogs: u64,
    pub total_organizations: u64,
    pub countries: Vec<CountryStats>,
    pub organizations: Vec<OrganizationStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryStats {
    pub country: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationStats {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub dog_count: u64,
    pub new_this_week: u64,
    pub logo_url: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub ships_to: Vec<String>,
    pub service_regions: Vec<String>,
    pub social_media: BTreeMap<String, String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
}

impl Statistics {
    pub fn new_this_week(&self) -> u64 {
        self.organizations.iter().map(|o| o.new_this_week).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub count: u64,
}

/// Remaining filter options from `/api/animals/meta/filter_counts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCountsResponse {
    pub size_options: Vec<FilterOption>,
    pub age_options: Vec<FilterOption>,
    pub sex_options: Vec<FilterOption>,
    pub breed_options: Vec<FilterOption>,
    pub organization_options: Vec<FilterOption>,
    pub location_country_options: Vec<FilterOption>,
    pub available_country_options: Vec<FilterOption>,
    pub available_region_options: Vec<FilterOption>,
}

impl FilterCountsResponse {
    /// Destination countries sorted by count, most dogs first. Stable for ties.
    pub fn countries_by_count(&self) -> Vec<FilterOption> {
        let mut sorted = self.available_country_options.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}
