use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub social_media: BTreeMap<String, String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub ships_to: Vec<String>,
    #[serde(default)]
    pub service_regions: Vec<ServiceRegion>,
    #[serde(default)]
    pub adoption_fees: Option<AdoptionFees>,
    #[serde(default)]
    pub established_year: Option<i32>,
    #[serde(default)]
    pub total_dogs: u32,
    #[serde(default)]
    pub new_this_week: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRegion {
    pub country: String,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionFees {
    pub currency: String,
    pub amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Organization {
    /// Case-insensitive two-way containment match between a free-text query
    /// and the organization name.
    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return false;
        }
        let name = self.name.to_lowercase();
        name.contains(&query) || query.contains(&name)
    }
}
