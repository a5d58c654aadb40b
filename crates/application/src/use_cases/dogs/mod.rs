mod get_dog_details;
mod match_preferences;
mod search_dogs;

pub use get_dog_details::{DogDetails, GetDogDetailsUseCase};
pub use match_preferences::{
    MatchPreferencesRequest, MatchPreferencesUseCase, MatchResult, MatchedCriteria,
};
pub use search_dogs::{SearchDogsRequest, SearchDogsUseCase};

use crate::ports::RescueApi;
use rescuedogs_mcp_domain::{Dog, EnhancedDogData};
use rustc_hash::FxHashMap;
use tracing::warn;

/// Dogs returned by a search together with whatever enrichment was available.
#[derive(Debug, Clone, Default)]
pub struct DogListing {
    pub dogs: Vec<Dog>,
    pub enhanced: FxHashMap<i64, EnhancedDogData>,
    pub limit: u32,
    pub offset: u32,
}

impl DogListing {
    pub fn count(&self) -> usize {
        self.dogs.len()
    }

    /// A full page suggests another page exists.
    pub fn has_more(&self) -> bool {
        self.dogs.len() == self.limit as usize
    }

    pub fn enhanced_for(&self, dog_id: i64) -> Option<&EnhancedDogData> {
        self.enhanced.get(&dog_id)
    }
}

/// Bulk enrichment for a page of dogs. A failure yields an empty map.
async fn bulk_enrichment(api: &dyn RescueApi, dogs: &[Dog]) -> FxHashMap<i64, EnhancedDogData> {
    if dogs.is_empty() {
        return FxHashMap::default();
    }

    let ids: Vec<i64> = dogs.iter().map(|d| d.id).collect();
    match api.get_bulk_enhanced_data(&ids).await {
        Ok(records) => records.into_iter().map(|e| (e.id, e)).collect(),
        Err(e) => {
            warn!(dogs = ids.len(), error = %e, "Enhanced data fetch failed");
            FxHashMap::default()
        }
    }
}
