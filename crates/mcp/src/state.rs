use rescuedogs_mcp_application::use_cases::{
    FetchImagesUseCase, GetAdoptionGuideUseCase, GetDogDetailsUseCase, GetFilterCountsUseCase,
    GetStatisticsUseCase, ListBreedsUseCase, ListOrganizationsUseCase, MatchPreferencesUseCase,
    SearchDogsUseCase,
};
use std::sync::Arc;

/// Upper bound on images attached to a list response.
pub const DEFAULT_MAX_IMAGES: usize = 5;

#[derive(Clone)]
pub struct McpState {
    pub search_dogs: Arc<SearchDogsUseCase>,
    pub get_dog_details: Arc<GetDogDetailsUseCase>,
    pub list_breeds: Arc<ListBreedsUseCase>,
    pub get_statistics: Arc<GetStatisticsUseCase>,
    pub get_filter_counts: Arc<GetFilterCountsUseCase>,
    pub list_organizations: Arc<ListOrganizationsUseCase>,
    pub match_preferences: Arc<MatchPreferencesUseCase>,
    pub fetch_images: Arc<FetchImagesUseCase>,
    pub adoption_guide: Arc<GetAdoptionGuideUseCase>,
    pub max_images: usize,
}
