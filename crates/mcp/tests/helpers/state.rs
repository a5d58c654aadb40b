use super::{MockImageFetcher, MockRescueApi};
use rescuedogs_mcp_application::ports::{CacheStore, RescueApi};
use rescuedogs_mcp_application::use_cases::{
    FetchImagesUseCase, GetAdoptionGuideUseCase, GetDogDetailsUseCase, GetFilterCountsUseCase,
    GetStatisticsUseCase, ListBreedsUseCase, ListOrganizationsUseCase, MatchPreferencesUseCase,
    SearchDogsUseCase,
};
use rescuedogs_mcp_infrastructure::cache::ResponseCache;
use rescuedogs_mcp_server::state::DEFAULT_MAX_IMAGES;
use rescuedogs_mcp_server::{McpServer, McpState};
use std::sync::Arc;
use std::time::Duration;

pub struct TestContext {
    pub api: MockRescueApi,
    pub images: MockImageFetcher,
    pub cache: Arc<ResponseCache>,
    pub state: McpState,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_max_images(DEFAULT_MAX_IMAGES)
    }

    pub fn with_max_images(max_images: usize) -> Self {
        let api = MockRescueApi::new();
        let images = MockImageFetcher::new();
        let cache = Arc::new(ResponseCache::new(Duration::from_secs(600)));

        let api_port: Arc<dyn RescueApi> = Arc::new(api.clone());
        let cache_port: Arc<dyn CacheStore> = cache.clone();

        let state = McpState {
            search_dogs: Arc::new(SearchDogsUseCase::new(
                api_port.clone(),
                cache_port.clone(),
            )),
            get_dog_details: Arc::new(GetDogDetailsUseCase::new(api_port.clone())),
            list_breeds: Arc::new(ListBreedsUseCase::new(api_port.clone(), cache_port.clone())),
            get_statistics: Arc::new(GetStatisticsUseCase::new(
                api_port.clone(),
                cache_port.clone(),
            )),
            get_filter_counts: Arc::new(GetFilterCountsUseCase::new(
                api_port.clone(),
                cache_port.clone(),
            )),
            list_organizations: Arc::new(ListOrganizationsUseCase::new(
                api_port.clone(),
                cache_port.clone(),
            )),
            match_preferences: Arc::new(MatchPreferencesUseCase::new(api_port)),
            fetch_images: Arc::new(FetchImagesUseCase::new(
                Arc::new(images.clone()),
                cache_port,
            )),
            adoption_guide: Arc::new(GetAdoptionGuideUseCase::new()),
            max_images,
        };

        Self {
            api,
            images,
            cache,
            state,
        }
    }

    pub fn server(&self) -> Arc<McpServer> {
        Arc::new(McpServer::new(self.state.clone()))
    }
}
