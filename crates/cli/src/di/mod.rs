use rescuedogs_mcp_application::ports::{CacheStore, ImageFetcher, RescueApi};
use rescuedogs_mcp_application::use_cases::{
    FetchImagesUseCase, GetAdoptionGuideUseCase, GetDogDetailsUseCase, GetFilterCountsUseCase,
    GetStatisticsUseCase, ListBreedsUseCase, ListOrganizationsUseCase, MatchPreferencesUseCase,
    SearchDogsUseCase,
};
use rescuedogs_mcp_domain::Config;
use rescuedogs_mcp_infrastructure::cache::ResponseCache;
use rescuedogs_mcp_infrastructure::http::{BackendClient, CdnImageFetcher};
use rescuedogs_mcp_server::{McpServer, McpState};
use std::sync::Arc;
use tracing::info;

/// Everything the binary needs, wired once at startup.
pub struct Services {
    pub cache: Arc<ResponseCache>,
    pub server: Arc<McpServer>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let api: Arc<dyn RescueApi> = Arc::new(BackendClient::from_config(config)?);
        let images: Arc<dyn ImageFetcher> = Arc::new(CdnImageFetcher::from_config(config)?);
        let cache = Arc::new(ResponseCache::new(config.default_cache_ttl()));
        let store: Arc<dyn CacheStore> = cache.clone();

        let state = McpState {
            search_dogs: Arc::new(SearchDogsUseCase::new(api.clone(), store.clone())),
            get_dog_details: Arc::new(GetDogDetailsUseCase::new(api.clone())),
            list_breeds: Arc::new(ListBreedsUseCase::new(api.clone(), store.clone())),
            get_statistics: Arc::new(GetStatisticsUseCase::new(api.clone(), store.clone())),
            get_filter_counts: Arc::new(GetFilterCountsUseCase::new(api.clone(), store.clone())),
            list_organizations: Arc::new(ListOrganizationsUseCase::new(
                api.clone(),
                store.clone(),
            )),
            match_preferences: Arc::new(MatchPreferencesUseCase::new(api)),
            fetch_images: Arc::new(FetchImagesUseCase::new(images, store)),
            adoption_guide: Arc::new(GetAdoptionGuideUseCase::new()),
            max_images: config.images.max_images,
        };

        info!(max_images = state.max_images, "Services initialized");

        Ok(Self {
            cache,
            server: Arc::new(McpServer::new(state)),
        })
    }
}
