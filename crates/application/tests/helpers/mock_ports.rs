use async_trait::async_trait;
use rescuedogs_mcp_application::ports::{
    CacheStats, CacheStore, CachedData, ImageData, ImageFetcher, RescueApi,
};
use rescuedogs_mcp_domain::{
    BreedStats, Dog, DogSearchQuery, DomainError, EnhancedDogData, FilterCountsQuery,
    FilterCountsResponse, ImagePreset, Organization, OrganizationQuery, Statistics,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock RescueApi
// ============================================================================

#[derive(Default)]
struct ApiState {
    dogs: Vec<Dog>,
    enhanced: Vec<EnhancedDogData>,
    organizations: Vec<Organization>,
    breed_stats: BreedStats,
    statistics: Statistics,
    filter_counts: FilterCountsResponse,
    fail_search: Option<DomainError>,
    fail_enrichment: Option<DomainError>,
    fail_organizations: Option<DomainError>,
    search_queries: Vec<DogSearchQuery>,
    filter_queries: Vec<FilterCountsQuery>,
    organization_queries: Vec<OrganizationQuery>,
    bulk_requests: Vec<Vec<i64>>,
}

#[derive(Clone, Default)]
pub struct MockRescueApi {
    state: Arc<RwLock<ApiState>>,
    calls: Arc<Mutex<HashMap<&'static str, u64>>>,
}

impl MockRescueApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, op: &'static str) {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(op).or_insert(0) += 1;
        }
    }

    pub fn call_count(&self, op: &str) -> u64 {
        self.calls
            .lock()
            .map(|c| c.get(op).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    pub async fn set_dogs(&self, dogs: Vec<Dog>) {
        self.state.write().await.dogs = dogs;
    }

    pub async fn set_enhanced(&self, enhanced: Vec<EnhancedDogData>) {
        self.state.write().await.enhanced = enhanced;
    }

    pub async fn set_organizations(&self, orgs: Vec<Organization>) {
        self.state.write().await.organizations = orgs;
    }

    pub async fn set_breed_stats(&self, stats: BreedStats) {
        self.state.write().await.breed_stats = stats;
    }

    pub async fn set_statistics(&self, stats: Statistics) {
        self.state.write().await.statistics = stats;
    }

    pub async fn set_filter_counts(&self, counts: FilterCountsResponse) {
        self.state.write().await.filter_counts = counts;
    }

    pub async fn fail_search(&self, error: DomainError) {
        self.state.write().await.fail_search = Some(error);
    }

    pub async fn fail_enrichment(&self, error: DomainError) {
        self.state.write().await.fail_enrichment = Some(error);
    }

    pub async fn fail_organizations(&self, error: DomainError) {
        self.state.write().await.fail_organizations = Some(error);
    }

    pub async fn last_search(&self) -> Option<DogSearchQuery> {
        self.state.read().await.search_queries.last().cloned()
    }

    pub async fn last_filter_query(&self) -> Option<FilterCountsQuery> {
        self.state.read().await.filter_queries.last().cloned()
    }

    pub async fn last_organization_query(&self) -> Option<OrganizationQuery> {
        self.state.read().await.organization_queries.last().cloned()
    }

    pub async fn bulk_requests(&self) -> Vec<Vec<i64>> {
        self.state.read().await.bulk_requests.clone()
    }
}

#[async_trait]
impl RescueApi for MockRescueApi {
    async fn search_dogs(&self, query: &DogSearchQuery) -> Result<Vec<Dog>, DomainError> {
        self.record("search_dogs");
        let mut state = self.state.write().await;
        state.search_queries.push(query.clone());
        if let Some(e) = &state.fail_search {
            return Err(e.clone());
        }
        Ok(state.dogs.clone())
    }

    async fn get_dog_by_slug(&self, slug: &str) -> Result<Dog, DomainError> {
        self.record("get_dog_by_slug");
        self.state
            .read()
            .await
            .dogs
            .iter()
            .find(|d| d.slug == slug)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("The requested resource was not found".into()))
    }

    async fn get_enhanced_data(&self, dog_id: i64) -> Result<EnhancedDogData, DomainError> {
        self.record("get_enhanced_data");
        let state = self.state.read().await;
        if let Some(e) = &state.fail_enrichment {
            return Err(e.clone());
        }
        state
            .enhanced
            .iter()
            .find(|e| e.id == dog_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("enhanced data".into()))
    }

    async fn get_bulk_enhanced_data(
        &self,
        dog_ids: &[i64],
    ) -> Result<Vec<EnhancedDogData>, DomainError> {
        self.record("get_bulk_enhanced_data");
        let mut state = self.state.write().await;
        state.bulk_requests.push(dog_ids.to_vec());
        if let Some(e) = &state.fail_enrichment {
            return Err(e.clone());
        }
        Ok(state
            .enhanced
            .iter()
            .filter(|e| dog_ids.contains(&e.id))
            .cloned()
            .collect())
    }

    async fn get_breed_stats(&self) -> Result<BreedStats, DomainError> {
        self.record("get_breed_stats");
        Ok(self.state.read().await.breed_stats.clone())
    }

    async fn get_breeds(&self, _breed_group: Option<&str>) -> Result<Vec<String>, DomainError> {
        self.record("get_breeds");
        Ok(vec![])
    }

    async fn get_statistics(&self) -> Result<Statistics, DomainError> {
        self.record("get_statistics");
        Ok(self.state.read().await.statistics.clone())
    }

    async fn get_filter_counts(
        &self,
        query: &FilterCountsQuery,
    ) -> Result<FilterCountsResponse, DomainError> {
        self.record("get_filter_counts");
        let mut state = self.state.write().await;
        state.filter_queries.push(query.clone());
        Ok(state.filter_counts.clone())
    }

    async fn get_organizations(
        &self,
        query: &OrganizationQuery,
    ) -> Result<Vec<Organization>, DomainError> {
        self.record("get_organizations");
        let mut state = self.state.write().await;
        state.organization_queries.push(query.clone());
        if let Some(e) = &state.fail_organizations {
            return Err(e.clone());
        }
        Ok(state.organizations.clone())
    }

    async fn get_enhanced_organizations(&self) -> Result<Vec<Organization>, DomainError> {
        self.record("get_enhanced_organizations");
        Ok(self.state.read().await.organizations.clone())
    }
}

// ============================================================================
// Mock ImageFetcher
// ============================================================================

#[derive(Clone, Default)]
pub struct MockImageFetcher {
    failing_urls: Arc<RwLock<Vec<String>>>,
    call_count: Arc<AtomicU64>,
}

impl MockImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn fail_for(&self, url: &str) {
        self.failing_urls.write().await.push(url.to_string());
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ImageFetcher for MockImageFetcher {
    async fn fetch_image(
        &self,
        url: &str,
        preset: ImagePreset,
    ) -> Result<Option<ImageData>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if url.is_empty() {
            return Ok(None);
        }
        if self.failing_urls.read().await.iter().any(|u| u == url) {
            return Err(DomainError::Timeout);
        }
        Ok(Some(ImageData::jpeg(format!("{}|{}", url, preset))))
    }
}

// ============================================================================
// In-memory CacheStore (no expiry)
// ============================================================================

#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (CachedData, Option<Duration>)>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.entries
            .lock()
            .ok()
            .and_then(|e| e.get(key).and_then(|(_, ttl)| *ttl))
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .lock()
            .map(|e| e.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Option<CachedData> {
        let value = self
            .entries
            .lock()
            .ok()
            .and_then(|e| e.get(key).map(|(v, _)| v.clone()));
        match value {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        value
    }

    fn set(&self, key: &str, value: CachedData, ttl: Option<Duration>) {
        if let Ok(mut e) = self.entries.lock() {
            e.insert(key.to_string(), (value, ttl));
        }
    }

    fn has(&self, key: &str) -> bool {
        self.entries.lock().map(|e| e.contains_key(key)).unwrap_or(false)
    }

    fn delete(&self, key: &str) -> bool {
        self.entries
            .lock()
            .map(|mut e| e.remove(key).is_some())
            .unwrap_or(false)
    }

    fn flush(&self) {
        if let Ok(mut e) = self.entries.lock() {
            e.clear();
        }
    }

    fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    fn sweep_expired(&self) -> usize {
        0
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            keys: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
