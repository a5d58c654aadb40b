use async_trait::async_trait;
use rescuedogs_mcp_domain::{
    BreedStats, Dog, DogSearchQuery, DomainError, EnhancedDogData, FilterCountsQuery,
    FilterCountsResponse, Organization, OrganizationQuery, Statistics,
};

/// Upstream rescue dogs REST API.
///
/// Implementations apply the mandatory availability constraints to searches,
/// retry transient failures once and classify every failure into a
/// [`DomainError`].
#[async_trait]
pub trait RescueApi: Send + Sync {
    async fn search_dogs(&self, query: &DogSearchQuery) -> Result<Vec<Dog>, DomainError>;

    async fn get_dog_by_slug(&self, slug: &str) -> Result<Dog, DomainError>;

    async fn get_enhanced_data(&self, dog_id: i64) -> Result<EnhancedDogData, DomainError>;

    /// One request for the whole id list.
    async fn get_bulk_enhanced_data(
        &self,
        dog_ids: &[i64],
    ) -> Result<Vec<EnhancedDogData>, DomainError>;

    async fn get_breed_stats(&self) -> Result<BreedStats, DomainError>;

    async fn get_breeds(&self, breed_group: Option<&str>) -> Result<Vec<String>, DomainError>;

    async fn get_statistics(&self) -> Result<Statistics, DomainError>;

    async fn get_filter_counts(
        &self,
        query: &FilterCountsQuery,
    ) -> Result<FilterCountsResponse, DomainError>;

    async fn get_organizations(
        &self,
        query: &OrganizationQuery,
    ) -> Result<Vec<Organization>, DomainError>;

    async fn get_enhanced_organizations(&self) -> Result<Vec<Organization>, DomainError>;
}
