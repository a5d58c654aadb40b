use rescuedogs_mcp_domain::{Dog, DomainError, EnhancedDogData};
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::ports::RescueApi;

#[derive(Debug, Clone)]
pub struct DogDetails {
    pub dog: Dog,
    pub enhanced: Option<EnhancedDogData>,
}

pub struct GetDogDetailsUseCase {
    api: Arc<dyn RescueApi>,
}

impl GetDogDetailsUseCase {
    pub fn new(api: Arc<dyn RescueApi>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, slug: &str) -> Result<DogDetails, DomainError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(DomainError::InvalidInput("slug must not be empty".to_string()));
        }

        let dog = self.api.get_dog_by_slug(slug).await?;

        let enhanced = match self.api.get_enhanced_data(dog.id).await {
            Ok(data) => Some(data),
            Err(e) => {
                warn!(dog_id = dog.id, error = %e, "Enhanced data fetch failed");
                None
            }
        };

        Ok(DogDetails { dog, enhanced })
    }
}
