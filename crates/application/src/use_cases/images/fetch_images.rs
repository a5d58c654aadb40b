use futures::future::join_all;
use rescuedogs_mcp_domain::{cache::image_key, CacheCategory, ImagePreset};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{CacheStore, CachedData, ImageData, ImageFetcher};

/// Image retrieval never fails: any problem yields "no image".
pub struct FetchImagesUseCase {
    fetcher: Arc<dyn ImageFetcher>,
    cache: Arc<dyn CacheStore>,
}

impl FetchImagesUseCase {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, cache: Arc<dyn CacheStore>) -> Self {
        Self { fetcher, cache }
    }

    #[instrument(skip(self))]
    pub async fn fetch_one(&self, url: Option<&str>, preset: ImagePreset) -> Option<Arc<ImageData>> {
        let url = url.filter(|u| !u.is_empty())?;

        let key = image_key(url, preset);
        if let Some(image) = self.cache.get(&key).and_then(CachedData::into_image) {
            debug!(key = %key, "Cache HIT");
            return Some(image);
        }

        match self.fetcher.fetch_image(url, preset).await {
            Ok(Some(image)) => {
                let image = Arc::new(image);
                self.cache.set(
                    &key,
                    CachedData::Image(Arc::clone(&image)),
                    Some(CacheCategory::Image.default_ttl()),
                );
                Some(image)
            }
            Ok(None) => None,
            Err(e) => {
                debug!(url = %url, error = %e, "Image fetch failed");
                None
            }
        }
    }

    /// Concurrent fetch with one output slot per input, in order.
    pub async fn fetch_many(
        &self,
        urls: &[Option<&str>],
        preset: ImagePreset,
    ) -> Vec<Option<Arc<ImageData>>> {
        join_all(urls.iter().map(|url| self.fetch_one(*url, preset))).await
    }
}
