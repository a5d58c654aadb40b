mod cache_store;
mod image_fetcher;
mod rescue_api;

pub use cache_store::{CacheStats, CacheStore, CachedData};
pub use image_fetcher::{ImageData, ImageFetcher, IMAGE_MIME_TYPE};
pub use rescue_api::RescueApi;
