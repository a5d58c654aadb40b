use async_trait::async_trait;
use rescuedogs_mcp_domain::{DomainError, ImagePreset};

pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Base64 image payload ready to embed in a tool result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub data: String,
    pub mime_type: &'static str,
}

impl ImageData {
    pub fn jpeg(data: String) -> Self {
        Self {
            data,
            mime_type: IMAGE_MIME_TYPE,
        }
    }
}

#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch `url` resized with `preset`. `Ok(None)` when the URL is empty.
    async fn fetch_image(
        &self,
        url: &str,
        preset: ImagePreset,
    ) -> Result<Option<ImageData>, DomainError>;
}
