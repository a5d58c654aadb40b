use super::failure::{from_status, from_transport};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::ACCEPT;
use reqwest::Url;
use rescuedogs_mcp_application::ports::{ImageData, ImageFetcher};
use rescuedogs_mcp_domain::{classify, Config, DomainError, ImagePreset};
use std::time::Duration;
use tracing::debug;

const IMAGE_ACCEPT: &str = "image/jpeg,image/png,image/*";

/// Rewrite a CDN image URL to its resized variant.
///
/// Empty input yields `None`. URLs that do not parse, or whose host is not
/// on `cdn_domain`, are returned unchanged.
pub fn build_transform_url(
    original: &str,
    preset: ImagePreset,
    image_base: &str,
    cdn_domain: &str,
) -> Option<String> {
    if original.is_empty() {
        return None;
    }

    let url = match Url::parse(original) {
        Ok(url) => url,
        Err(_) => return Some(original.to_string()),
    };

    let on_cdn = url.host_str().is_some_and(|host| host.contains(cdn_domain));
    if !on_cdn {
        return Some(original.to_string());
    }

    Some(format!(
        "{}/cdn-cgi/image/{}{}",
        image_base.trim_end_matches('/'),
        preset.transform(),
        url.path()
    ))
}

/// Downloads resized dog photos. Single attempt, no retry.
pub struct CdnImageFetcher {
    http: reqwest::Client,
    image_base: String,
    cdn_domain: String,
    timeout: Duration,
}

impl CdnImageFetcher {
    pub fn new(
        image_base: &str,
        cdn_domain: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()
            .map_err(|e| DomainError::NetworkError(e.to_string()))?;

        Ok(Self {
            http,
            image_base: image_base.trim_end_matches('/').to_string(),
            cdn_domain: cdn_domain.to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        Self::new(
            &config.images.base_url,
            &config.images.cdn_domain,
            &config.api.user_agent,
            config.image_timeout(),
        )
    }

    pub fn transform_url(&self, original: &str, preset: ImagePreset) -> Option<String> {
        build_transform_url(original, preset, &self.image_base, &self.cdn_domain)
    }
}

#[async_trait]
impl ImageFetcher for CdnImageFetcher {
    async fn fetch_image(
        &self,
        url: &str,
        preset: ImagePreset,
    ) -> Result<Option<ImageData>, DomainError> {
        let Some(target) = self.transform_url(url, preset) else {
            return Ok(None);
        };
        debug!(url = %target, preset = %preset, "Fetching image");

        let response = self
            .http
            .get(&target)
            .header(ACCEPT, IMAGE_ACCEPT)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| classify(from_transport(&e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify(from_transport(&e)))?;

        if !status.is_success() {
            return Err(classify(from_status(status, &bytes)));
        }

        Ok(Some(ImageData::jpeg(STANDARD.encode(&bytes))))
    }
}
