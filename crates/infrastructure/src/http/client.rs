use super::failure::{from_status, from_transport};
use super::request::{
    breeds_query, filter_counts_query, organizations_query, search_query, RequestDescriptor,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use rescuedogs_mcp_application::ports::RescueApi;
use rescuedogs_mcp_domain::{
    classify, BreedStats, Config, Dog, DogSearchQuery, DomainError, EnhancedDogData,
    FilterCountsQuery, FilterCountsResponse, Organization, OrganizationQuery, RawFailure,
    Statistics,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// reqwest-backed client for the rescue dogs REST API.
///
/// Every call goes through [`BackendClient::execute`], which retries a
/// retryable failure exactly once with the same descriptor and classifies
/// whatever failure remains.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    retry_backoff: Duration,
}

impl BackendClient {
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        retry_backoff: Duration,
    ) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DomainError::InvalidInput(format!("api base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::InvalidInput(format!(
                "api base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| DomainError::NetworkError(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            timeout,
            retry_backoff,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        Self::new(
            &config.api.base_url,
            &config.api.user_agent,
            config.request_timeout(),
            config.retry_backoff(),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, desc: &RequestDescriptor) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(desc.segments.iter().map(String::as_str))
                .push("");
        }
        url
    }

    /// Run a descriptor with at most one retry.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        desc: &RequestDescriptor,
    ) -> Result<T, DomainError> {
        match self.attempt(desc).await {
            Ok(value) => Ok(value),
            Err(e) if e.is_retryable() => {
                warn!(
                    method = %desc.method,
                    path = %desc.path(),
                    error = %e,
                    "Upstream request failed, retrying once"
                );
                if !self.retry_backoff.is_zero() {
                    tokio::time::sleep(self.retry_backoff).await;
                }
                self.attempt(desc).await
            }
            Err(e) => Err(e),
        }
    }

    async fn attempt<T: DeserializeOwned>(&self, desc: &RequestDescriptor) -> Result<T, DomainError> {
        let url = self.url_for(desc);
        debug!(method = %desc.method, url = %url, query = ?desc.query, "Sending upstream request");

        let mut request = self
            .http
            .request(desc.method.clone(), url)
            .timeout(desc.timeout);
        if !desc.query.is_empty() {
            request = request.query(&desc.query);
        }
        if let Some(body) = &desc.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify(from_transport(&e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify(from_transport(&e)))?;

        if !status.is_success() {
            return Err(classify(from_status(status, &body)));
        }

        serde_json::from_slice(&body).map_err(|e| classify(RawFailure::Other(e.to_string())))
    }

    fn descriptor(&self, segments: &[&str]) -> RequestDescriptor {
        RequestDescriptor::get(segments.iter().copied(), self.timeout)
    }
}

#[async_trait]
impl RescueApi for BackendClient {
    async fn search_dogs(&self, query: &DogSearchQuery) -> Result<Vec<Dog>, DomainError> {
        let desc = self.descriptor(&["api", "animals"]).with_query(search_query(query));
        self.execute(&desc).await
    }

    async fn get_dog_by_slug(&self, slug: &str) -> Result<Dog, DomainError> {
        let desc = self.descriptor(&["api", "animals", slug]);
        self.execute(&desc).await
    }

    async fn get_enhanced_data(&self, dog_id: i64) -> Result<EnhancedDogData, DomainError> {
        let id = dog_id.to_string();
        let desc = self.descriptor(&["api", "enhanced_animals", id.as_str(), "enhanced"]);
        self.execute(&desc).await
    }

    async fn get_bulk_enhanced_data(
        &self,
        dog_ids: &[i64],
    ) -> Result<Vec<EnhancedDogData>, DomainError> {
        let desc = RequestDescriptor::post(
            ["api", "enhanced_animals", "enhanced", "bulk"],
            json!({ "animal_ids": dog_ids }),
            self.timeout,
        );
        self.execute(&desc).await
    }

    async fn get_breed_stats(&self) -> Result<BreedStats, DomainError> {
        self.execute(&self.descriptor(&["api", "animals", "breeds", "stats"]))
            .await
    }

    async fn get_breeds(&self, breed_group: Option<&str>) -> Result<Vec<String>, DomainError> {
        let desc = self
            .descriptor(&["api", "animals", "meta", "breeds"])
            .with_query(breeds_query(breed_group));
        self.execute(&desc).await
    }

    async fn get_statistics(&self) -> Result<Statistics, DomainError> {
        self.execute(&self.descriptor(&["api", "animals", "statistics"]))
            .await
    }

    async fn get_filter_counts(
        &self,
        query: &FilterCountsQuery,
    ) -> Result<FilterCountsResponse, DomainError> {
        let desc = self
            .descriptor(&["api", "animals", "meta", "filter_counts"])
            .with_query(filter_counts_query(query));
        self.execute(&desc).await
    }

    async fn get_organizations(
        &self,
        query: &OrganizationQuery,
    ) -> Result<Vec<Organization>, DomainError> {
        let desc = self
            .descriptor(&["api", "organizations"])
            .with_query(organizations_query(query));
        self.execute(&desc).await
    }

    async fn get_enhanced_organizations(&self) -> Result<Vec<Organization>, DomainError> {
        self.execute(&self.descriptor(&["api", "organizations", "enhanced"]))
            .await
    }
}
