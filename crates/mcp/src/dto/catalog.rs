use super::{check_min, check_range};
use rescuedogs_mcp_domain::{DomainError, FilterCriteria, ResponseFormat};
use serde::Deserialize;

fn default_min_count() -> u64 {
    1
}

fn default_breed_limit() -> u32 {
    20
}

fn default_org_limit() -> u32 {
    20
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListBreedsInput {
    #[serde(default)]
    pub breed_group: Option<String>,
    #[serde(default = "default_min_count")]
    pub min_count: u64,
    #[serde(default = "default_breed_limit")]
    pub limit: u32,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl ListBreedsInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_min("min_count", self.min_count, 1)?;
        check_range("limit", self.limit, 1, 100)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetStatisticsInput {
    #[serde(default)]
    pub response_format: ResponseFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetFilterCountsInput {
    #[serde(default)]
    pub current_filters: Option<FilterCriteria>,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl GetFilterCountsInput {
    pub fn filters(&self) -> FilterCriteria {
        self.current_filters.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListOrganizationsInput {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default = "default_true")]
    pub active_only: bool,
    #[serde(default = "default_org_limit")]
    pub limit: u32,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl ListOrganizationsInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_range("limit", self.limit, 1, 50)
    }
}
