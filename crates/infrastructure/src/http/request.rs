//! Request descriptors and query shaping for the upstream API.

use reqwest::Method;
use rescuedogs_mcp_domain::{DogSearchQuery, FilterCountsQuery, OrganizationQuery};
use serde_json::Value;
use std::time::Duration;

pub type QueryPairs = Vec<(&'static str, String)>;

/// One logical upstream call. A retry re-sends the identical descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path segments below the base URL; always sent with a trailing slash.
    pub segments: Vec<String>,
    pub query: QueryPairs,
    pub body: Option<Value>,
    pub timeout: Duration,
}

impl RequestDescriptor {
    pub fn get<I, S>(segments: I, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: Method::GET,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
            timeout,
        }
    }

    pub fn post<I, S>(segments: I, body: Value, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::get(segments, timeout)
        }
    }

    pub fn with_query(mut self, query: QueryPairs) -> Self {
        self.query = query;
        self
    }

    /// Display form for logs, e.g. `/api/animals/`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path.push('/');
        path
    }
}

fn push<T: ToString>(pairs: &mut QueryPairs, key: &'static str, value: Option<T>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

fn push_str(pairs: &mut QueryPairs, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}

/// Search parameters. The availability constraints always come first and
/// cannot be overridden by the query.
pub fn search_query(query: &DogSearchQuery) -> QueryPairs {
    let mut pairs: QueryPairs = vec![
        ("status", "available".to_string()),
        ("availability_confidence", "high,medium".to_string()),
    ];
    push_str(&mut pairs, "search", query.search.as_deref());
    push_str(&mut pairs, "breed", query.breed.as_deref());
    push_str(&mut pairs, "breed_group", query.breed_group.as_deref());
    push(&mut pairs, "standardized_size", query.standardized_size);
    push(&mut pairs, "age_category", query.age_category.map(|a| a.api_value()));
    push(&mut pairs, "sex", query.sex.map(|s| s.api_value()));
    push(&mut pairs, "energy_level", query.energy_level);
    push(&mut pairs, "home_type", query.home_type);
    push(&mut pairs, "experience_level", query.experience_level);
    push_str(&mut pairs, "available_to_country", query.available_to_country.as_deref());
    push(&mut pairs, "organization_id", query.organization_id);
    push(&mut pairs, "good_with_kids", query.good_with_kids);
    push(&mut pairs, "good_with_dogs", query.good_with_dogs);
    push(&mut pairs, "good_with_cats", query.good_with_cats);
    push(&mut pairs, "limit", query.limit);
    push(&mut pairs, "offset", query.offset);
    pairs
}

pub fn filter_counts_query(query: &FilterCountsQuery) -> QueryPairs {
    let mut pairs: QueryPairs = vec![("status", "available".to_string())];
    push_str(&mut pairs, "search", query.search.as_deref());
    push_str(&mut pairs, "breed", query.breed.as_deref());
    push(&mut pairs, "standardized_size", query.standardized_size);
    push(&mut pairs, "age_category", query.age_category.map(|a| a.api_value()));
    push(&mut pairs, "sex", query.sex.map(|s| s.api_value()));
    push_str(&mut pairs, "available_to_country", query.available_to_country.as_deref());
    pairs
}

pub fn organizations_query(query: &OrganizationQuery) -> QueryPairs {
    let mut pairs = QueryPairs::new();
    push_str(&mut pairs, "country", query.country.as_deref());
    push(&mut pairs, "active_only", query.active_only);
    push(&mut pairs, "limit", query.limit);
    push(&mut pairs, "offset", query.offset);
    pairs
}

pub fn breeds_query(breed_group: Option<&str>) -> QueryPairs {
    let mut pairs = QueryPairs::new();
    push_str(&mut pairs, "breed_group", breed_group);
    pairs
}
