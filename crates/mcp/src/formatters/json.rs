use rescuedogs_mcp_application::use_cases::{DogDetails, DogListing, MatchResult, MatchedCriteria};
use rescuedogs_mcp_domain::{Dog, DomainError, EnhancedDogData, FilterCountsResponse};
use serde::Serialize;

/// A dog with its enrichment record inlined under `enhanced`.
#[derive(Serialize)]
struct DogView<'a> {
    #[serde(flatten)]
    dog: &'a Dog,
    enhanced: Option<&'a EnhancedDogData>,
}

#[derive(Serialize)]
struct ListingView<'a> {
    count: usize,
    dogs: Vec<DogView<'a>>,
    has_more: bool,
}

#[derive(Serialize)]
struct MatchView<'a> {
    count: usize,
    matched_criteria: &'a MatchedCriteria,
    dogs: Vec<DogView<'a>>,
}

pub fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, DomainError> {
    serde_json::to_string_pretty(value).map_err(|e| DomainError::Passthrough(e.to_string()))
}

fn dog_views(listing: &DogListing) -> Vec<DogView<'_>> {
    listing
        .dogs
        .iter()
        .map(|dog| DogView {
            dog,
            enhanced: listing.enhanced_for(dog.id),
        })
        .collect()
}

pub fn dog_listing_json(listing: &DogListing) -> Result<String, DomainError> {
    pretty(&ListingView {
        count: listing.count(),
        dogs: dog_views(listing),
        has_more: listing.has_more(),
    })
}

pub fn dog_details_json(details: &DogDetails) -> Result<String, DomainError> {
    pretty(&DogView {
        dog: &details.dog,
        enhanced: details.enhanced.as_ref(),
    })
}

pub fn match_result_json(result: &MatchResult) -> Result<String, DomainError> {
    pretty(&MatchView {
        count: result.listing.count(),
        matched_criteria: &result.criteria,
        dogs: dog_views(&result.listing),
    })
}

/// Filter counts with destination countries ordered by count, most first.
pub fn sorted_filter_counts_json(counts: &FilterCountsResponse) -> Result<String, DomainError> {
    let sorted = FilterCountsResponse {
        available_country_options: counts.countries_by_count(),
        ..counts.clone()
    };
    pretty(&sorted)
}
