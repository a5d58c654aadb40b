//! Presentation of use case results as markdown or pretty JSON.
mod json;
mod markdown;

pub use json::{
    dog_details_json, dog_listing_json, match_result_json, pretty, sorted_filter_counts_json,
};
pub use markdown::{
    breed_stats_markdown, dog_markdown, dogs_list_markdown, filter_counts_markdown,
    format_enum_value, match_header_markdown, organization_markdown,
    organizations_list_markdown, statistics_markdown, thousands, truncate_if_needed,
    Pagination, CHARACTER_LIMIT,
};
