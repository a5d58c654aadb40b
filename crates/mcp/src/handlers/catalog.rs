use crate::dto::{GetFilterCountsInput, GetStatisticsInput, ListBreedsInput, ListOrganizationsInput};
use crate::formatters::{
    breed_stats_markdown, filter_counts_markdown, organizations_list_markdown, pretty,
    sorted_filter_counts_json, statistics_markdown,
};
use crate::protocol::CallToolResult;
use crate::state::McpState;
use rescuedogs_mcp_domain::{DomainError, ResponseFormat};

pub async fn list_breeds(
    state: &McpState,
    input: ListBreedsInput,
) -> Result<CallToolResult, DomainError> {
    let stats = state
        .list_breeds
        .execute(input.breed_group.as_deref(), input.min_count)
        .await?;
    let limit = input.limit as usize;

    let text = match input.response_format {
        ResponseFormat::Markdown => breed_stats_markdown(&stats, limit),
        ResponseFormat::Json => {
            let mut shown = (*stats).clone();
            shown.qualifying_breeds.truncate(limit);
            pretty(&shown)?
        }
    };
    Ok(CallToolResult::text(text))
}

pub async fn get_statistics(
    state: &McpState,
    input: GetStatisticsInput,
) -> Result<CallToolResult, DomainError> {
    let stats = state.get_statistics.execute().await?;

    let text = match input.response_format {
        ResponseFormat::Markdown => statistics_markdown(&stats),
        ResponseFormat::Json => pretty(&*stats)?,
    };
    Ok(CallToolResult::text(text))
}

pub async fn get_filter_counts(
    state: &McpState,
    input: GetFilterCountsInput,
) -> Result<CallToolResult, DomainError> {
    let counts = state.get_filter_counts.execute(&input.filters()).await?;

    let text = match input.response_format {
        ResponseFormat::Markdown => filter_counts_markdown(&counts),
        ResponseFormat::Json => sorted_filter_counts_json(&counts)?,
    };
    Ok(CallToolResult::text(text))
}

pub async fn list_organizations(
    state: &McpState,
    input: ListOrganizationsInput,
) -> Result<CallToolResult, DomainError> {
    let orgs = state
        .list_organizations
        .execute(input.country.as_deref(), input.active_only, input.limit)
        .await?;

    let text = match input.response_format {
        ResponseFormat::Markdown => organizations_list_markdown(&orgs),
        ResponseFormat::Json => pretty(&*orgs)?,
    };
    Ok(CallToolResult::text(text))
}
