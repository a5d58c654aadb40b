use super::dog_images;
use crate::dto::{GetDogDetailsInput, MatchPreferencesInput, SearchDogsInput};
use crate::formatters::{
    dog_details_json, dog_listing_json, dog_markdown, dogs_list_markdown, match_header_markdown,
    match_result_json, Pagination,
};
use crate::protocol::{CallToolResult, ToolContent};
use crate::state::McpState;
use rescuedogs_mcp_domain::{DomainError, ImagePreset, ResponseFormat};

pub async fn search_dogs(
    state: &McpState,
    input: SearchDogsInput,
) -> Result<CallToolResult, DomainError> {
    let listing = state.search_dogs.execute(input.to_request()).await?;

    let text = match input.response_format {
        ResponseFormat::Markdown => dogs_list_markdown(
            &listing,
            Some(Pagination {
                offset: input.offset,
                limit: input.limit,
            }),
        ),
        ResponseFormat::Json => dog_listing_json(&listing)?,
    };

    let mut content = vec![ToolContent::text(text)];
    if input.include_images {
        content.extend(dog_images(state, &listing.dogs, input.image_preset).await);
    }
    Ok(CallToolResult::new(content))
}

pub async fn get_dog_details(
    state: &McpState,
    input: GetDogDetailsInput,
) -> Result<CallToolResult, DomainError> {
    let details = state.get_dog_details.execute(&input.slug).await?;

    let text = match input.response_format {
        ResponseFormat::Markdown => dog_markdown(&details.dog, details.enhanced.as_ref()),
        ResponseFormat::Json => dog_details_json(&details)?,
    };

    let mut content = Vec::with_capacity(2);
    if input.include_image {
        if let Some(image) = state
            .fetch_images
            .fetch_one(details.dog.primary_image_url.as_deref(), input.image_preset)
            .await
        {
            content.push(ToolContent::image(image.data.clone(), image.mime_type));
        }
    }
    content.push(ToolContent::text(text));
    Ok(CallToolResult::new(content))
}

pub async fn match_preferences(
    state: &McpState,
    input: MatchPreferencesInput,
) -> Result<CallToolResult, DomainError> {
    let request = input.to_request();
    let result = state.match_preferences.execute(&request).await?;

    let text = match input.response_format {
        ResponseFormat::Markdown => format!(
            "{}{}",
            match_header_markdown(&request),
            dogs_list_markdown(&result.listing, None)
        ),
        ResponseFormat::Json => match_result_json(&result)?,
    };

    let mut content = vec![ToolContent::text(text)];
    if input.include_images {
        content.extend(dog_images(state, &result.listing.dogs, ImagePreset::Thumbnail).await);
    }
    Ok(CallToolResult::new(content))
}
