//! One async function per tool. Each takes validated input and returns the
//! tool result, or the [`DomainError`] that the caller renders as an error
//! result.
mod catalog;
mod dogs;
mod guide;

pub use catalog::{get_filter_counts, get_statistics, list_breeds, list_organizations};
pub use dogs::{get_dog_details, match_preferences, search_dogs};
pub use guide::get_adoption_guide;

use crate::protocol::ToolContent;
use crate::state::McpState;
use rescuedogs_mcp_domain::{Dog, ImagePreset};

/// Image blocks for the first `max_images` dogs, each preceded by the dog's
/// name. Dogs without a retrievable image are skipped.
pub(crate) async fn dog_images(
    state: &McpState,
    dogs: &[Dog],
    preset: ImagePreset,
) -> Vec<ToolContent> {
    let dogs: Vec<&Dog> = dogs.iter().take(state.max_images).collect();
    let urls: Vec<Option<&str>> = dogs
        .iter()
        .map(|dog| dog.primary_image_url.as_deref())
        .collect();
    let images = state.fetch_images.fetch_many(&urls, preset).await;

    let mut content = Vec::new();
    for (dog, image) in dogs.into_iter().zip(images) {
        if let Some(image) = image {
            content.push(ToolContent::text(format!("\n**{}:**", dog.name)));
            content.push(ToolContent::image(image.data.clone(), image.mime_type));
        }
    }
    content
}
