use rescuedogs_mcp_domain::{adoption_guide::adoption_guide, GuideTopic};
use tracing::debug;

/// Static guidance; no upstream call.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetAdoptionGuideUseCase;

impl GetAdoptionGuideUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, topic: GuideTopic, country: Option<&str>) -> String {
        debug!(topic = %topic, country = ?country, "Adoption guide requested");
        adoption_guide(topic, country)
    }
}
