use rescuedogs_mcp_domain::GuideTopic;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetAdoptionGuideInput {
    #[serde(default)]
    pub topic: GuideTopic,
    #[serde(default)]
    pub country: Option<String>,
}
