use crate::dto::GetAdoptionGuideInput;
use crate::protocol::CallToolResult;
use crate::state::McpState;
use rescuedogs_mcp_domain::DomainError;

pub async fn get_adoption_guide(
    state: &McpState,
    input: GetAdoptionGuideInput,
) -> Result<CallToolResult, DomainError> {
    let text = state
        .adoption_guide
        .execute(input.topic, input.country.as_deref());
    Ok(CallToolResult::text(text))
}
