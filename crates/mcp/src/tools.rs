//! Tool registry: advertised input schemas and argument dispatch.

use crate::dto::{
    GetAdoptionGuideInput, GetDogDetailsInput, GetFilterCountsInput, GetStatisticsInput,
    ListBreedsInput, ListOrganizationsInput, MatchPreferencesInput, SearchDogsInput,
};
use crate::handlers;
use crate::protocol::{CallToolParams, CallToolResult, JsonRpcError, ToolInfo};
use crate::state::McpState;
use rescuedogs_mcp_domain::{
    ActivityLevel, AgeCategory, DomainError, EnergyLevel, Experience, ExperienceLevel, GuideTopic,
    HomeType, ImagePreset, LivingSituation, ResponseFormat, Sex, Size,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::time::Instant;
use tracing::{info, warn};

pub const SEARCH_DOGS: &str = "rescuedogs_search_dogs";
pub const GET_DOG_DETAILS: &str = "rescuedogs_get_dog_details";
pub const LIST_BREEDS: &str = "rescuedogs_list_breeds";
pub const GET_STATISTICS: &str = "rescuedogs_get_statistics";
pub const GET_FILTER_COUNTS: &str = "rescuedogs_get_filter_counts";
pub const LIST_ORGANIZATIONS: &str = "rescuedogs_list_organizations";
pub const MATCH_PREFERENCES: &str = "rescuedogs_match_preferences";
pub const GET_ADOPTION_GUIDE: &str = "rescuedogs_get_adoption_guide";

fn values<T: Copy>(all: &[T], as_str: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(as_str).collect()
}

fn string_enum(values: Vec<&'static str>, description: &str) -> Value {
    json!({ "type": "string", "enum": values, "description": description })
}

fn string_enum_default(values: Vec<&'static str>, default: &str, description: &str) -> Value {
    json!({ "type": "string", "enum": values, "default": default, "description": description })
}

fn string(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn boolean(description: &str) -> Value {
    json!({ "type": "boolean", "description": description })
}

fn boolean_default(default: bool, description: &str) -> Value {
    json!({ "type": "boolean", "default": default, "description": description })
}

fn integer(min: u64, max: Option<u64>, default: u64, description: &str) -> Value {
    let mut schema = json!({
        "type": "integer",
        "minimum": min,
        "default": default,
        "description": description,
    });
    if let (Some(max), Some(obj)) = (max, schema.as_object_mut()) {
        obj.insert("maximum".to_string(), json!(max));
    }
    schema
}

fn response_format() -> Value {
    string_enum_default(
        values(ResponseFormat::ALL, ResponseFormat::as_str),
        ResponseFormat::default().as_str(),
        "Output format: 'markdown' for reading, 'json' for structured data",
    )
}

fn image_preset(default: ImagePreset) -> Value {
    string_enum_default(
        values(ImagePreset::ALL, ImagePreset::as_str),
        default.as_str(),
        "Image size: 'thumbnail' (200x200) or 'medium' (400x400)",
    )
}

fn object(properties: Vec<(&str, Value)>, required: &[&str]) -> Value {
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    let mut schema = json!({
        "type": "object",
        "properties": properties,
        "additionalProperties": false,
    });
    if !required.is_empty() {
        if let Some(obj) = schema.as_object_mut() {
            obj.insert("required".to_string(), json!(required));
        }
    }
    schema
}

fn search_dogs_schema() -> Value {
    object(
        vec![
            ("query", string("Free-text search over dog names and descriptions")),
            ("breed", string("Breed name, e.g. 'Golden Retriever' or 'Mixed'")),
            ("breed_group", string("FCI breed group, e.g. 'Herding'")),
            ("size", string_enum(values(Size::ALL, Size::as_str), "Standardized size")),
            (
                "age_category",
                string_enum(values(AgeCategory::ALL, AgeCategory::as_str), "Age bracket"),
            ),
            ("sex", string_enum(values(Sex::ALL, Sex::as_str), "Sex of the dog")),
            (
                "energy_level",
                string_enum(values(EnergyLevel::ALL, EnergyLevel::as_str), "Energy level"),
            ),
            (
                "experience_level",
                string_enum(
                    values(ExperienceLevel::ALL, ExperienceLevel::as_str),
                    "Owner experience the dog needs",
                ),
            ),
            (
                "home_type",
                string_enum(values(HomeType::ALL, HomeType::as_str), "Home the dog needs"),
            ),
            (
                "adoptable_to_country",
                string("ISO country code the dog can be adopted to, e.g. 'GB' or 'IE'"),
            ),
            (
                "organization_id",
                json!({ "type": "integer", "description": "Rescue organization ID" }),
            ),
            ("good_with_kids", boolean("Only dogs known to be good with children")),
            ("good_with_dogs", boolean("Only dogs known to be good with other dogs")),
            ("good_with_cats", boolean("Only dogs known to be good with cats")),
            ("limit", integer(1, Some(50), 10, "Number of results (1-50)")),
            ("offset", integer(0, None, 0, "Results to skip for pagination")),
            (
                "include_images",
                boolean_default(false, "Attach dog photos (larger response)"),
            ),
            ("image_preset", image_preset(ImagePreset::Thumbnail)),
            ("response_format", response_format()),
        ],
        &[],
    )
}

fn get_dog_details_schema() -> Value {
    object(
        vec![
            ("slug", string("URL slug of the dog, e.g. 'buddy-12345'")),
            ("include_image", boolean_default(true, "Attach the dog's photo")),
            ("image_preset", image_preset(ImagePreset::Medium)),
            ("response_format", response_format()),
        ],
        &["slug"],
    )
}

fn list_breeds_schema() -> Value {
    object(
        vec![
            ("breed_group", string("FCI breed group, e.g. 'Herding' or 'Sporting'")),
            (
                "min_count",
                integer(1, None, 1, "Minimum available dogs for a breed to be listed"),
            ),
            ("limit", integer(1, Some(100), 20, "Number of breeds to show (1-100)")),
            ("response_format", response_format()),
        ],
        &[],
    )
}

fn get_statistics_schema() -> Value {
    object(vec![("response_format", response_format())], &[])
}

fn get_filter_counts_schema() -> Value {
    let mut filters = object(
        vec![
            ("breed", string("Breed name")),
            ("size", string_enum(values(Size::ALL, Size::as_str), "Standardized size")),
            (
                "age_category",
                string_enum(values(AgeCategory::ALL, AgeCategory::as_str), "Age bracket"),
            ),
            ("sex", string_enum(values(Sex::ALL, Sex::as_str), "Sex of the dog")),
            ("adoptable_to_country", string("ISO country code")),
        ],
        &[],
    );
    if let Some(obj) = filters.as_object_mut() {
        obj.insert(
            "description".to_string(),
            json!("Filters already applied; counts are computed within them"),
        );
    }
    object(
        vec![
            ("current_filters", filters),
            ("response_format", response_format()),
        ],
        &[],
    )
}

fn list_organizations_schema() -> Value {
    object(
        vec![
            ("country", string("ISO country code, e.g. 'GB', 'ES' or 'RO'")),
            ("active_only", boolean_default(true, "Only active organizations")),
            ("limit", integer(1, Some(50), 20, "Number of organizations (1-50)")),
            ("response_format", response_format()),
        ],
        &[],
    )
}

fn match_preferences_schema() -> Value {
    object(
        vec![
            (
                "living_situation",
                string_enum(
                    values(LivingSituation::ALL, LivingSituation::as_str),
                    "Where the dog would live",
                ),
            ),
            (
                "activity_level",
                string_enum(
                    values(ActivityLevel::ALL, ActivityLevel::as_str),
                    "How active your household is",
                ),
            ),
            (
                "experience",
                string_enum(
                    values(Experience::ALL, Experience::as_str),
                    "Your experience owning dogs",
                ),
            ),
            ("has_children", boolean("Children live in the home")),
            ("has_other_dogs", boolean("Other dogs live in the home")),
            ("has_cats", boolean("Cats live in the home")),
            (
                "adoptable_to_country",
                string("ISO country code you would adopt to, e.g. 'GB'"),
            ),
            ("limit", integer(1, Some(20), 5, "Number of matches (1-20)")),
            ("include_images", boolean_default(false, "Attach dog photos")),
            ("response_format", response_format()),
        ],
        &["living_situation", "activity_level", "experience"],
    )
}

fn get_adoption_guide_schema() -> Value {
    object(
        vec![
            (
                "topic",
                string_enum_default(
                    values(GuideTopic::ALL, GuideTopic::as_str),
                    GuideTopic::default().as_str(),
                    "Part of the adoption process to explain",
                ),
            ),
            ("country", string("ISO country code for country-specific notes")),
        ],
        &[],
    )
}

/// Everything `tools/list` advertises, in a stable order.
pub fn tool_definitions() -> Vec<ToolInfo> {
    vec![
        ToolInfo {
            name: SEARCH_DOGS,
            description: "Search rescue dogs available for adoption from European and UK \
                organizations. Returns basic info per dog; use rescuedogs_get_dog_details \
                for a full profile.",
            input_schema: search_dogs_schema(),
        },
        ToolInfo {
            name: GET_DOG_DETAILS,
            description: "Full profile of one rescue dog: personality, requirements, \
                rescue organization and how to adopt.",
            input_schema: get_dog_details_schema(),
        },
        ToolInfo {
            name: LIST_BREEDS,
            description: "Breeds with dogs currently available, with counts and breed \
                statistics.",
            input_schema: list_breeds_schema(),
        },
        ToolInfo {
            name: GET_STATISTICS,
            description: "Overall numbers for available rescue dogs on the platform.",
            input_schema: get_statistics_schema(),
        },
        ToolInfo {
            name: GET_FILTER_COUNTS,
            description: "Filter options with dog counts for the current filter context. \
                Use it to offer choices that will not return an empty search.",
            input_schema: get_filter_counts_schema(),
        },
        ToolInfo {
            name: LIST_ORGANIZATIONS,
            description: "Rescue organizations with their statistics and number of \
                available dogs.",
            input_schema: list_organizations_schema(),
        },
        ToolInfo {
            name: MATCH_PREFERENCES,
            description: "Dogs that fit your lifestyle. Living situation, activity level \
                and experience are translated into search filters.",
            input_schema: match_preferences_schema(),
        },
        ToolInfo {
            name: GET_ADOPTION_GUIDE,
            description: "How rescue dog adoption works: process, transport, fees, \
                requirements and timeline.",
            input_schema: get_adoption_guide_schema(),
        },
    ]
}

fn parse_args<T: DeserializeOwned>(arguments: Option<Value>) -> Result<T, JsonRpcError> {
    let value = match arguments {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(value) => value,
    };
    serde_json::from_value(value).map_err(JsonRpcError::invalid_params)
}

fn checked(result: Result<(), DomainError>) -> Result<(), JsonRpcError> {
    result.map_err(JsonRpcError::invalid_params)
}

type Dispatched = Result<Result<CallToolResult, DomainError>, JsonRpcError>;

async fn dispatch(state: &McpState, name: &str, arguments: Option<Value>) -> Dispatched {
    match name {
        SEARCH_DOGS => {
            let input: SearchDogsInput = parse_args(arguments)?;
            checked(input.validate())?;
            Ok(handlers::search_dogs(state, input).await)
        }
        GET_DOG_DETAILS => {
            let input: GetDogDetailsInput = parse_args(arguments)?;
            Ok(handlers::get_dog_details(state, input).await)
        }
        LIST_BREEDS => {
            let input: ListBreedsInput = parse_args(arguments)?;
            checked(input.validate())?;
            Ok(handlers::list_breeds(state, input).await)
        }
        GET_STATISTICS => {
            let input: GetStatisticsInput = parse_args(arguments)?;
            Ok(handlers::get_statistics(state, input).await)
        }
        GET_FILTER_COUNTS => {
            let input: GetFilterCountsInput = parse_args(arguments)?;
            Ok(handlers::get_filter_counts(state, input).await)
        }
        LIST_ORGANIZATIONS => {
            let input: ListOrganizationsInput = parse_args(arguments)?;
            checked(input.validate())?;
            Ok(handlers::list_organizations(state, input).await)
        }
        MATCH_PREFERENCES => {
            let input: MatchPreferencesInput = parse_args(arguments)?;
            checked(input.validate())?;
            Ok(handlers::match_preferences(state, input).await)
        }
        GET_ADOPTION_GUIDE => {
            let input: GetAdoptionGuideInput = parse_args(arguments)?;
            Ok(handlers::get_adoption_guide(state, input).await)
        }
        other => Err(JsonRpcError::invalid_params(format!("Unknown tool: {}", other))),
    }
}

/// Run one `tools/call`.
///
/// Argument problems and unknown tools are protocol errors. Failures while
/// serving a valid call become an `isError` result so the client sees the
/// message.
pub async fn call_tool(
    state: &McpState,
    params: CallToolParams,
) -> Result<CallToolResult, JsonRpcError> {
    let started = Instant::now();
    let outcome = dispatch(state, &params.name, params.arguments).await;
    let duration_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(Ok(result)) => {
            info!(tool = %params.name, status = "ok", duration_ms, "Tool call completed");
            Ok(result)
        }
        Ok(Err(e)) => {
            warn!(
                tool = %params.name,
                status = "error",
                kind = ?e.kind(),
                error = %e,
                duration_ms,
                "Tool call failed"
            );
            Ok(CallToolResult::error(e))
        }
        Err(e) => {
            warn!(
                tool = %params.name,
                status = "error",
                code = e.code,
                error = %e.message,
                duration_ms,
                "Tool call rejected"
            );
            Err(e)
        }
    }
}
