use rescuedogs_mcp_application::use_cases::{DogListing, MatchPreferencesRequest};
use rescuedogs_mcp_domain::{
    BreedStats, Dog, EnhancedDogData, FilterCountsResponse, FilterOption, Organization,
    ProfileView, QualifyingBreed, Statistics,
};

pub const CHARACTER_LIMIT: usize = 25_000;

const TRUNCATION_NOTICE: &str = "\n\n... (truncated due to length limit)";
const MAX_BREED_TRAITS: usize = 3;
const MAX_STATS_COUNTRIES: usize = 8;
const MAX_STATS_ORGANIZATIONS: usize = 5;
const MAX_FILTER_COUNTRIES: usize = 15;
const MAX_FILTER_BREEDS: usize = 10;

/// Window of a paged listing, used for the "Showing a-b" footer.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub offset: u32,
    pub limit: u32,
}

/// Cut `text` to stay under [`CHARACTER_LIMIT`] characters.
pub fn truncate_if_needed(text: String) -> String {
    if text.chars().count() <= CHARACTER_LIMIT {
        return text;
    }
    let mut truncated: String = text.chars().take(CHARACTER_LIMIT - 100).collect();
    truncated.push_str(TRUNCATION_NOTICE);
    truncated
}

/// `very_high` -> `Very High`.
pub fn format_enum_value(value: &str) -> String {
    value
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `1500` -> `1,500`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_section(parts: &mut Vec<String>, heading: &str, body: String) {
    parts.push(format!("## {}", heading));
    parts.push(String::new());
    parts.push(body);
    parts.push(String::new());
}

fn profile_sections(profile: ProfileView<'_>, parts: &mut Vec<String>) {
    if let Some(about) = profile.about {
        push_section(parts, "About", about.to_string());
    }
    if !profile.personality_traits.is_empty() {
        push_section(parts, "Personality", bullets(profile.personality_traits));
    }
    if !profile.interests.is_empty() {
        push_section(parts, "Interests", bullets(profile.interests));
    }
    if let Some(looking_for) = profile.looking_for {
        push_section(parts, "Looking For", looking_for.to_string());
    }

    if profile.energy_level.is_some()
        || profile.home_type.is_some()
        || profile.experience_level.is_some()
    {
        parts.push("## Requirements".to_string());
        parts.push(String::new());
        if let Some(v) = profile.energy_level {
            parts.push(format!("- **Energy Level:** {}", format_enum_value(v)));
        }
        if let Some(v) = profile.home_type {
            parts.push(format!("- **Home Type:** {}", format_enum_value(v)));
        }
        if let Some(v) = profile.experience_level {
            parts.push(format!("- **Experience Needed:** {}", format_enum_value(v)));
        }
        parts.push(String::new());
    }

    if !profile.deal_breakers.is_empty() {
        push_section(parts, "Important Notes", bullets(profile.deal_breakers));
    }
    if let Some(fun_fact) = profile.fun_fact {
        push_section(parts, "Fun Fact", fun_fact.to_string());
    }
}

fn location(city: Option<&str>, country: Option<&str>) -> Option<String> {
    match (city.filter(|c| !c.is_empty()), country.filter(|c| !c.is_empty())) {
        (Some(city), Some(country)) => Some(format!("{}, {}", city, country)),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

/// Full profile of one dog. Enrichment wins over the embedded profiler data.
pub fn dog_markdown(dog: &Dog, enhanced: Option<&EnhancedDogData>) -> String {
    let mut parts = vec![format!("# {}", dog.name), String::new()];

    if let Some(tagline) = enhanced.and_then(|e| e.tagline.as_deref()).filter(|t| !t.is_empty()) {
        parts.push(format!("*{}*", tagline));
        parts.push(String::new());
    }

    parts.push("## Basic Information".to_string());
    parts.push(String::new());
    if let Some(breed) = dog.display_breed() {
        parts.push(format!("- **Breed:** {}", breed));
    }
    if let Some(age) = dog.age_text.as_deref() {
        parts.push(format!("- **Age:** {}", age));
    }
    if let Some(sex) = dog.sex.as_deref() {
        parts.push(format!("- **Sex:** {}", sex));
    }
    if let Some(size) = dog.display_size() {
        parts.push(format!("- **Size:** {}", size));
    }
    if let Some(group) = dog.breed_group.as_deref() {
        parts.push(format!("- **Breed Group:** {}", group));
    }
    parts.push(String::new());

    if let Some(enhanced) = enhanced {
        profile_sections(enhanced.profile(), &mut parts);
    } else if let Some(profiler) = &dog.dog_profiler_data {
        profile_sections(profiler.profile(), &mut parts);
    }

    if let Some(org) = &dog.organization {
        parts.push("## Rescue Organization".to_string());
        parts.push(String::new());
        parts.push(format!("- **Name:** {}", org.name));
        if let (Some(city), Some(country)) = (org.city.as_deref(), org.country.as_deref()) {
            parts.push(format!("- **Location:** {}, {}", city, country));
        }
        if let Some(website) = org.website_url.as_deref() {
            parts.push(format!("- **Website:** {}", website));
        }
        parts.push(String::new());
    }

    parts.push("## Adoption".to_string());
    parts.push(String::new());
    parts.push(format!(
        "**Apply to adopt {}:** {}",
        dog.name, dog.adoption_url
    ));
    parts.push(String::new());
    parts.push(format!(
        "*View full profile on rescuedogs.me: https://www.rescuedogs.me/dogs/{}*",
        dog.slug
    ));

    truncate_if_needed(parts.join("\n"))
}

const NO_DOGS_FOUND: &str = "# No Dogs Found

No dogs found matching your criteria.

**Suggestions:**
- Use `rescuedogs_get_filter_counts` to see available filter options
- Try removing some filters to broaden your search
- Check `rescuedogs_list_organizations` to find organizations with available dogs

*Note: We aggregate dogs from European and UK rescues only.*";

pub fn dogs_list_markdown(listing: &DogListing, pagination: Option<Pagination>) -> String {
    if listing.dogs.is_empty() {
        return NO_DOGS_FOUND.to_string();
    }

    let mut parts = vec![
        format!("# Search Results ({} dogs)", listing.dogs.len()),
        String::new(),
    ];

    for dog in &listing.dogs {
        parts.push(format!("## {}", dog.name));
        if let Some(tagline) = listing
            .enhanced_for(dog.id)
            .and_then(|e| e.tagline.as_deref())
            .filter(|t| !t.is_empty())
        {
            parts.push(format!("*{}*", tagline));
        }
        parts.push(String::new());

        let mut details = Vec::new();
        if let Some(breed) = dog.display_breed() {
            details.push(format!("**Breed:** {}", breed));
        }
        if let Some(age) = dog.age_text.as_deref() {
            details.push(format!("**Age:** {}", age));
        }
        if let Some(sex) = dog.sex.as_deref() {
            details.push(format!("**Sex:** {}", sex));
        }
        if let Some(size) = dog.standardized_size.as_deref() {
            details.push(format!("**Size:** {}", size));
        }
        parts.push(details.join(" | "));
        parts.push(String::new());

        if let Some(org) = &dog.organization {
            match org.country.as_deref() {
                Some(country) => parts.push(format!("**From:** {} ({})", org.name, country)),
                None => parts.push(format!("**From:** {}", org.name)),
            }
        }

        parts.push(format!(
            "**Details:** `rescuedogs_get_dog_details(slug: \"{}\")`",
            dog.slug
        ));
        parts.push(format!("**Adopt:** {}", dog.adoption_url));
        parts.push(String::new());
        parts.push("---".to_string());
        parts.push(String::new());
    }

    if let Some(page) = pagination {
        let start = page.offset as usize + 1;
        let end = page.offset as usize + listing.dogs.len();
        let more = if listing.dogs.len() == page.limit as usize {
            " More results available - increase offset to see more."
        } else {
            ""
        };
        parts.push(format!("*Showing {}-{}.{}*", start, end, more));
        parts.push(String::new());
    }

    parts.push("*Use rescuedogs_get_dog_details to see the full profile for any dog.*".to_string());

    truncate_if_needed(parts.join("\n"))
}

/// Profile summary placed above the match listing.
pub fn match_header_markdown(request: &MatchPreferencesRequest) -> String {
    let mut lines = vec![
        "# Dogs Matching Your Preferences".to_string(),
        String::new(),
        "**Your Profile:**".to_string(),
        format!(
            "- Living Situation: {}",
            request.living_situation.as_str().replace('_', " ")
        ),
        format!(
            "- Activity Level: {}",
            request.activity_level.as_str().replace('_', " ")
        ),
        format!(
            "- Experience: {}",
            request.experience.as_str().replace('_', " ")
        ),
    ];
    if let Some(country) = request.adoptable_to_country.as_deref().filter(|c| !c.is_empty()) {
        lines.push(format!("- Adopting to: {}", country));
    }

    let yes_no = |v: bool| if v { "Yes" } else { "No" };
    if let Some(v) = request.has_children {
        lines.push(format!("- Has Children: {}", yes_no(v)));
    }
    if let Some(v) = request.has_other_dogs {
        lines.push(format!("- Has Other Dogs: {}", yes_no(v)));
    }
    if let Some(v) = request.has_cats {
        lines.push(format!("- Has Cats: {}", yes_no(v)));
    }

    lines.push(String::new());
    lines.push(String::new());
    lines.join("\n")
}

fn breed_details(breed: &QualifyingBreed, parts: &mut Vec<String>) {
    if let Some(group) = breed.breed_group.as_deref() {
        parts.push(format!("- **Group:** {}", group));
    }
    if let Some(kind) = breed.breed_type.as_deref() {
        parts.push(format!("- **Type:** {}", kind));
    }
    if !breed.personality_traits.is_empty() {
        let traits: Vec<&str> = breed
            .personality_traits
            .iter()
            .take(MAX_BREED_TRAITS)
            .map(String::as_str)
            .collect();
        parts.push(format!("- **Traits:** {}", traits.join(", ")));
    }
    if breed.organization_count > 0 {
        parts.push(format!(
            "- **Available from:** {} organizations",
            breed.organization_count
        ));
    }
}

pub fn breed_stats_markdown(stats: &BreedStats, limit: usize) -> String {
    let mut parts = vec![
        "# Available Breeds".to_string(),
        String::new(),
        format!("**Total Dogs:** {}", thousands(stats.total_dogs)),
        format!("**Unique Breeds:** {}", thousands(stats.unique_breeds)),
        format!("**Purebred:** {}", thousands(stats.purebred_count)),
        format!("**Crossbreed/Mixed:** {}", thousands(stats.crossbreed_count)),
        String::new(),
    ];

    if !stats.breed_groups.is_empty() {
        parts.push("## Breed Groups".to_string());
        parts.push(String::new());
        for group in &stats.breed_groups {
            parts.push(format!("- **{}:** {} dogs", group.name, group.count));
        }
        parts.push(String::new());
    }

    if !stats.qualifying_breeds.is_empty() && limit > 0 {
        parts.push("## Top Breeds".to_string());
        parts.push(String::new());
        for breed in stats.qualifying_breeds.iter().take(limit) {
            parts.push(format!("### {} ({} dogs)", breed.primary_breed, breed.count));
            parts.push(String::new());
            breed_details(breed, &mut parts);
            parts.push(String::new());
        }
    }

    truncate_if_needed(parts.join("\n"))
}

pub fn organization_markdown(org: &Organization) -> String {
    let mut parts = vec![format!("## {}", org.name), String::new()];
    if let Some(description) = org.description.as_deref().filter(|d| !d.is_empty()) {
        parts.push(description.to_string());
        parts.push(String::new());
    }

    parts.push("### Details".to_string());
    parts.push(String::new());
    if let Some(location) = location(org.city.as_deref(), org.country.as_deref()) {
        parts.push(format!("- **Location:** {}", location));
    }
    parts.push(format!("- **Dogs Available:** {}", org.total_dogs));
    if org.new_this_week > 0 {
        parts.push(format!("- **New This Week:** {}", org.new_this_week));
    }
    if !org.ships_to.is_empty() {
        parts.push(format!("- **Ships To:** {}", org.ships_to.join(", ")));
    }
    if let Some(website) = org.website_url.as_deref() {
        parts.push(format!("- **Website:** {}", website));
    }
    parts.push(String::new());

    parts.join("\n")
}

pub fn organizations_list_markdown(orgs: &[Organization]) -> String {
    if orgs.is_empty() {
        return "No organizations found matching your criteria.".to_string();
    }

    let mut parts = vec![
        format!("# Rescue Organizations ({})", orgs.len()),
        String::new(),
    ];
    for org in orgs {
        parts.push(organization_markdown(org));
        parts.push("---".to_string());
        parts.push(String::new());
    }

    truncate_if_needed(parts.join("\n"))
}

pub fn statistics_markdown(stats: &Statistics) -> String {
    let mut parts = vec![
        "# Rescue Dogs Statistics".to_string(),
        String::new(),
        "## Overview".to_string(),
        String::new(),
        format!("- **Available Dogs:** {}", thousands(stats.total_dogs)),
        format!("- **Rescue Organizations:** {}", stats.total_organizations),
        format!("- **Countries Covered:** {}", stats.countries.len()),
        format!("- **New This Week:** {}", stats.new_this_week()),
        String::new(),
    ];

    if !stats.countries.is_empty() {
        parts.push("## Dogs by Country".to_string());
        parts.push(String::new());
        for country in stats.countries.iter().take(MAX_STATS_COUNTRIES) {
            parts.push(format!("- **{}:** {} dogs", country.country, country.count));
        }
        parts.push(String::new());
    }

    if !stats.organizations.is_empty() {
        parts.push("## Top Organizations".to_string());
        parts.push(String::new());
        for org in stats.organizations.iter().take(MAX_STATS_ORGANIZATIONS) {
            match org.country.as_deref() {
                Some(country) => parts.push(format!(
                    "- **{}** ({}): {} dogs",
                    org.name, country, org.dog_count
                )),
                None => parts.push(format!("- **{}**: {} dogs", org.name, org.dog_count)),
            }
        }
        parts.push(String::new());
    }

    parts.push("*Data from rescuedogs.me - European & UK rescue dog aggregator*".to_string());
    parts.join("\n")
}

fn option_lines(heading: &str, options: &[FilterOption], parts: &mut Vec<String>) {
    parts.push(format!("## {}", heading));
    for opt in options {
        parts.push(format!("- {}: {} dogs", opt.label, opt.count));
    }
    parts.push(String::new());
}

pub fn filter_counts_markdown(counts: &FilterCountsResponse) -> String {
    let mut parts = vec!["# Available Filter Options".to_string(), String::new()];

    if !counts.size_options.is_empty() {
        option_lines("Size", &counts.size_options, &mut parts);
    }
    if !counts.age_options.is_empty() {
        option_lines("Age", &counts.age_options, &mut parts);
    }
    if !counts.sex_options.is_empty() {
        option_lines("Sex", &counts.sex_options, &mut parts);
    }

    if !counts.available_country_options.is_empty() {
        let sorted = counts.countries_by_count();
        parts.push("## Available To (Countries)".to_string());
        for opt in sorted.iter().take(MAX_FILTER_COUNTRIES) {
            parts.push(format!("- {}: {} dogs", opt.label, opt.count));
        }
        if sorted.len() > MAX_FILTER_COUNTRIES {
            parts.push(format!(
                "- *...and {} more countries*",
                sorted.len() - MAX_FILTER_COUNTRIES
            ));
        }
        parts.push(String::new());
    }

    if !counts.breed_options.is_empty() {
        let top: Vec<FilterOption> = counts
            .breed_options
            .iter()
            .take(MAX_FILTER_BREEDS)
            .cloned()
            .collect();
        option_lines("Top Breeds", &top, &mut parts);
    }

    truncate_if_needed(parts.join("\n"))
}
