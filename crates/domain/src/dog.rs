use crate::organization::Organization;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Core dog record as returned by `/api/animals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub animal_type: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub standardized_breed: Option<String>,
    #[serde(default)]
    pub breed_group: Option<String>,
    #[serde(default)]
    pub primary_breed: Option<String>,
    #[serde(default)]
    pub secondary_breed: Option<String>,
    #[serde(default)]
    pub breed_type: Option<String>,
    #[serde(default)]
    pub breed_slug: Option<String>,
    #[serde(default)]
    pub age_text: Option<String>,
    #[serde(default)]
    pub age_min_months: Option<u32>,
    #[serde(default)]
    pub age_max_months: Option<u32>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub standardized_size: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub primary_image_url: Option<String>,
    #[serde(default)]
    pub adoption_url: String,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub dog_profiler_data: Option<DogProfilerData>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub last_scraped_at: Option<String>,
    #[serde(default)]
    pub availability_confidence: Option<String>,
    #[serde(default)]
    pub organization: Option<Organization>,
}

impl Dog {
    /// Preferred breed label: standardized first, raw breed second.
    pub fn display_breed(&self) -> Option<&str> {
        self.standardized_breed
            .as_deref()
            .or(self.breed.as_deref())
            .filter(|b| !b.is_empty())
    }

    pub fn display_size(&self) -> Option<&str> {
        self.standardized_size
            .as_deref()
            .or(self.size.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Profile fields embedded in the dog record by the upstream profiler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DogProfilerData {
    pub description: Option<String>,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub looking_for: Option<String>,
    pub personality_traits: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub deal_breakers: Option<Vec<String>>,
    pub fun_fact: Option<String>,
    pub energy_level: Option<String>,
    pub home_type: Option<String>,
    pub experience_level: Option<String>,
    pub quality_score: Option<f64>,
}

/// Enrichment record from `/api/enhanced_animals`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancedDogData {
    pub id: i64,
    #[serde(default)]
    pub enhanced_description: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub looking_for: Option<String>,
    #[serde(default)]
    pub personality_traits: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub deal_breakers: Option<Vec<String>>,
    #[serde(default)]
    pub fun_fact: Option<String>,
    #[serde(default)]
    pub energy_level: Option<String>,
    #[serde(default)]
    pub home_type: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub quality_score: Option<f64>,
    #[serde(default)]
    pub good_with_kids: Option<bool>,
    #[serde(default)]
    pub good_with_dogs: Option<bool>,
    #[serde(default)]
    pub good_with_cats: Option<bool>,
    #[serde(default)]
    pub good_with_strangers: Option<bool>,
}

/// Read-only view over the profile fields shared by [`EnhancedDogData`] and
/// [`DogProfilerData`], used by presentation code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileView<'a> {
    pub about: Option<&'a str>,
    pub looking_for: Option<&'a str>,
    pub personality_traits: &'a [String],
    pub interests: &'a [String],
    pub deal_breakers: &'a [String],
    pub fun_fact: Option<&'a str>,
    pub energy_level: Option<&'a str>,
    pub home_type: Option<&'a str>,
    pub experience_level: Option<&'a str>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

fn list(v: &Option<Vec<String>>) -> &[String] {
    v.as_deref().unwrap_or(&[])
}

impl EnhancedDogData {
    /// About text priority: bio, then enhanced description.
    pub fn profile(&self) -> ProfileView<'_> {
        ProfileView {
            about: non_empty(&self.bio).or(non_empty(&self.enhanced_description)),
            looking_for: non_empty(&self.looking_for),
            personality_traits: list(&self.personality_traits),
            interests: list(&self.interests),
            deal_breakers: list(&self.deal_breakers),
            fun_fact: non_empty(&self.fun_fact),
            energy_level: non_empty(&self.energy_level),
            home_type: non_empty(&self.home_type),
            experience_level: non_empty(&self.experience_level),
        }
    }
}

impl DogProfilerData {
    /// About text priority: bio, then description.
    pub fn profile(&self) -> ProfileView<'_> {
        ProfileView {
            about: non_empty(&self.bio).or(non_empty(&self.description)),
            looking_for: non_empty(&self.looking_for),
            personality_traits: list(&self.personality_traits),
            interests: list(&self.interests),
            deal_breakers: list(&self.deal_breakers),
            fun_fact: non_empty(&self.fun_fact),
            energy_level: non_empty(&self.energy_level),
            home_type: non_empty(&self.home_type),
            experience_level: non_empty(&self.experience_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_dog_parses() {
        let dog: Dog = serde_json::from_str(
            r#"{"id": 1, "slug": "buddy-1", "name": "Buddy", "adoption_url": "https://x/1",
                "unexpected_field": true}"#,
        )
        .unwrap();
        assert_eq!(dog.id, 1);
        assert!(dog.organization.is_none());
        assert!(dog.properties.is_empty());
    }

    #[test]
    fn test_dog_without_name_is_rejected() {
        let result = serde_json::from_str::<Dog>(r#"{"id": 1, "slug": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_breed_prefers_standardized() {
        let dog: Dog = serde_json::from_str(
            r#"{"id": 1, "slug": "a", "name": "A", "breed": "lab mix",
                "standardized_breed": "Labrador Retriever"}"#,
        )
        .unwrap();
        assert_eq!(dog.display_breed(), Some("Labrador Retriever"));
    }

    #[test]
    fn test_enhanced_profile_prefers_bio() {
        let enhanced = EnhancedDogData {
            id: 1,
            bio: Some("Bio text".into()),
            enhanced_description: Some("Description".into()),
            ..Default::default()
        };
        assert_eq!(enhanced.profile().about, Some("Bio text"));

        let fallback = EnhancedDogData {
            id: 1,
            enhanced_description: Some("Description".into()),
            ..Default::default()
        };
        assert_eq!(fallback.profile().about, Some("Description"));
    }
}
