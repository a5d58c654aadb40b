//! Rescue Dogs MCP Domain Layer
pub mod adoption_guide;
pub mod cache;
pub mod config;
pub mod country;
pub mod dog;
pub mod errors;
pub mod filters;
pub mod organization;
pub mod statistics;
pub mod vocabulary;

pub use cache::CacheCategory;
pub use config::{CliOverrides, Config, ConfigError};
pub use country::{normalize_country_for_api, normalize_country_for_guide};
pub use dog::{Dog, DogProfilerData, EnhancedDogData, ProfileView};
pub use errors::{classify, DomainError, ErrorKind, RawFailure};
pub use filters::{DogSearchQuery, FilterCountsQuery, FilterCriteria, OrganizationQuery};
pub use organization::{AdoptionFees, Organization, ServiceRegion};
pub use statistics::{
    BreedGroupCount, BreedStats, CountryStats, FilterCountsResponse, FilterOption,
    OrganizationStats, QualifyingBreed, Statistics,
};
pub use vocabulary::{
    ActivityLevel, AgeCategory, EnergyLevel, Experience, ExperienceLevel, GuideTopic, HomeType,
    ImagePreset, LivingSituation, ResponseFormat, Sex, Size,
};
