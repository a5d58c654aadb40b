//! Caller-facing enumerations and their backend spellings.
//!
//! Every enumerated input value maps to exactly one backend value. Parsing an
//! unknown value is a caller error, there is no fallback.

use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(DomainError::InvalidInput(format!(
                        "unknown {} '{}', expected one of: {}",
                        $label,
                        other,
                        Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))),
                }
            }
        }
    };
}

vocabulary! {
    /// Standardized size. Caller and backend share the spelling.
    Size, "size" {
        Tiny => "Tiny",
        Small => "Small",
        Medium => "Medium",
        Large => "Large",
        XLarge => "XLarge",
    }
}

vocabulary! {
    AgeCategory, "age category" {
        Puppy => "puppy",
        Young => "young",
        Adult => "adult",
        Senior => "senior",
    }
}

vocabulary! {
    Sex, "sex" {
        Male => "male",
        Female => "female",
    }
}

vocabulary! {
    EnergyLevel, "energy level" {
        Low => "low",
        Medium => "medium",
        High => "high",
        VeryHigh => "very_high",
    }
}

vocabulary! {
    HomeType, "home type" {
        ApartmentOk => "apartment_ok",
        HousePreferred => "house_preferred",
        HouseRequired => "house_required",
    }
}

vocabulary! {
    ExperienceLevel, "experience level" {
        FirstTimeOk => "first_time_ok",
        SomeExperience => "some_experience",
        ExperiencedOnly => "experienced_only",
    }
}

vocabulary! {
    LivingSituation, "living situation" {
        Apartment => "apartment",
        HouseSmallGarden => "house_small_garden",
        HouseLargeGarden => "house_large_garden",
        Rural => "rural",
    }
}

vocabulary! {
    ActivityLevel, "activity level" {
        Sedentary => "sedentary",
        Moderate => "moderate",
        Active => "active",
        VeryActive => "very_active",
    }
}

vocabulary! {
    Experience, "experience" {
        FirstTime => "first_time",
        Some => "some",
        Experienced => "experienced",
    }
}

vocabulary! {
    ImagePreset, "image preset" {
        Thumbnail => "thumbnail",
        Medium => "medium",
    }
}

vocabulary! {
    ResponseFormat, "response format" {
        Markdown => "markdown",
        Json => "json",
    }
}

vocabulary! {
    GuideTopic, "adoption guide topic" {
        Overview => "overview",
        Transport => "transport",
        Fees => "fees",
        Requirements => "requirements",
        Timeline => "timeline",
    }
}

impl AgeCategory {
    /// Backend spelling (capitalized).
    pub fn api_value(&self) -> &'static str {
        match self {
            AgeCategory::Puppy => "Puppy",
            AgeCategory::Young => "Young",
            AgeCategory::Adult => "Adult",
            AgeCategory::Senior => "Senior",
        }
    }
}

impl Sex {
    /// Backend spelling (capitalized).
    pub fn api_value(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl LivingSituation {
    pub fn home_type(&self) -> HomeType {
        match self {
            LivingSituation::Apartment => HomeType::ApartmentOk,
            LivingSituation::HouseSmallGarden => HomeType::HousePreferred,
            LivingSituation::HouseLargeGarden => HomeType::HousePreferred,
            LivingSituation::Rural => HomeType::HouseRequired,
        }
    }
}

impl ActivityLevel {
    pub fn energy_level(&self) -> EnergyLevel {
        match self {
            ActivityLevel::Sedentary => EnergyLevel::Low,
            ActivityLevel::Moderate => EnergyLevel::Medium,
            ActivityLevel::Active => EnergyLevel::High,
            ActivityLevel::VeryActive => EnergyLevel::VeryHigh,
        }
    }
}

impl Experience {
    pub fn experience_level(&self) -> ExperienceLevel {
        match self {
            Experience::FirstTime => ExperienceLevel::FirstTimeOk,
            Experience::Some => ExperienceLevel::SomeExperience,
            Experience::Experienced => ExperienceLevel::ExperiencedOnly,
        }
    }
}

impl ImagePreset {
    /// CDN transform segment for this preset.
    pub fn transform(&self) -> &'static str {
        match self {
            ImagePreset::Thumbnail => "w=200,h=200,fit=cover,q=70,f=jpeg",
            ImagePreset::Medium => "w=400,h=400,fit=cover,q=75,f=jpeg",
        }
    }
}

impl Default for ImagePreset {
    fn default() -> Self {
        ImagePreset::Thumbnail
    }
}

impl Default for ResponseFormat {
    fn default() -> Self {
        ResponseFormat::Markdown
    }
}

impl Default for GuideTopic {
    fn default() -> Self {
        GuideTopic::Overview
    }
}
