use crate::country::normalize_country_for_api;
use crate::vocabulary::{AgeCategory, EnergyLevel, ExperienceLevel, HomeType, Sex, Size};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Search parameters in backend vocabulary. The mandatory availability
/// constraints are not represented here; the client always adds them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DogSearchQuery {
    pub search: Option<String>,
    pub breed: Option<String>,
    pub breed_group: Option<String>,
    pub standardized_size: Option<Size>,
    pub age_category: Option<AgeCategory>,
    pub sex: Option<Sex>,
    pub energy_level: Option<EnergyLevel>,
    pub home_type: Option<HomeType>,
    pub experience_level: Option<ExperienceLevel>,
    pub available_to_country: Option<String>,
    pub organization_id: Option<i64>,
    pub good_with_kids: Option<bool>,
    pub good_with_dogs: Option<bool>,
    pub good_with_cats: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCountsQuery {
    pub search: Option<String>,
    pub breed: Option<String>,
    pub standardized_size: Option<Size>,
    pub age_category: Option<AgeCategory>,
    pub sex: Option<Sex>,
    pub available_to_country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationQuery {
    pub country: Option<String>,
    pub active_only: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl OrganizationQuery {
    pub fn active() -> Self {
        Self {
            active_only: Some(true),
            ..Default::default()
        }
    }
}

/// Filter context supplied by a caller when asking for remaining filter
/// options. Values are in caller vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_category: Option<AgeCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adoptable_to_country: Option<String>,
}

impl FilterCriteria {
    /// Canonical cache-key suffix: present fields only, keys sorted,
    /// compact JSON. An empty filter set hashes to `{}`.
    pub fn filter_hash(&self) -> String {
        let mut fields: Vec<(&'static str, Value)> = Vec::with_capacity(5);
        if let Some(v) = &self.breed {
            fields.push(("breed", Value::from(v.as_str())));
        }
        if let Some(v) = self.size {
            fields.push(("size", Value::from(v.as_str())));
        }
        if let Some(v) = self.age_category {
            fields.push(("age_category", Value::from(v.as_str())));
        }
        if let Some(v) = self.sex {
            fields.push(("sex", Value::from(v.as_str())));
        }
        if let Some(v) = &self.adoptable_to_country {
            fields.push(("adoptable_to_country", Value::from(v.as_str())));
        }
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let mut map = Map::new();
        for (key, value) in fields {
            map.insert(key.to_string(), value);
        }
        Value::Object(map).to_string()
    }

    /// Translate into the backend query for `/api/animals/meta/filter_counts`.
    pub fn to_query(&self) -> FilterCountsQuery {
        FilterCountsQuery {
            search: None,
            breed: self.breed.clone(),
            standardized_size: self.size,
            age_category: self.age_category,
            sex: self.sex,
            available_to_country: normalize_country_for_api(
                self.adoptable_to_country.as_deref(),
            ),
        }
    }
}
