//! Tool argument types. Every input rejects unknown fields and carries its
//! own defaults; range checks live in `validate`.
mod catalog;
mod dogs;
mod guide;

pub use catalog::{
    GetFilterCountsInput, GetStatisticsInput, ListBreedsInput, ListOrganizationsInput,
};
pub use dogs::{GetDogDetailsInput, MatchPreferencesInput, SearchDogsInput};
pub use guide::GetAdoptionGuideInput;

use rescuedogs_mcp_domain::DomainError;
use std::fmt::Display;

pub(crate) fn check_range<T>(field: &str, value: T, min: T, max: T) -> Result<(), DomainError>
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        return Err(DomainError::InvalidInput(format!(
            "{} must be between {} and {}, got {}",
            field, min, max, value
        )));
    }
    Ok(())
}

pub(crate) fn check_min<T>(field: &str, value: T, min: T) -> Result<(), DomainError>
where
    T: PartialOrd + Display + Copy,
{
    if value < min {
        return Err(DomainError::InvalidInput(format!(
            "{} must be at least {}, got {}",
            field, min, value
        )));
    }
    Ok(())
}
