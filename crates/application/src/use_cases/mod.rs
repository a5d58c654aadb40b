pub mod breeds;
pub mod dogs;
pub mod guide;
pub mod images;
pub mod organizations;
pub mod statistics;

pub use breeds::ListBreedsUseCase;
pub use dogs::{
    DogDetails, DogListing, GetDogDetailsUseCase, MatchPreferencesRequest,
    MatchPreferencesUseCase, MatchResult, MatchedCriteria, SearchDogsRequest, SearchDogsUseCase,
};
pub use guide::GetAdoptionGuideUseCase;
pub use images::FetchImagesUseCase;
pub use organizations::ListOrganizationsUseCase;
pub use statistics::{GetFilterCountsUseCase, GetStatisticsUseCase};
