mod get_adoption_guide;

pub use get_adoption_guide::GetAdoptionGuideUseCase;
