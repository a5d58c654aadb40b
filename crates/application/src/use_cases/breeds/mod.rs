mod list_breeds;

pub use list_breeds::ListBreedsUseCase;
