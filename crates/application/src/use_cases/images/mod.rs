mod fetch_images;

pub use fetch_images::FetchImagesUseCase;
