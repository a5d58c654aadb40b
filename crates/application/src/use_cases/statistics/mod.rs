mod get_filter_counts;
mod get_statistics;

pub use get_filter_counts::GetFilterCountsUseCase;
pub use get_statistics::GetStatisticsUseCase;
