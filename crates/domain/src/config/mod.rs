//! Server configuration.
//!
//! - `root`: main configuration, load order and CLI overrides
//! - `api`: upstream REST API
//! - `images`: image CDN
//! - `cache`: response cache lifetimes and sweeping
//! - `logging`: log level
//! - `errors`: configuration errors

pub mod api;
pub mod cache;
pub mod errors;
pub mod images;
pub mod logging;
pub mod root;

pub use api::ApiConfig;
pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use images::ImagesConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
