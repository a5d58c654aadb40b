mod entry;
mod storage;

pub use entry::CacheEntry;
pub use storage::ResponseCache;
