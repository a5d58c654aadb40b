use rescuedogs_mcp_application::ports::CachedData;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: CachedData,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(value: CachedData, expires_at: Instant) -> Self {
        Self { value, expires_at }
    }

    /// An entry whose expiry is at or before `now` is dead.
    #[inline]
    pub fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}
