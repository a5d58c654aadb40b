#![allow(dead_code)]

use rescuedogs_mcp_application::ports::{CacheStats, CacheStore, CachedData};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Cache that only records how often it was swept.
pub struct SweepCountingCache {
    sweeps: AtomicUsize,
    expired_per_sweep: usize,
}

impl SweepCountingCache {
    pub fn new(expired_per_sweep: usize) -> Self {
        Self {
            sweeps: AtomicUsize::new(0),
            expired_per_sweep,
        }
    }

    pub fn sweeps(&self) -> usize {
        self.sweeps.load(Ordering::SeqCst)
    }
}

impl CacheStore for SweepCountingCache {
    fn get(&self, _key: &str) -> Option<CachedData> {
        None
    }

    fn set(&self, _key: &str, _value: CachedData, _ttl: Option<Duration>) {}

    fn has(&self, _key: &str) -> bool {
        false
    }

    fn delete(&self, _key: &str) -> bool {
        false
    }

    fn flush(&self) {}

    fn len(&self) -> usize {
        0
    }

    fn sweep_expired(&self) -> usize {
        self.sweeps.fetch_add(1, Ordering::SeqCst);
        self.expired_per_sweep
    }

    fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}
