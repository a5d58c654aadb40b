use super::CacheEntry;
use arc_swap::ArcSwap;
use dashmap::DashMap;
use rescuedogs_mcp_application::ports::{CacheStats, CacheStore, CachedData};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

type EntryMap = DashMap<String, CacheEntry, FxBuildHasher>;

/// Process-wide TTL response cache.
///
/// Entries live in a sharded map behind an [`ArcSwap`] so that `flush`
/// replaces the whole map in one atomic store. Expiry is lazy on read and
/// eager in [`CacheStore::sweep_expired`], which the sweep job calls
/// periodically. Concurrent misses on the same key are not coalesced; the
/// last writer wins.
pub struct ResponseCache {
    entries: ArcSwap<EntryMap>,
    default_ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

enum Lookup {
    Hit(CachedData),
    Expired,
    Missing,
}

impl ResponseCache {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: ArcSwap::from_pointee(DashMap::with_hasher(FxBuildHasher)),
            default_ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn lookup(&self, map: &EntryMap, key: &str, now: Instant) -> Lookup {
        match map.get(key) {
            Some(entry) if entry.is_live(now) => Lookup::Hit(entry.value.clone()),
            Some(_) => Lookup::Expired,
            None => Lookup::Missing,
        }
    }
}

impl CacheStore for ResponseCache {
    fn get(&self, key: &str) -> Option<CachedData> {
        let map = self.entries.load();
        let now = Instant::now();

        match self.lookup(&map, key, now) {
            Lookup::Hit(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value)
            }
            Lookup::Expired => {
                map.remove_if(key, |_, entry| !entry.is_live(now));
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Lookup::Missing => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    fn set(&self, key: &str, value: CachedData, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(value, Instant::now() + ttl);
        self.entries.load().insert(key.to_string(), entry);
    }

    fn has(&self, key: &str) -> bool {
        let now = Instant::now();
        self.entries
            .load()
            .get(key)
            .is_some_and(|entry| entry.is_live(now))
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.load().remove(key).is_some()
    }

    fn flush(&self) {
        let previous = self
            .entries
            .swap(Arc::new(DashMap::with_hasher(FxBuildHasher)));
        debug!(dropped = previous.len(), "Response cache flushed");
    }

    /// Stored entries, including expired ones not yet swept.
    fn len(&self) -> usize {
        self.entries.load().len()
    }

    fn sweep_expired(&self) -> usize {
        let map = self.entries.load();
        let now = Instant::now();
        let before = map.len();
        map.retain(|_, entry| entry.is_live(now));
        before.saturating_sub(map.len())
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            keys: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
