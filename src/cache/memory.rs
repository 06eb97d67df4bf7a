//! In-memory cache backend with absolute TTL expiration.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::cache::{AppCache, CacheError};
use crate::config::CacheConfig;

struct Entry {
    value: Vec<u8>,
    expires_at: Instant,
}

/// Dashmap-backed cache. Expired entries are dropped lazily on read
/// and purged when the map hits its size limit.
pub struct MemoryCache {
    store: DashMap<String, Entry>,
    default_ttl: Duration,
    max_entries: usize,
}

impl MemoryCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            store: DashMap::new(),
            default_ttl: Duration::from_secs(config.ttl_seconds),
            max_entries: config.max_entries.max(1),
        }
    }

    fn purge_expired(&self) {
        let now = Instant::now();
        self.store.retain(|_, entry| entry.expires_at > now);
    }
}

#[async_trait]
impl AppCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        if let Some(entry) = self.store.get(key) {
            if entry.expires_at > Instant::now() {
                return Ok(Some(entry.value.clone()));
            }
            drop(entry);
            self.store.remove(key);
        }
        Ok(None)
    }

    async fn set(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        if self.store.len() >= self.max_entries && !self.store.contains_key(key) {
            self.purge_expired();
            if self.store.len() >= self.max_entries {
                // Still full of live entries; drop an arbitrary one
                // rather than growing without bound.
                if let Some(victim) = self.store.iter().next().map(|e| e.key().clone()) {
                    self.store.remove(&victim);
                }
            }
        }

        let expires_at = Instant::now() + ttl.unwrap_or(self.default_ttl);
        self.store.insert(key.to_string(), Entry { value, expires_at });
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.store.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        self.store.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with_ttl(ttl_seconds: u64, max_entries: usize) -> MemoryCache {
        MemoryCache::new(&CacheConfig {
            enabled: true,
            ttl_seconds,
            max_entries,
        })
    }

    #[tokio::test]
    async fn round_trips_values() {
        let cache = cache_with_ttl(60, 16);
        cache.set("blogs:all", b"payload".to_vec(), None).await.unwrap();
        assert_eq!(cache.get("blogs:all").await.unwrap(), Some(b"payload".to_vec()));
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = cache_with_ttl(60, 16);
        cache
            .set("blogs:all", b"payload".to_vec(), Some(Duration::from_millis(10)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cache.get("blogs:all").await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_invalidates_immediately() {
        let cache = cache_with_ttl(60, 16);
        cache.set("blogs:all", b"payload".to_vec(), None).await.unwrap();
        cache.remove("blogs:all").await.unwrap();
        assert_eq!(cache.get("blogs:all").await.unwrap(), None);
    }

    #[tokio::test]
    async fn size_limit_is_enforced() {
        let cache = cache_with_ttl(60, 2);
        cache.set("a", vec![1], None).await.unwrap();
        cache.set("b", vec![2], None).await.unwrap();
        cache.set("c", vec![3], None).await.unwrap();
        assert!(cache.store.len() <= 2);
    }
}
