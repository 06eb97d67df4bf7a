//! Read-through listing cache.
//!
//! The cache is an explicit dependency of the services that use it,
//! never ambient static state. Entries expire absolutely after the
//! configured TTL, and every blog write invalidates the listing keys.
//! Cache failures degrade to the database path; they never fail a
//! request.

mod memory;
mod noop;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use memory::MemoryCache;
pub use noop::NoopCache;

use crate::config::CacheConfig;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cache operation failed: {0}")]
    Operation(String),
}

/// Unified interface over the cache backends.
#[async_trait]
pub trait AppCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// `ttl` of `None` uses the backend's default.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>)
    -> Result<(), CacheError>;

    async fn remove(&self, key: &str) -> Result<(), CacheError>;

    async fn clear(&self) -> Result<(), CacheError>;
}

/// Picks the backend for the `[cache]` settings section.
pub fn build_cache(config: &CacheConfig) -> Arc<dyn AppCache> {
    if config.enabled {
        Arc::new(MemoryCache::new(config))
    } else {
        Arc::new(NoopCache)
    }
}

/// Reads and deserializes a cached value. Errors are logged and
/// reported as a miss.
pub async fn get_json<T: DeserializeOwned>(cache: &dyn AppCache, key: &str) -> Option<T> {
    match cache.get(key).await {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding undecodable cache entry");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Cache read failed");
            None
        }
    }
}

/// Serializes and stores a value. Errors are logged and swallowed.
pub async fn put_json<T: Serialize>(cache: &dyn AppCache, key: &str, value: &T) {
    let bytes = match serde_json::to_vec(value) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(key, error = %e, "Cache serialization failed");
            return;
        }
    };
    if let Err(e) = cache.set(key, bytes, None).await {
        tracing::warn!(key, error = %e, "Cache write failed");
    }
}

/// Removes a key, logging failures instead of propagating them.
pub async fn invalidate(cache: &dyn AppCache, key: &str) {
    if let Err(e) = cache.remove(key).await {
        tracing::warn!(key, error = %e, "Cache invalidation failed");
    }
}
