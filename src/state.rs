//! Application state shared across request handlers.

use std::sync::Arc;

use crate::cache::AppCache;
use crate::config::{JwtConfig, UploadsConfig};
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Shared state for Axum's `State` extractor. Cloning is cheap: the
/// pool, services, and cache are all `Arc`-based internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct pool access for health checks
    pub db_pool: AsyncDbPool,
    /// JWT configuration for token generation and validation
    pub jwt_config: JwtConfig,
    /// Where uploaded blog images are stored
    pub uploads: UploadsConfig,
}

impl AppState {
    pub fn new(
        pool: AsyncDbPool,
        jwt_config: JwtConfig,
        uploads: UploadsConfig,
        cache: Arc<dyn AppCache>,
    ) -> Self {
        let repos = Repositories::new(pool.clone());
        let services = Services::new(repos, cache);
        Self {
            services,
            db_pool: pool,
            jwt_config,
            uploads,
        }
    }
}
