//! Repository layer for data access operations.
//!
//! Narrow per-entity repositories exposing only the queries the
//! services actually use; no generic one-size-fits-all abstraction.

mod app_user_repo;
mod blog_repo;
mod category_repo;
mod comment_repo;

pub use app_user_repo::AppUserRepository;
pub use blog_repo::BlogRepository;
pub use category_repo::CategoryRepository;
pub use comment_repo::CommentRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
#[derive(Clone)]
pub struct Repositories {
    pub blogs: BlogRepository,
    pub categories: CategoryRepository,
    pub comments: CommentRepository,
    pub app_users: AppUserRepository,
}

impl Repositories {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            blogs: BlogRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool.clone()),
            comments: CommentRepository::new(pool.clone()),
            app_users: AppUserRepository::new(pool),
        }
    }
}
